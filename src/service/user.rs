// src/service/user.rs

use sqlx::SqliteConnection;

use crate::{
    data,
    error::AppError,
    models::user::{CreateUserRequest, NewUser, User},
    utils::{hash::hash_password, validation::validate_payload},
};

/// Checks a create-user payload: required fields present and non-empty,
/// email and username not taken. Touches nothing.
pub async fn validate_new_user(
    conn: &mut SqliteConnection,
    payload: CreateUserRequest,
) -> Result<NewUser, AppError> {
    validate_payload(&payload, "user")?;
    let new_user = NewUser::try_from(payload)?;

    if data::user::exists_by_email(&mut *conn, &new_user.email).await? {
        return Err(AppError::Duplicate(format!(
            "A user with email '{}' already exists",
            new_user.email
        )));
    }

    if data::user::exists_by_username(&mut *conn, &new_user.username).await? {
        return Err(AppError::Duplicate(format!(
            "A user with username '{}' already exists",
            new_user.username
        )));
    }

    Ok(new_user)
}

/// Validates and inserts a user, storing only the password hash.
pub async fn create_user(
    conn: &mut SqliteConnection,
    payload: CreateUserRequest,
) -> Result<User, AppError> {
    let new_user = validate_new_user(&mut *conn, payload).await?;

    let hashed = NewUser {
        password: hash_password(&new_user.password)?,
        ..new_user
    };

    let user = data::user::create(conn, &hashed).await?;
    tracing::info!(user_id = user.id, "Created user '{}'", user.username);

    Ok(user)
}

/// Deletes a user together with their favorites.
/// Returns the confirmation message.
pub async fn delete_user(conn: &mut SqliteConnection, id: i64) -> Result<String, AppError> {
    let user = data::user::delete_by_id(conn, id).await?;
    tracing::info!(user_id = user.id, "Deleted user '{}'", user.username);

    Ok(format!("The user '{}' deleted successfully", user.username))
}
