// src/data/user.rs

use sqlx::SqliteConnection;

use crate::{
    error::{AppError, is_unique_violation},
    models::user::{NewUser, User},
};

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, username, password, first_name, last_name, is_active
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(users)
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, username, password, first_name, last_name, is_active
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(user)
}

pub async fn get_by_id(conn: &mut SqliteConnection, id: i64) -> Result<User, AppError> {
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
}

pub async fn exists_by_email(conn: &mut SqliteConnection, email: &str) -> Result<bool, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(conn)
        .await?;

    Ok(count > 0)
}

pub async fn exists_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<bool, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(conn)
        .await?;

    Ok(count > 0)
}

/// Inserts a user. `new_user.password` must already be hashed.
pub async fn create(conn: &mut SqliteConnection, new_user: &NewUser) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, username, password, first_name, last_name, is_active)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, email, username, password, first_name, last_name, is_active
        "#,
    )
    .bind(&new_user.email)
    .bind(&new_user.username)
    .bind(&new_user.password)
    .bind(&new_user.first_name)
    .bind(&new_user.last_name)
    .bind(new_user.is_active)
    .fetch_one(conn)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Duplicate(format!(
                "A user with email '{}' or username '{}' already exists",
                new_user.email, new_user.username
            ))
        } else {
            tracing::error!("Failed to create user: {:?}", e);
            AppError::from(e)
        }
    })
}

/// Deletes a user and, through the foreign key cascade, their favorites.
pub async fn delete_by_id(conn: &mut SqliteConnection, id: i64) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        r#"
        DELETE FROM users
        WHERE id = ?
        RETURNING id, email, username, password, first_name, last_name, is_active
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(|e| {
        tracing::error!("Failed to delete user: {:?}", e);
        AppError::from(e)
    })?
    .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
}
