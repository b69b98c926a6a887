// src/handlers/user.rs

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    data,
    error::AppError,
    models::{
        api::{ErrorResponse, MessageResponse},
        user::{CreateUserRequest, User},
    },
    service,
    utils::json::{AppJson, AppPath},
};

pub static USER_TAG: &str = "users";

/// Lists all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn list_users(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let users = data::user::list(&mut conn).await?;

    Ok(Json(users))
}

/// Retrieves a single user by ID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn get_user(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let user = data::user::get_by_id(&mut conn, id).await?;

    Ok(Json(user))
}

/// Creates a user.
///
/// `email`, `username`, `password` and `is_active` are required; email and
/// username must be unused. The password is stored hashed and never returned.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "The created user", body = User),
        (status = 400, description = "Missing, empty or duplicate field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn create_user(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let user = service::user::create_user(&mut tx, payload).await?;
    tx.commit().await?;

    Ok(Json(user))
}

/// Deletes a user and their favorites.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn delete_user(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let message = service::user::delete_user(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(MessageResponse::new(message)))
}
