// src/handlers/character.rs

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
        character::{Character, CreateCharacterRequest},
    },
    service,
    utils::json::{AppJson, AppPath},
};

pub static CHARACTER_TAG: &str = "characters";

/// Lists all characters.
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<Character>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn list_characters(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let characters = data::character::list(&mut conn).await?;

    Ok(Json(characters))
}

/// Retrieves a single character by ID.
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i64, Path, description = "Character ID")),
    responses(
        (status = 200, description = "The character", body = Character),
        (status = 400, description = "Character not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn get_character(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let character = data::character::get_by_id(&mut conn, id).await?;

    Ok(Json(character))
}

/// Creates a character.
///
/// `name`, `specie`, `height` and `gender` are required and non-empty;
/// the name must be unused.
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterRequest,
    responses(
        (status = 200, description = "The created character", body = Character),
        (status = 400, description = "Missing, empty or duplicate field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn create_character(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateCharacterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let character = service::character::create_character(&mut tx, payload).await?;
    tx.commit().await?;

    Ok(Json(character))
}

/// Deletes a character that nobody has in their favorites.
#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i64, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character deleted", body = MessageResponse),
        (status = 400, description = "Character not found or still a favorite", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn delete_character(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let message = service::character::delete_character(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(MessageResponse::new(message)))
}
