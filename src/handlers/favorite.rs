// src/handlers/favorite.rs

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        api::{ErrorResponse, MessageResponse},
        favorite::{
            AddCharacterFavoriteRequest, AddPlanetFavoriteRequest, CharacterFavorite, Favorite,
            PlanetFavorite,
        },
    },
    service,
    utils::json::{AppJson, AppPath},
};

pub static FAVORITE_TAG: &str = "favorites";

/// The user in the path owns the favorite. A `user_id` repeated in the body
/// must agree with it.
fn bind_user_id(payload_user_id: &mut Option<i64>, path_user_id: i64) -> Result<(), AppError> {
    match *payload_user_id {
        Some(body_user_id) if body_user_id != path_user_id => Err(AppError::Validation(format!(
            "The 'user_id' property ({}) does not match the user in the path ({})",
            body_user_id, path_user_id
        ))),
        _ => {
            *payload_user_id = Some(path_user_id);
            Ok(())
        }
    }
}

/// Lists a user's character and planet favorites with resolved names.
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Character favorites followed by planet favorites", body = Vec<Favorite>),
        (status = 400, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn list_favorites(
    State(pool): State<SqlitePool>,
    AppPath(user_id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let favorites = service::favorite::list_favorites(&mut conn, user_id).await?;

    Ok(Json(favorites))
}

#[utoipa::path(
    post,
    path = "/users/{id}/favorites/characters",
    tag = FAVORITE_TAG,
    params(("id" = i64, Path, description = "User ID")),
    request_body = AddCharacterFavoriteRequest,
    responses(
        (status = 200, description = "The new favorite", body = CharacterFavorite),
        (status = 400, description = "Invalid payload, unknown user/character or already a favorite", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn add_character_favorite(
    State(pool): State<SqlitePool>,
    AppPath(user_id): AppPath<i64>,
    AppJson(mut payload): AppJson<AddCharacterFavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    bind_user_id(&mut payload.user_id, user_id)?;

    let mut tx = pool.begin().await?;
    let favorite = service::favorite::add_character_favorite(&mut tx, payload).await?;
    tx.commit().await?;

    Ok(Json(favorite))
}

#[utoipa::path(
    delete,
    path = "/users/{id}/favorites/characters/{fav_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i64, Path, description = "User ID"),
        ("fav_id" = i64, Path, description = "Character favorite ID")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 400, description = "Favorite not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn remove_character_favorite(
    State(pool): State<SqlitePool>,
    AppPath((user_id, favorite_id)): AppPath<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let name =
        service::favorite::remove_character_favorite(&mut tx, user_id, favorite_id).await?;
    tx.commit().await?;

    Ok(Json(MessageResponse::new(format!(
        "The character '{}' was removed from favorites",
        name
    ))))
}

#[utoipa::path(
    post,
    path = "/users/{id}/favorites/planets",
    tag = FAVORITE_TAG,
    params(("id" = i64, Path, description = "User ID")),
    request_body = AddPlanetFavoriteRequest,
    responses(
        (status = 200, description = "The new favorite", body = PlanetFavorite),
        (status = 400, description = "Invalid payload, unknown user/planet or already a favorite", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn add_planet_favorite(
    State(pool): State<SqlitePool>,
    AppPath(user_id): AppPath<i64>,
    AppJson(mut payload): AppJson<AddPlanetFavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    bind_user_id(&mut payload.user_id, user_id)?;

    let mut tx = pool.begin().await?;
    let favorite = service::favorite::add_planet_favorite(&mut tx, payload).await?;
    tx.commit().await?;

    Ok(Json(favorite))
}

#[utoipa::path(
    delete,
    path = "/users/{id}/favorites/planets/{fav_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i64, Path, description = "User ID"),
        ("fav_id" = i64, Path, description = "Planet favorite ID")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 400, description = "Favorite not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn remove_planet_favorite(
    State(pool): State<SqlitePool>,
    AppPath((user_id, favorite_id)): AppPath<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let name = service::favorite::remove_planet_favorite(&mut tx, user_id, favorite_id).await?;
    tx.commit().await?;

    Ok(Json(MessageResponse::new(format!(
        "The planet '{}' was removed from favorites",
        name
    ))))
}
