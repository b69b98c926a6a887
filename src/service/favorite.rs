// src/service/favorite.rs

use sqlx::SqliteConnection;

use crate::{
    data,
    error::AppError,
    models::favorite::{
        AddCharacterFavoriteRequest, AddPlanetFavoriteRequest, CharacterFavorite, Favorite,
        PlanetFavorite,
    },
    utils::validation::{present, validate_payload},
};

async fn ensure_user_exists(conn: &mut SqliteConnection, user_id: i64) -> Result<(), AppError> {
    data::user::get_by_id(conn, user_id).await.map(|_| ())
}

/// Adds a character to a user's favorites.
///
/// Fails with `Validation` on a missing/non-positive id, `NotFound` when the
/// user or character does not exist, and `Duplicate` (naming the character)
/// when the pair is already stored.
pub async fn add_character_favorite(
    conn: &mut SqliteConnection,
    payload: AddCharacterFavoriteRequest,
) -> Result<CharacterFavorite, AppError> {
    validate_payload(&payload, "favorite")?;
    let user_id = present(payload.user_id, "user_id", "favorite")?;
    let character_id = present(payload.character_id, "character_id", "favorite")?;

    ensure_user_exists(&mut *conn, user_id).await?;

    if let Some(existing) =
        data::favorite::find_character_favorite(&mut *conn, user_id, character_id).await?
    {
        return Err(data::favorite::duplicate_character(&existing.character_name));
    }

    data::character::get_by_id(&mut *conn, character_id).await?;

    let favorite = data::favorite::create_character_favorite(conn, user_id, character_id).await?;
    tracing::info!(
        user_id,
        favorite_id = favorite.id,
        "Added character '{}' to favorites",
        favorite.character_name
    );

    Ok(favorite)
}

/// Adds a planet to a user's favorites. Same rules as characters.
pub async fn add_planet_favorite(
    conn: &mut SqliteConnection,
    payload: AddPlanetFavoriteRequest,
) -> Result<PlanetFavorite, AppError> {
    validate_payload(&payload, "favorite")?;
    let user_id = present(payload.user_id, "user_id", "favorite")?;
    let planet_id = present(payload.planet_id, "planet_id", "favorite")?;

    ensure_user_exists(&mut *conn, user_id).await?;

    if let Some(existing) =
        data::favorite::find_planet_favorite(&mut *conn, user_id, planet_id).await?
    {
        return Err(data::favorite::duplicate_planet(&existing.planet_name));
    }

    data::planet::get_by_id(&mut *conn, planet_id).await?;

    let favorite = data::favorite::create_planet_favorite(conn, user_id, planet_id).await?;
    tracing::info!(
        user_id,
        favorite_id = favorite.id,
        "Added planet '{}' to favorites",
        favorite.planet_name
    );

    Ok(favorite)
}

/// Removes one of the user's character favorites and returns the
/// character's name.
pub async fn remove_character_favorite(
    conn: &mut SqliteConnection,
    user_id: i64,
    favorite_id: i64,
) -> Result<String, AppError> {
    let favorite = data::favorite::find_character_favorite_by_id(&mut *conn, user_id, favorite_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Character favorite with id {} not found for user {}",
                favorite_id, user_id
            ))
        })?;

    data::favorite::delete_character_favorite(conn, favorite.id).await?;
    tracing::info!(user_id, favorite_id, "Removed character favorite");

    Ok(favorite.character_name)
}

pub async fn remove_planet_favorite(
    conn: &mut SqliteConnection,
    user_id: i64,
    favorite_id: i64,
) -> Result<String, AppError> {
    let favorite = data::favorite::find_planet_favorite_by_id(&mut *conn, user_id, favorite_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Planet favorite with id {} not found for user {}",
                favorite_id, user_id
            ))
        })?;

    data::favorite::delete_planet_favorite(conn, favorite.id).await?;
    tracing::info!(user_id, favorite_id, "Removed planet favorite");

    Ok(favorite.planet_name)
}

/// All favorites of a user: characters first, then planets, each ordered by
/// favorite id.
pub async fn list_favorites(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<Favorite>, AppError> {
    ensure_user_exists(&mut *conn, user_id).await?;

    let characters = data::favorite::list_character_favorites(&mut *conn, user_id).await?;
    let planets = data::favorite::list_planet_favorites(conn, user_id).await?;

    Ok(characters
        .into_iter()
        .map(Favorite::Character)
        .chain(planets.into_iter().map(Favorite::Planet))
        .collect())
}
