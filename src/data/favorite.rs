// src/data/favorite.rs

use sqlx::SqliteConnection;

use crate::{
    error::{AppError, is_foreign_key_violation, is_unique_violation},
    models::favorite::{CharacterFavorite, PlanetFavorite},
};

const CHARACTER_FAVORITE_SELECT: &str = r#"
    SELECT f.id, f.user_id, f.character_id, c.name AS character_name
    FROM character_favorites f
    JOIN characters c ON c.id = f.character_id
"#;

const PLANET_FAVORITE_SELECT: &str = r#"
    SELECT f.id, f.user_id, f.planet_id, p.name AS planet_name
    FROM planet_favorites f
    JOIN planets p ON p.id = f.planet_id
"#;

pub fn duplicate_character(name: &str) -> AppError {
    AppError::Duplicate(format!(
        "The character '{}' is already in the favorites list",
        name
    ))
}

pub fn duplicate_planet(name: &str) -> AppError {
    AppError::Duplicate(format!(
        "The planet '{}' is already in the favorites list",
        name
    ))
}

async fn character_name(conn: &mut SqliteConnection, character_id: i64) -> Result<String, AppError> {
    let name: String = sqlx::query_scalar("SELECT name FROM characters WHERE id = ?")
        .bind(character_id)
        .fetch_one(conn)
        .await?;

    Ok(name)
}

async fn planet_name(conn: &mut SqliteConnection, planet_id: i64) -> Result<String, AppError> {
    let name: String = sqlx::query_scalar("SELECT name FROM planets WHERE id = ?")
        .bind(planet_id)
        .fetch_one(conn)
        .await?;

    Ok(name)
}

pub async fn list_character_favorites(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<CharacterFavorite>, AppError> {
    let favorites = sqlx::query_as::<_, CharacterFavorite>(&format!(
        "{} WHERE f.user_id = ? ORDER BY f.id",
        CHARACTER_FAVORITE_SELECT
    ))
    .bind(user_id)
    .fetch_all(conn)
    .await?;

    Ok(favorites)
}

/// The favorite a user holds for a given character, if any.
pub async fn find_character_favorite(
    conn: &mut SqliteConnection,
    user_id: i64,
    character_id: i64,
) -> Result<Option<CharacterFavorite>, AppError> {
    let favorite = sqlx::query_as::<_, CharacterFavorite>(&format!(
        "{} WHERE f.user_id = ? AND f.character_id = ?",
        CHARACTER_FAVORITE_SELECT
    ))
    .bind(user_id)
    .bind(character_id)
    .fetch_optional(conn)
    .await?;

    Ok(favorite)
}

/// A favorite row by its own id, scoped to its owner.
pub async fn find_character_favorite_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
    favorite_id: i64,
) -> Result<Option<CharacterFavorite>, AppError> {
    let favorite = sqlx::query_as::<_, CharacterFavorite>(&format!(
        "{} WHERE f.id = ? AND f.user_id = ?",
        CHARACTER_FAVORITE_SELECT
    ))
    .bind(favorite_id)
    .bind(user_id)
    .fetch_optional(conn)
    .await?;

    Ok(favorite)
}

pub async fn create_character_favorite(
    conn: &mut SqliteConnection,
    user_id: i64,
    character_id: i64,
) -> Result<CharacterFavorite, AppError> {
    let inserted = sqlx::query_scalar::<_, i64>(
        "INSERT INTO character_favorites (user_id, character_id) VALUES (?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(character_id)
    .fetch_one(&mut *conn)
    .await;

    let id = match inserted {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => {
            let name = character_name(conn, character_id).await?;
            return Err(duplicate_character(&name));
        }
        Err(e) if is_foreign_key_violation(&e) => {
            return Err(AppError::NotFound(format!(
                "Character with id {} not found",
                character_id
            )));
        }
        Err(e) => {
            tracing::error!("Failed to create character favorite: {:?}", e);
            return Err(AppError::from(e));
        }
    };

    find_character_favorite_by_id(conn, user_id, id)
        .await?
        .ok_or_else(|| {
            AppError::InternalServerError(format!(
                "Character favorite {} vanished after insert",
                id
            ))
        })
}

pub async fn delete_character_favorite(
    conn: &mut SqliteConnection,
    favorite_id: i64,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM character_favorites WHERE id = ?")
        .bind(favorite_id)
        .execute(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete character favorite: {:?}", e);
            AppError::from(e)
        })?;

    Ok(())
}

/// How many favorites point at a character.
pub async fn count_by_character(
    conn: &mut SqliteConnection,
    character_id: i64,
) -> Result<i64, AppError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM character_favorites WHERE character_id = ?")
            .bind(character_id)
            .fetch_one(conn)
            .await?;

    Ok(count)
}

pub async fn list_planet_favorites(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<PlanetFavorite>, AppError> {
    let favorites = sqlx::query_as::<_, PlanetFavorite>(&format!(
        "{} WHERE f.user_id = ? ORDER BY f.id",
        PLANET_FAVORITE_SELECT
    ))
    .bind(user_id)
    .fetch_all(conn)
    .await?;

    Ok(favorites)
}

pub async fn find_planet_favorite(
    conn: &mut SqliteConnection,
    user_id: i64,
    planet_id: i64,
) -> Result<Option<PlanetFavorite>, AppError> {
    let favorite = sqlx::query_as::<_, PlanetFavorite>(&format!(
        "{} WHERE f.user_id = ? AND f.planet_id = ?",
        PLANET_FAVORITE_SELECT
    ))
    .bind(user_id)
    .bind(planet_id)
    .fetch_optional(conn)
    .await?;

    Ok(favorite)
}

pub async fn find_planet_favorite_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
    favorite_id: i64,
) -> Result<Option<PlanetFavorite>, AppError> {
    let favorite = sqlx::query_as::<_, PlanetFavorite>(&format!(
        "{} WHERE f.id = ? AND f.user_id = ?",
        PLANET_FAVORITE_SELECT
    ))
    .bind(favorite_id)
    .bind(user_id)
    .fetch_optional(conn)
    .await?;

    Ok(favorite)
}

pub async fn create_planet_favorite(
    conn: &mut SqliteConnection,
    user_id: i64,
    planet_id: i64,
) -> Result<PlanetFavorite, AppError> {
    let inserted = sqlx::query_scalar::<_, i64>(
        "INSERT INTO planet_favorites (user_id, planet_id) VALUES (?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(planet_id)
    .fetch_one(&mut *conn)
    .await;

    let id = match inserted {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => {
            let name = planet_name(conn, planet_id).await?;
            return Err(duplicate_planet(&name));
        }
        Err(e) if is_foreign_key_violation(&e) => {
            return Err(AppError::NotFound(format!(
                "Planet with id {} not found",
                planet_id
            )));
        }
        Err(e) => {
            tracing::error!("Failed to create planet favorite: {:?}", e);
            return Err(AppError::from(e));
        }
    };

    find_planet_favorite_by_id(conn, user_id, id)
        .await?
        .ok_or_else(|| {
            AppError::InternalServerError(format!("Planet favorite {} vanished after insert", id))
        })
}

pub async fn delete_planet_favorite(
    conn: &mut SqliteConnection,
    favorite_id: i64,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM planet_favorites WHERE id = ?")
        .bind(favorite_id)
        .execute(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete planet favorite: {:?}", e);
            AppError::from(e)
        })?;

    Ok(())
}

pub async fn count_by_planet(
    conn: &mut SqliteConnection,
    planet_id: i64,
) -> Result<i64, AppError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM planet_favorites WHERE planet_id = ?")
            .bind(planet_id)
            .fetch_one(conn)
            .await?;

    Ok(count)
}
