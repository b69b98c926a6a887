// src/data/character.rs

use sqlx::SqliteConnection;

use crate::{
    error::{AppError, is_foreign_key_violation, is_unique_violation},
    models::character::{Character, NewCharacter},
};

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Character>, AppError> {
    let characters = sqlx::query_as::<_, Character>(
        "SELECT id, name, specie, height, gender FROM characters ORDER BY id",
    )
    .fetch_all(conn)
    .await?;

    Ok(characters)
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Character>, AppError> {
    let character = sqlx::query_as::<_, Character>(
        "SELECT id, name, specie, height, gender FROM characters WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(character)
}

pub async fn get_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Character, AppError> {
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Character with id {} not found", id)))
}

pub async fn exists_by_name(conn: &mut SqliteConnection, name: &str) -> Result<bool, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters WHERE name = ?")
        .bind(name)
        .fetch_one(conn)
        .await?;

    Ok(count > 0)
}

pub async fn create(
    conn: &mut SqliteConnection,
    new_character: &NewCharacter,
) -> Result<Character, AppError> {
    sqlx::query_as::<_, Character>(
        r#"
        INSERT INTO characters (name, specie, height, gender)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, specie, height, gender
        "#,
    )
    .bind(&new_character.name)
    .bind(&new_character.specie)
    .bind(&new_character.height)
    .bind(&new_character.gender)
    .fetch_one(conn)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Duplicate(format!(
                "A character named '{}' already exists",
                new_character.name
            ))
        } else {
            tracing::error!("Failed to create character: {:?}", e);
            AppError::from(e)
        }
    })
}

pub async fn delete_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Character, AppError> {
    sqlx::query_as::<_, Character>(
        "DELETE FROM characters WHERE id = ? RETURNING id, name, specie, height, gender",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            AppError::Conflict(format!(
                "The character with id {} is still in someone's favorites",
                id
            ))
        } else {
            tracing::error!("Failed to delete character: {:?}", e);
            AppError::from(e)
        }
    })?
    .ok_or_else(|| AppError::NotFound(format!("Character with id {} not found", id)))
}
