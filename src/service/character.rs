// src/service/character.rs

use sqlx::SqliteConnection;

use crate::{
    data,
    error::AppError,
    models::character::{Character, CreateCharacterRequest, NewCharacter},
    utils::validation::validate_payload,
};

/// Checks a create-character payload without touching storage state.
pub async fn validate_new_character(
    conn: &mut SqliteConnection,
    payload: CreateCharacterRequest,
) -> Result<NewCharacter, AppError> {
    validate_payload(&payload, "character")?;
    let new_character = NewCharacter::try_from(payload)?;

    if data::character::exists_by_name(conn, &new_character.name).await? {
        return Err(AppError::Duplicate(format!(
            "A character named '{}' already exists",
            new_character.name
        )));
    }

    Ok(new_character)
}

pub async fn create_character(
    conn: &mut SqliteConnection,
    payload: CreateCharacterRequest,
) -> Result<Character, AppError> {
    let new_character = validate_new_character(&mut *conn, payload).await?;
    let character = data::character::create(conn, &new_character).await?;
    tracing::info!(character_id = character.id, "Created character '{}'", character.name);

    Ok(character)
}

/// Deletes a character unless some user still has it as a favorite.
pub async fn delete_character(conn: &mut SqliteConnection, id: i64) -> Result<String, AppError> {
    let character = data::character::get_by_id(&mut *conn, id).await?;

    let references = data::favorite::count_by_character(&mut *conn, id).await?;
    if references > 0 {
        return Err(AppError::Conflict(format!(
            "The character '{}' is a favorite of {} user(s) and cannot be deleted",
            character.name, references
        )));
    }

    data::character::delete_by_id(conn, id).await?;
    tracing::info!(character_id = id, "Deleted character '{}'", character.name);

    Ok(format!(
        "The character '{}' disappeared into the galaxy",
        character.name
    ))
}
