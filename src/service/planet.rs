// src/service/planet.rs

use sqlx::SqliteConnection;

use crate::{
    data,
    error::AppError,
    models::planet::{CreatePlanetRequest, NewPlanet, Planet},
    utils::validation::validate_payload,
};

pub async fn validate_new_planet(
    conn: &mut SqliteConnection,
    payload: CreatePlanetRequest,
) -> Result<NewPlanet, AppError> {
    validate_payload(&payload, "planet")?;
    let new_planet = NewPlanet::try_from(payload)?;

    if data::planet::exists_by_name(conn, &new_planet.name).await? {
        return Err(AppError::Duplicate(format!(
            "A planet named '{}' already exists",
            new_planet.name
        )));
    }

    Ok(new_planet)
}

pub async fn create_planet(
    conn: &mut SqliteConnection,
    payload: CreatePlanetRequest,
) -> Result<Planet, AppError> {
    let new_planet = validate_new_planet(&mut *conn, payload).await?;
    let planet = data::planet::create(conn, &new_planet).await?;
    tracing::info!(planet_id = planet.id, "Created planet '{}'", planet.name);

    Ok(planet)
}

pub async fn delete_planet(conn: &mut SqliteConnection, id: i64) -> Result<String, AppError> {
    let planet = data::planet::get_by_id(&mut *conn, id).await?;

    let references = data::favorite::count_by_planet(&mut *conn, id).await?;
    if references > 0 {
        return Err(AppError::Conflict(format!(
            "The planet '{}' is a favorite of {} user(s) and cannot be deleted",
            planet.name, references
        )));
    }

    data::planet::delete_by_id(conn, id).await?;
    tracing::info!(planet_id = id, "Deleted planet '{}'", planet.name);

    Ok(format!(
        "The planet '{}' was destroyed for the Empire successfully",
        planet.name
    ))
}
