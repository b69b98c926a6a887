// src/data/planet.rs

use sqlx::SqliteConnection;

use crate::{
    error::{AppError, is_foreign_key_violation, is_unique_violation},
    models::planet::{NewPlanet, Planet},
};

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Planet>, AppError> {
    let planets = sqlx::query_as::<_, Planet>(
        "SELECT id, name, population, terrain, diameter FROM planets ORDER BY id",
    )
    .fetch_all(conn)
    .await?;

    Ok(planets)
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Planet>, AppError> {
    let planet = sqlx::query_as::<_, Planet>(
        "SELECT id, name, population, terrain, diameter FROM planets WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(planet)
}

pub async fn get_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Planet, AppError> {
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Planet with id {} not found", id)))
}

pub async fn exists_by_name(conn: &mut SqliteConnection, name: &str) -> Result<bool, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM planets WHERE name = ?")
        .bind(name)
        .fetch_one(conn)
        .await?;

    Ok(count > 0)
}

pub async fn create(
    conn: &mut SqliteConnection,
    new_planet: &NewPlanet,
) -> Result<Planet, AppError> {
    sqlx::query_as::<_, Planet>(
        r#"
        INSERT INTO planets (name, population, terrain, diameter)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, population, terrain, diameter
        "#,
    )
    .bind(&new_planet.name)
    .bind(&new_planet.population)
    .bind(&new_planet.terrain)
    .bind(&new_planet.diameter)
    .fetch_one(conn)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Duplicate(format!(
                "A planet named '{}' already exists",
                new_planet.name
            ))
        } else {
            tracing::error!("Failed to create planet: {:?}", e);
            AppError::from(e)
        }
    })
}

pub async fn delete_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Planet, AppError> {
    sqlx::query_as::<_, Planet>(
        "DELETE FROM planets WHERE id = ? RETURNING id, name, population, terrain, diameter",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            AppError::Conflict(format!(
                "The planet with id {} is still in someone's favorites",
                id
            ))
        } else {
            tracing::error!("Failed to delete planet: {:?}", e);
            AppError::from(e)
        }
    })?
    .ok_or_else(|| AppError::NotFound(format!("Planet with id {} not found", id)))
}
