// src/handlers/planet.rs

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
        planet::{CreatePlanetRequest, Planet},
    },
    service,
    utils::json::{AppJson, AppPath},
};

pub static PLANET_TAG: &str = "planets";

/// Lists all planets.
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<Planet>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn list_planets(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let planets = data::planet::list(&mut conn).await?;

    Ok(Json(planets))
}

/// Retrieves a single planet by ID.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i64, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "The planet", body = Planet),
        (status = 400, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn get_planet(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let planet = data::planet::get_by_id(&mut conn, id).await?;

    Ok(Json(planet))
}

/// Creates a planet.
///
/// `name`, `diameter`, `terrain` and `population` are required and non-empty;
/// the name must be unused.
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetRequest,
    responses(
        (status = 200, description = "The created planet", body = Planet),
        (status = 400, description = "Missing, empty or duplicate field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn create_planet(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreatePlanetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let planet = service::planet::create_planet(&mut tx, payload).await?;
    tx.commit().await?;

    Ok(Json(planet))
}

/// Deletes a planet that nobody has in their favorites.
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i64, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageResponse),
        (status = 400, description = "Planet not found or still a favorite", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
)]
pub async fn delete_planet(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let message = service::planet::delete_planet(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(MessageResponse::new(message)))
}
