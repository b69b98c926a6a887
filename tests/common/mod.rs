// tests/common/mod.rs

#![allow(dead_code)]

use sqlx::SqlitePool;
use starwars_api::{
    db,
    models::{
        character::{Character, CreateCharacterRequest},
        planet::{CreatePlanetRequest, Planet},
        user::{CreateUserRequest, User},
    },
    routes, service,
    state::AppState,
};

/// Fresh, migrated in-memory database.
pub async fn setup_pool() -> SqlitePool {
    let pool = db::connect_in_memory()
        .await
        .expect("Failed to open in-memory SQLite");

    db::migrate(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

/// Spawns the app on a random port against its own in-memory database.
/// Returns the base URL (e.g., "http://127.0.0.1:12345") and the pool.
pub async fn spawn_app() -> (String, SqlitePool) {
    let pool = setup_pool().await;

    let state = AppState { pool: pool.clone() };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, pool)
}

pub fn user_request(email: &str, username: &str) -> CreateUserRequest {
    CreateUserRequest {
        email: Some(email.to_string()),
        username: Some(username.to_string()),
        password: Some("password123".to_string()),
        first_name: Some("Luke".to_string()),
        last_name: None,
        is_active: Some(true),
    }
}

pub fn character_request(name: &str) -> CreateCharacterRequest {
    CreateCharacterRequest {
        name: Some(name.to_string()),
        specie: Some("Human".to_string()),
        height: Some("172".to_string()),
        gender: Some("male".to_string()),
    }
}

pub fn planet_request(name: &str) -> CreatePlanetRequest {
    CreatePlanetRequest {
        name: Some(name.to_string()),
        population: Some("200000".to_string()),
        terrain: Some("desert".to_string()),
        diameter: Some("10465".to_string()),
    }
}

pub async fn seed_user(pool: &SqlitePool, email: &str, username: &str) -> User {
    let mut conn = pool.acquire().await.unwrap();
    service::user::create_user(&mut conn, user_request(email, username))
        .await
        .expect("Failed to seed user")
}

pub async fn seed_character(pool: &SqlitePool, name: &str) -> Character {
    let mut conn = pool.acquire().await.unwrap();
    service::character::create_character(&mut conn, character_request(name))
        .await
        .expect("Failed to seed character")
}

pub async fn seed_planet(pool: &SqlitePool, name: &str) -> Planet {
    let mut conn = pool.acquire().await.unwrap();
    service::planet::create_planet(&mut conn, planet_request(name))
        .await
        .expect("Failed to seed planet")
}
