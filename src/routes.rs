// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{character, favorite, planet, user},
    models,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Star Wars Favorites API", description = "Users, characters, planets and favorites"),
    paths(
        user::list_users,
        user::get_user,
        user::create_user,
        user::delete_user,
        favorite::list_favorites,
        favorite::add_character_favorite,
        favorite::remove_character_favorite,
        favorite::add_planet_favorite,
        favorite::remove_planet_favorite,
        character::list_characters,
        character::get_character,
        character::create_character,
        character::delete_character,
        planet::list_planets,
        planet::get_planet,
        planet::create_planet,
        planet::delete_planet,
    ),
    components(schemas(
        models::api::ErrorResponse,
        models::api::MessageResponse,
        models::user::User,
        models::user::CreateUserRequest,
        models::character::Character,
        models::character::CreateCharacterRequest,
        models::planet::Planet,
        models::planet::CreatePlanetRequest,
        models::favorite::Favorite,
        models::favorite::CharacterFavorite,
        models::favorite::PlanetFavorite,
        models::favorite::AddCharacterFavoriteRequest,
        models::favorite::AddPlanetFavoriteRequest,
    )),
    tags(
        (name = user::USER_TAG, description = "User accounts"),
        (name = favorite::FAVORITE_TAG, description = "Per-user favorites"),
        (name = character::CHARACTER_TAG, description = "Characters"),
        (name = planet::PLANET_TAG, description = "Planets"),
    )
)]
pub struct ApiDoc;

/// Assembles the main application router.
///
/// * Users, characters, planets and the favorites of a user.
/// * Swagger UI at `/docs`, OpenAPI document at `/docs/openapi.json`.
/// * Global middleware: request tracing and permissive CORS.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/users", get(user::list_users).post(user::create_user))
        .route("/users/{id}", get(user::get_user).delete(user::delete_user))
        .route("/users/{id}/favorites", get(favorite::list_favorites))
        .route(
            "/users/{id}/favorites/characters",
            post(favorite::add_character_favorite),
        )
        .route(
            "/users/{id}/favorites/characters/{fav_id}",
            delete(favorite::remove_character_favorite),
        )
        .route(
            "/users/{id}/favorites/planets",
            post(favorite::add_planet_favorite),
        )
        .route(
            "/users/{id}/favorites/planets/{fav_id}",
            delete(favorite::remove_planet_favorite),
        )
        .route(
            "/characters",
            get(character::list_characters).post(character::create_character),
        )
        .route(
            "/characters/{id}",
            get(character::get_character).delete(character::delete_character),
        )
        .route("/planets", get(planet::list_planets).post(planet::create_planet))
        .route(
            "/planets/{id}",
            get(planet::get_planet).delete(planet::delete_planet),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
