// src/models/favorite.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row of 'character_favorites' joined with the character's name.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct CharacterFavorite {
    pub id: i64,
    pub user_id: i64,
    pub character_id: i64,
    /// Resolved from 'characters' at read time.
    pub character_name: String,
}

/// A row of 'planet_favorites' joined with the planet's name.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct PlanetFavorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: i64,
    /// Resolved from 'planets' at read time.
    pub planet_name: String,
}

/// One entry of a user's favorites list.
/// Serialized without a tag; the `character_id` / `planet_id` key tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Favorite {
    Character(CharacterFavorite),
    Planet(PlanetFavorite),
}

/// DTO for adding a character favorite.
/// `user_id` may be omitted over HTTP, where it comes from the path.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AddCharacterFavoriteRequest {
    #[validate(required, range(min = 1))]
    pub user_id: Option<i64>,
    #[validate(required, range(min = 1))]
    pub character_id: Option<i64>,
}

/// DTO for adding a planet favorite.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AddPlanetFavoriteRequest {
    #[validate(required, range(min = 1))]
    pub user_id: Option<i64>,
    #[validate(required, range(min = 1))]
    pub planet_id: Option<i64>,
}
