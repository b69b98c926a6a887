// src/models/character.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppError, utils::validation::present};

/// Represents the 'characters' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub specie: String,
    pub height: String,
    pub gender: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCharacterRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(required, length(min = 1, max = 50))]
    pub specie: Option<String>,
    #[validate(required, length(min = 1, max = 20))]
    pub height: Option<String>,
    #[validate(required, length(min = 1, max = 20))]
    pub gender: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub specie: String,
    pub height: String,
    pub gender: String,
}

impl TryFrom<CreateCharacterRequest> for NewCharacter {
    type Error = AppError;

    fn try_from(req: CreateCharacterRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: present(req.name, "name", "character")?,
            specie: present(req.specie, "specie", "character")?,
            height: present(req.height, "height", "character")?,
            gender: present(req.gender, "gender", "character")?,
        })
    }
}
