// src/models/planet.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppError, utils::validation::present};

/// Represents the 'planets' table in the database.
///
/// Population and diameter are free-form strings ("unknown", "200000") as
/// the source data is not consistently numeric.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub population: String,
    pub terrain: String,
    pub diameter: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreatePlanetRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(required, length(min = 1, max = 50))]
    pub population: Option<String>,
    #[validate(required, length(min = 1, max = 100))]
    pub terrain: Option<String>,
    #[validate(required, length(min = 1, max = 50))]
    pub diameter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub population: String,
    pub terrain: String,
    pub diameter: String,
}

impl TryFrom<CreatePlanetRequest> for NewPlanet {
    type Error = AppError;

    fn try_from(req: CreatePlanetRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: present(req.name, "name", "planet")?,
            population: present(req.population, "population", "planet")?,
            terrain: present(req.terrain, "terrain", "planet")?,
            diameter: present(req.diameter, "diameter", "planet")?,
        })
    }
}
