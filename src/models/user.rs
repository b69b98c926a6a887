// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppError, utils::validation::present};

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct User {
    pub id: i64,

    /// Unique e-mail address.
    pub email: String,

    /// Unique login name.
    pub username: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,

    pub is_active: bool,
}

/// DTO for creating a new user.
///
/// Every field is optional at the serde level so a missing property is
/// reported by name instead of as a generic deserialization failure.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(required, length(min = 1, max = 120))]
    pub email: Option<String>,
    #[validate(required, length(min = 1, max = 120))]
    pub username: Option<String>,
    /// Hashed before storage, so only a sanity cap applies.
    #[validate(required, length(min = 1, max = 1024))]
    pub password: Option<String>,
    #[validate(length(max = 120))]
    pub first_name: Option<String>,
    #[validate(length(max = 120))]
    pub last_name: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
}

/// A validated user, ready to be hashed and inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = AppError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            email: present(req.email, "email", "user")?,
            username: present(req.username, "username", "user")?,
            password: present(req.password, "password", "user")?,
            first_name: req.first_name,
            last_name: req.last_name,
            is_active: present(req.is_active, "is_active", "user")?,
        })
    }
}
