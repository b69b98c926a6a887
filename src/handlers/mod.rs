// src/handlers/mod.rs

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
