// src/models/mod.rs

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
