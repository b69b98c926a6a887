// src/data/mod.rs

//! Storage access. Every function takes an explicit `&mut SqliteConnection`,
//! which is either a pooled connection (reads) or the request's open
//! transaction (writes).

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
