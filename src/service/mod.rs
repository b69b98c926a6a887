// src/service/mod.rs

//! Validation and business rules sitting between handlers and storage.
//! Functions here receive the connection their caller opened; writes are
//! expected to run inside the request's transaction.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
