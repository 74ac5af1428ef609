//! Row models and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the request bodies that touch that table

pub mod account;
pub mod character;
pub mod id;
pub mod inventory;
pub mod item;
pub mod server;
