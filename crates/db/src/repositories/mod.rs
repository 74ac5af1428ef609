//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept a checked-out `&mut PgConnection` and issue exactly one statement.
//! Callers own the pool connection guard, so the connection is returned to
//! the pool when the caller's scope ends.

pub mod account_repo;
pub mod character_repo;
pub mod inventory_repo;
pub mod item_repo;
pub mod server_repo;

pub use account_repo::AccountRepo;
pub use character_repo::CharacterRepo;
pub use inventory_repo::InventoryRepo;
pub use item_repo::ItemRepo;
pub use server_repo::ServerRepo;
