//! Request handlers.
//!
//! Every handler checks out one pooled connection, runs exactly one
//! repository call on it, and maps the outcome. The connection guard drops
//! (returning the connection to the pool) when the handler returns, on both
//! the success and the `?` error paths.

pub mod account;
pub mod character;
pub mod inventory;
pub mod item;
pub mod server;
