//! Account request DTOs.
//!
//! The `account` row itself is never serialized back to clients; only its
//! status column and a login verdict leave the API.

use serde::Deserialize;

/// Body of `POST /account/new`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    pub password: Option<String>,
    pub status: Option<String>,
}

/// Body of `GET /account/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of routes that only identify an account.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountKey {
    pub email: String,
}

/// Body of `POST /account/status`. A `null` status clears the column.
#[derive(Debug, Clone, Deserialize)]
pub struct SetAccountStatus {
    pub email: String,
    pub status: Option<String>,
}
