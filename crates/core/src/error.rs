/// Domain error taxonomy shared by every handler.
///
/// Store failures reported by the driver are classified into these kinds at
/// the HTTP boundary; handlers raise `NotFound` and `Validation` directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl CoreError {
    /// Shorthand for a missing row identified by a displayable key.
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn not_found_formats_entity_and_key() {
        let err = CoreError::not_found("Account", "a@b.com");
        assert_matches!(&err, CoreError::NotFound { entity: "Account", key } if key == "a@b.com");
        assert_eq!(err.to_string(), "Account a@b.com not found");
    }

    #[test]
    fn not_found_accepts_numeric_keys() {
        let err = CoreError::not_found("Server", 42);
        assert_eq!(err.to_string(), "Server 42 not found");
    }
}
