//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TicketsError`] via `#[from]`.

/// Top-level error for every ticket operation.
#[derive(Debug, thiserror::Error)]
pub enum TicketsError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Opaque failure from a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("unknown ticket status code {0}")]
    UnknownStatus(i32),
}

/// A lookup by identity matched no record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_entity_name_when_not_found() {
        let err = NotFoundError {
            entity: "Ticket",
            id: "999".to_string(),
        };
        assert_eq!(err.to_string(), "Ticket not found");
    }

    #[test]
    fn should_convert_validation_error_into_tickets_error() {
        let err: TicketsError = ValidationError::UnknownStatus(9).into();
        assert!(matches!(
            err,
            TicketsError::Validation(ValidationError::UnknownStatus(9))
        ));
    }

    #[test]
    fn should_mention_code_when_status_unknown() {
        assert_eq!(
            ValidationError::UnknownStatus(42).to_string(),
            "unknown ticket status code 42"
        );
    }
}
