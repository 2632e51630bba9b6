use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether the engine left spot and ticket untouched, so the caller may
    /// simply report the error and move on to the next vehicle.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidArgument(_) | DomainError::NotFound { .. } | DomainError::Conflict(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_lookup() {
        let err = DomainError::NotFound {
            entity: "Ticket",
            field: "vehicle_id",
            value: "ABCDEF".to_string(),
        };
        assert_eq!(err.to_string(), "Not found: Ticket with vehicle_id=ABCDEF");
    }

    #[test]
    fn persistence_failure_is_not_a_rejection() {
        assert!(!DomainError::PersistenceFailure("ticket 1".into()).is_rejection());
        assert!(DomainError::InvalidArgument("x".into()).is_rejection());
        assert!(DomainError::Conflict("x".into()).is_rejection());
    }
}
