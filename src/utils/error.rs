use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Dog,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Person => f.write_str("Person"),
            EntityKind::Dog => f.write_str("Dog"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParkError {
    /// Every mutation miss reports the same client-facing message.
    #[error("Dog Not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("Duplicate {kind} id in seed data: {id}")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("Dog {dog} references unknown owner {owner}")]
    UnknownOwner { dog: String, owner: String },

    #[error("Ownership link broken for dog {dog}: {reason}")]
    BrokenLink { dog: String, reason: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Photo service error: {message}")]
    PhotoError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl ParkError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        ParkError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ParkError::NotFound { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ParkError::NotFound { .. } => "Query `people` or `dogs` to list valid ids",
            ParkError::DuplicateId { .. }
            | ParkError::UnknownOwner { .. }
            | ParkError::BrokenLink { .. } => "Check the seed provider output",
            ParkError::ApiError(_) => "Check network access to the photo endpoint or run with --fixtures",
            ParkError::IoError(_) => "Check file paths and that the port is free",
            ParkError::PhotoError { .. } => "Check the upstream response format",
            ParkError::ConfigValidationError { .. } | ParkError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and restart"
            }
            ParkError::ServerError { .. } => "Check the bind address and port",
        }
    }

    /// Process exit code used by the binary when startup fails.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParkError::ConfigValidationError { .. } | ParkError::InvalidConfigValueError { .. } => 2,
            ParkError::ApiError(_) | ParkError::PhotoError { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            ParkError::not_found(EntityKind::Dog, "x").to_string(),
            "Dog Not found"
        );
        assert_eq!(
            ParkError::not_found(EntityKind::Person, "x").to_string(),
            "Dog Not found"
        );
    }

    #[test]
    fn test_exit_codes() {
        let err = ParkError::InvalidConfigValueError {
            field: "port".to_string(),
            value: "0".to_string(),
            reason: "too small".to_string(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = ParkError::PhotoError {
            message: "empty image url".to_string(),
        };
        assert_eq!(err.exit_code(), 3);
        assert!(!err.is_not_found());
        assert!(ParkError::not_found(EntityKind::Dog, "x").is_not_found());
    }
}
