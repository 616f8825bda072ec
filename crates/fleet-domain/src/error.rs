//! Error types for fleet operations

use thiserror::Error;

/// Which namespace a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Rocket,
    Mission,
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EntityKind::Rocket => write!(f, "rocket"),
            EntityKind::Mission => write!(f, "mission"),
        }
    }
}

/// The two failure kinds callers are expected to distinguish.
///
/// `NotFound` and `AlreadyExists` are specializations of `InvalidArgument`:
/// the caller referenced a name it should have known was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
}

/// Errors produced by entity guards and registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: EntityKind, name: String },

    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: EntityKind, name: String },

    #[error("{0}")]
    InvalidState(String),
}

impl FleetError {
    /// Collapse the variants into the two caller-facing kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FleetError::InvalidState(_) => ErrorKind::InvalidState,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub fn rocket_not_found(name: impl Into<String>) -> Self {
        FleetError::NotFound {
            kind: EntityKind::Rocket,
            name: name.into(),
        }
    }

    pub fn mission_not_found(name: impl Into<String>) -> Self {
        FleetError::NotFound {
            kind: EntityKind::Mission,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_invalid_argument() {
        let err = FleetError::rocket_not_found("Ghost");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "rocket not found: Ghost");
    }

    #[test]
    fn test_already_exists_is_invalid_argument() {
        let err = FleetError::AlreadyExists {
            kind: EntityKind::Mission,
            name: "Mars".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "mission 'Mars' already exists");
    }

    #[test]
    fn test_invalid_state_kind() {
        let err = FleetError::InvalidState("cannot do that".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }
}
