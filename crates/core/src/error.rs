//! Domain error model.

use thiserror::Error;

use crate::limits::{INVINCIBLE_HEALTH, MAX_ATTACK_POWER, MAX_HEALTH};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a rejected input. There are no transient or fatal failures
/// in the character domain, so nothing here is worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A candidate name broke one of the name grammar rules.
    #[error("invalid name: {0}")]
    InvalidName(NameViolation),

    /// A candidate health value was out of range.
    #[error(
        "invalid health {0}: must be {} (invincible) or between 1 and {}",
        INVINCIBLE_HEALTH,
        MAX_HEALTH
    )]
    InvalidHealth(i32),

    /// A candidate attack power exceeded the cap.
    #[error("invalid attack power {0}: cannot exceed {}", MAX_ATTACK_POWER)]
    InvalidAttackPower(i32),
}

impl DomainError {
    pub fn invalid_name(violation: NameViolation) -> Self {
        Self::InvalidName(violation)
    }

    pub fn invalid_health(value: i32) -> Self {
        Self::InvalidHealth(value)
    }

    pub fn invalid_attack_power(value: i32) -> Self {
        Self::InvalidAttackPower(value)
    }

    /// The name rule that was broken, if this is a name error.
    pub fn name_violation(&self) -> Option<NameViolation> {
        match self {
            Self::InvalidName(v) => Some(*v),
            _ => None,
        }
    }
}

/// Which name rule a candidate broke.
///
/// Positions are zero-based character indices.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum NameViolation {
    #[error("character name cannot be empty")]
    Empty,

    #[error("name must start with an uppercase letter")]
    NotCapitalized,

    #[error("name length cannot exceed {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("last character cannot be a space")]
    TrailingSpace,

    #[error("name must contain only alphabetic characters and spaces (found {ch:?} at {position})")]
    InvalidCharacter { ch: char, position: usize },

    #[error("name must not contain a space following another space (at {position})")]
    ConsecutiveSpaces { position: usize },
}

impl From<NameViolation> for DomainError {
    fn from(value: NameViolation) -> Self {
        Self::InvalidName(value)
    }
}
