//! Numeric character stats: health and attack power.

use charforge_core::limits::{INVINCIBLE_HEALTH, MAX_ATTACK_POWER, MAX_HEALTH};
use charforge_core::{DomainError, DomainResult, ValueObject};

/// Health points, or the invincible sentinel.
///
/// Valid values are exactly [`INVINCIBLE_HEALTH`] or `1..=MAX_HEALTH`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Health(i32);

impl Health {
    pub const INVINCIBLE: Health = Health(INVINCIBLE_HEALTH);

    pub fn new(value: i32) -> DomainResult<Self> {
        if value == INVINCIBLE_HEALTH {
            return Ok(Self::INVINCIBLE);
        }
        if value <= 0 || value > MAX_HEALTH {
            return Err(DomainError::invalid_health(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn is_invincible(self) -> bool {
        self.0 == INVINCIBLE_HEALTH
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::INVINCIBLE
    }
}

impl ValueObject for Health {
    type Raw = i32;

    fn into_raw(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Health {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl core::fmt::Display for Health {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Attack power, capped at [`MAX_ATTACK_POWER`].
///
/// Negative values are legal; only the upper bound is enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct AttackPower(i32);

impl AttackPower {
    pub fn new(value: i32) -> DomainResult<Self> {
        if value > MAX_ATTACK_POWER {
            return Err(DomainError::invalid_attack_power(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl ValueObject for AttackPower {
    type Raw = i32;

    fn into_raw(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for AttackPower {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl core::fmt::Display for AttackPower {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
