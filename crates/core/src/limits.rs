//! Fixed validation bounds for character fields.

/// Longest accepted name, in characters.
pub const MAX_NAME_LEN: usize = 32;

/// Highest accepted health value.
pub const MAX_HEALTH: i32 = 1000;

/// Health sentinel for an invincible character.
pub const INVINCIBLE_HEALTH: i32 = -1;

/// Highest accepted attack power. There is no lower bound.
pub const MAX_ATTACK_POWER: i32 = 500;
