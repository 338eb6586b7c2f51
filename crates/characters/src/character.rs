//! The validated character record.

use std::sync::Arc;

use charforge_core::{CharacterId, DomainResult, Entity};

use crate::name::CharacterName;
use crate::registry::CharacterRegistry;
use crate::stats::{AttackPower, Health};

/// A character with a validated name, health and attack power.
///
/// Every field is checked before it is stored, so a `Character` is never
/// observable with an illegal value. The value is move-only: dropping it (or
/// calling [`Character::release`]) ends its lifetime and decrements the live
/// count of the registry that created it, exactly once.
pub struct Character {
    id: CharacterId,
    name: CharacterName,
    health: Health,
    attack_power: AttackPower,
    registry: Arc<CharacterRegistry>,
}

impl Character {
    /// Create a character in the process-wide registry.
    pub fn new(name: impl Into<String>, health: i32, attack_power: i32) -> DomainResult<Self> {
        CharacterRegistry::global().create(name, health, attack_power)
    }

    /// Create a default character (`"Name"`, invincible, no attack power) in the
    /// process-wide registry.
    pub fn new_default() -> Self {
        CharacterRegistry::global().create_default()
    }

    /// Issue an id for already-validated fields. Only the registry calls this.
    pub(crate) fn assemble(
        registry: Arc<CharacterRegistry>,
        name: CharacterName,
        health: Health,
        attack_power: AttackPower,
    ) -> Self {
        let id = registry.issue();
        tracing::debug!(%id, name = %name, health = health.value(), attack_power = attack_power.value(), "character created");
        Self {
            id,
            name,
            health,
            attack_power,
            registry,
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn personal_id(&self) -> u64 {
        self.id.as_u64()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn name_value(&self) -> &CharacterName {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health.value()
    }

    pub fn health_value(&self) -> Health {
        self.health
    }

    pub fn attack_power(&self) -> i32 {
        self.attack_power.value()
    }

    pub fn attack_power_value(&self) -> AttackPower {
        self.attack_power
    }

    pub fn is_invincible(&self) -> bool {
        self.health.is_invincible()
    }

    /// Replace the name if `candidate` passes the name rules.
    ///
    /// On failure the current name is kept and the violation is returned.
    pub fn set_name(&mut self, candidate: impl Into<String>) -> DomainResult<()> {
        match CharacterName::parse(candidate) {
            Ok(name) => {
                tracing::debug!(id = %self.id, from = %self.name, to = %name, "character renamed");
                self.name = name;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id = %self.id, error = %err, "character rename rejected");
                Err(err)
            }
        }
    }

    /// `"<name> <health> <attack power>"`, same as the `Display` output.
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }

    /// End this character's lifetime.
    ///
    /// Equivalent to dropping it; spelled out for call sites that want the
    /// release to be explicit.
    pub fn release(self) {
        drop(self);
    }
}

impl Entity for Character {
    type Id = CharacterId;

    fn id(&self) -> CharacterId {
        self.id
    }
}

impl core::fmt::Display for Character {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} {}", self.name, self.health, self.attack_power)
    }
}

impl core::fmt::Debug for Character {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Character")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("health", &self.health)
            .field("attack_power", &self.attack_power)
            .finish_non_exhaustive()
    }
}

impl Drop for Character {
    fn drop(&mut self) {
        self.registry.retire();
        tracing::debug!(id = %self.id, "character released");
    }
}
