//! Identity issuing and live-instance accounting.
//!
//! A [`CharacterRegistry`] owns the two counters every character depends on:
//! the next identifier to hand out and the number of characters still alive.
//! The process has one lazily created global registry; tests and embedders can
//! create isolated ones with [`CharacterRegistry::shared`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;

use charforge_core::{CharacterId, DomainResult};

use crate::character::Character;
use crate::name::CharacterName;
use crate::stats::{AttackPower, Health};

static GLOBAL: Lazy<Arc<CharacterRegistry>> = Lazy::new(CharacterRegistry::shared);

/// Counter context for characters.
///
/// Invariants:
/// - `id_count` only grows and equals the number of successful constructions.
/// - `object_count` equals constructions minus releases.
#[derive(Debug, Default)]
pub struct CharacterRegistry {
    next_id: AtomicU64,
    live: AtomicU64,
}

impl CharacterRegistry {
    /// Fresh registry with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh registry behind an `Arc`, ready to create characters.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// The process-wide registry used by [`Character::new`] and
    /// [`Character::new_default`].
    pub fn global() -> &'static Arc<Self> {
        &GLOBAL
    }

    /// Validate the fields and create a character owned by the caller.
    ///
    /// Fields are checked name first, then health, then attack power; the first
    /// failure is returned. A rejected candidate consumes no identifier.
    pub fn create(
        self: &Arc<Self>,
        name: impl Into<String>,
        health: i32,
        attack_power: i32,
    ) -> DomainResult<Character> {
        let validated = CharacterName::parse(name).and_then(|name| {
            let health = Health::new(health)?;
            let attack_power = AttackPower::new(attack_power)?;
            Ok((name, health, attack_power))
        });

        match validated {
            Ok((name, health, attack_power)) => {
                Ok(Character::assemble(Arc::clone(self), name, health, attack_power))
            }
            Err(err) => {
                tracing::warn!(error = %err, "character construction rejected");
                Err(err)
            }
        }
    }

    /// Create a character with the default name, invincible health and zero
    /// attack power.
    pub fn create_default(self: &Arc<Self>) -> Character {
        Character::assemble(
            Arc::clone(self),
            CharacterName::default(),
            Health::default(),
            AttackPower::default(),
        )
    }

    /// Characters created by this registry that have not been released yet.
    pub fn object_count(&self) -> u64 {
        self.live.load(Ordering::SeqCst)
    }

    /// Characters ever created by this registry. Also the next id to be issued.
    pub fn id_count(&self) -> u64 {
        self.next_id.load(Ordering::SeqCst)
    }

    /// Reserve the next identifier and count one more live character.
    pub(crate) fn issue(&self) -> CharacterId {
        let raw = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        CharacterId::from_raw(raw)
    }

    /// Count one character as released.
    pub(crate) fn retire(&self) {
        let before = self.live.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(before > 0, "live character count underflow");
    }
}
