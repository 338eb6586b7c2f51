//! Characters domain module.
//!
//! A [`Character`] is a validated record (name, health, attack power) with an
//! identity issued by a [`CharacterRegistry`]. The registry also tracks how many
//! characters are alive right now and how many were ever created.
//!
//! Construction goes through the process-wide registry unless a caller injects
//! its own:
//!
//! ```
//! use charforge_characters::CharacterRegistry;
//!
//! let registry = CharacterRegistry::shared();
//! let hero = registry.create("Leonardo da Vinci", 1000, 20)?;
//! assert_eq!(hero.to_string(), "Leonardo da Vinci 1000 20");
//! assert_eq!(registry.object_count(), 1);
//!
//! hero.release();
//! assert_eq!(registry.object_count(), 0);
//! assert_eq!(registry.id_count(), 1);
//! # Ok::<(), charforge_characters::DomainError>(())
//! ```

pub mod character;
pub mod name;
pub mod registry;
pub mod stats;

pub use character::Character;
pub use name::CharacterName;
pub use registry::CharacterRegistry;
pub use stats::{AttackPower, Health};

pub use charforge_core::{CharacterId, DomainError, DomainResult, NameViolation};

/// Number of characters alive in the process-wide registry.
pub fn object_count() -> u64 {
    CharacterRegistry::global().object_count()
}

/// Number of characters ever created in the process-wide registry.
pub fn id_count() -> u64 {
    CharacterRegistry::global().id_count()
}
