//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity when their identifiers match, regardless
/// of the rest of their state (a renamed character is still that character).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Whether `other` carries the same identity as `self`.
    fn same_identity_as<E: Entity<Id = Self::Id>>(&self, other: &E) -> bool {
        self.id() == other.id()
    }
}
