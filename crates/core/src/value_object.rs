//! Value object trait: equality by value, not identity.
//!
//! Character fields (name, health, attack power) are value objects: each one
//! can only be built through its validating constructor, so holding one is
//! proof that the value passed the domain rules.

/// Marker trait for validated value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity; two `Health(10)` values are interchangeable.
/// - **Entity**: has identity; two characters with the same fields but
///   different ids are different characters.
///
/// `Raw` is the primitive the value was validated from, handed back by
/// [`ValueObject::into_raw`] for display and accessors.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    type Raw;

    fn into_raw(self) -> Self::Raw;
}
