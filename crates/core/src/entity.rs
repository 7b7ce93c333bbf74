//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// An entity is the same thing before and after mutation; its identifier is
/// what carries that continuity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
