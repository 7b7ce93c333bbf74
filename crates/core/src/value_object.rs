//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared field-by-field.
///
/// Two value objects with the same attribute values *are* the same value;
/// there is no identity to preserve. A "modified" value object is simply a
/// new one, which keeps them safe to copy around and share.
///
/// Contrast with [`crate::Entity`], where two instances with the same id are
/// the same entity regardless of the rest of their state.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
