//! Entity trait: identity + continuity across state changes.

/// Minimal interface the in-memory collections require.
///
/// An entity is anything with a stable typed identifier; two records with the
/// same id are the same entity regardless of field values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
