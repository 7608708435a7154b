//! Entity trait: things that keep their identity while everything else about
//! them is replaced.

/// An object addressed by id rather than by value.
///
/// Inventory entries are entities: two jars of "Basil" added at different
/// times are different entries and are removed independently.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
