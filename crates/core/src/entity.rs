//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An inventory record is identified by its normalised product name; a user
/// account by its username. Two entities with equal ids are the same thing,
/// even when their other attributes differ.
pub trait Entity {
    /// Identity key.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
