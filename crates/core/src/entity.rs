//! Entity trait: things with an identity that outlives any one snapshot.

/// A domain object identified by id rather than by value.
///
/// A product keeps its id when the collection it lives in is replaced, which
/// is what lets a table keep its selections across reloads.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether `other` is the same entity (possibly a different snapshot of it).
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
