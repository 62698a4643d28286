use super::index::Index;

/// Trait for entities that derive a lookup index from their fields
pub trait IndexAware {
    /// The index record derived from this entity
    type IndexType: Index;

    /// Builds the index record for this entity
    fn to_index(&self) -> Self::IndexType;
}
