use uuid::Uuid;

/// Trait for stored entities that carry a unique UUID
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;
}
