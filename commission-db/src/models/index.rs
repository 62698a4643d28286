use super::identifiable::Identifiable;

/// Trait for index records kept alongside stored entities for lookups
pub trait Index: Identifiable {}
