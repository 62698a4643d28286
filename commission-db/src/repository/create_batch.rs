use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
/// 
/// Any entity that implements the Identifiable trait can be created using this
/// trait. A batch is applied as a whole: either every item is stored or, on
/// error, none is.
/// 
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl CreateBatch<SalesRecordModel> for SalesRecordRepositoryImpl {
///     fn create_batch(
///         &self,
///         items: Vec<SalesRecordModel>,
///     ) -> Result<Vec<SalesRecordModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
pub trait CreateBatch<T: Identifiable>: Send + Sync {
    /// Store multiple items at once
    /// 
    /// # Arguments
    /// * `items` - A vector of entities to create
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The created entities
    /// * `Err` - An error if any item was rejected; nothing is stored in that case
    fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
