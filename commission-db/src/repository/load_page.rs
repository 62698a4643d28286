use super::pagination::{Page, PageRequest};
use crate::models::identifiable::Identifiable;

/// Generic repository trait for listing entities in insertion order, one page at a time
pub trait LoadPage<T: Identifiable>: Send + Sync {
    /// Load the entities selected by `page`
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The items of the page together with the overall total
    /// * `Err` - An error if the store could not be read
    fn load_page(
        &self,
        page: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;

    /// Load every entity
    fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
