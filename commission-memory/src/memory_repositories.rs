use std::sync::Arc;

use crate::repository::sales::{SalesRepoFactory, SalesRepositories};

/// Entry point for building the in-memory repositories of one session
pub struct MemoryRepositories {
    sales_factory: Arc<SalesRepoFactory>,
}

impl MemoryRepositories {
    pub fn new() -> Self {
        Self {
            sales_factory: SalesRepoFactory::new(),
        }
    }

    /// Create all repositories sharing this instance's stores
    pub fn create_all_repositories(&self) -> SalesRepositories {
        self.sales_factory.build_all_repos()
    }
}

impl Default for MemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}
