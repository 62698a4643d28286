//! Test helper module for session-based test isolation
//!
//! Every context owns fresh in-memory stores, so tests never observe each
//! other's records or rate edits.

use commission_api::error::ApiResult;

use crate::config::SeedConfig;
use crate::memory_repositories::MemoryRepositories;
use crate::session::DashboardSession;

/// Seed shared by all test sessions so seeded data is reproducible
pub const TEST_SEED: u64 = 20_240_101;

/// Setup a seeded session with the standard rate table
///
/// # Example
///
/// ```rust,ignore
/// #[test]
/// fn test_example() -> ApiResult<()> {
///     let session = setup_test_context()?;
///     let records = session.list_records()?;
///     // ...
///     Ok(())
/// }
/// ```
pub fn setup_test_context() -> ApiResult<DashboardSession> {
    DashboardSession::seeded(&SeedConfig::default().with_seed(TEST_SEED))
}

/// Setup a session with no records and the standard rate table
pub fn setup_empty_context() -> ApiResult<DashboardSession> {
    let repos = MemoryRepositories::new().create_all_repositories();
    DashboardSession::new(repos, &SeedConfig::default().with_seed(TEST_SEED))
}
