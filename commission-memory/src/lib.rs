pub mod config;
pub mod memory_repositories;
pub mod repository;
pub mod seed;
pub mod session;

pub use config::{ConfigError, SeedConfig};
pub use memory_repositories::MemoryRepositories;
pub use session::DashboardSession;

#[cfg(test)]
pub mod test_helper;
