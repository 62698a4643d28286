pub mod factory;
pub mod rate_table_repository;
pub mod sales_record_repository;

pub use factory::{SalesRepoFactory, SalesRepositories};
pub use rate_table_repository::RateTableRepositoryImpl;
pub use sales_record_repository::SalesRecordRepositoryImpl;
