pub mod load_batch;
pub mod load_page;
pub mod create_batch;
pub mod pagination;
pub mod rate_table;

// Re-exports
pub use load_batch::*;
pub use load_page::*;
pub use create_batch::*;
pub use pagination::*;
pub use rate_table::*;
