pub mod create_batch;
pub mod find_ids_by_employee_id_hash;
pub mod load_batch;
pub mod load_page;
pub mod repo_impl;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::SalesRecordRepositoryImpl;
