use commission_db::models::sales::sales_record::employee_id_hash;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::SalesRecordRepositoryImpl;

impl SalesRecordRepositoryImpl {
    /// IDs of the records whose employee id hashes to `hash`, in insertion order.
    pub fn find_ids_by_employee_id_hash(
        &self,
        hash: i64,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        let store = self.store.read();
        Ok(store
            .by_employee_id_hash
            .get(&hash)
            .cloned()
            .unwrap_or_default())
    }

    pub fn find_ids_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        self.find_ids_by_employee_id_hash(employee_id_hash(employee_id))
    }
}
