use commission_db::models::sales::sales_record::SalesRecordModel;
use commission_db::repository::load_batch::LoadBatch;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::SalesRecordRepositoryImpl;

impl SalesRecordRepositoryImpl {
    pub(super) fn load_batch_impl(
        repo: &SalesRecordRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<SalesRecordModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let store = repo.store.read();
        Ok(ids.iter().map(|id| store.get(id).cloned()).collect())
    }
}

impl LoadBatch<SalesRecordModel> for SalesRecordRepositoryImpl {
    fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<SalesRecordModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{create_test_repository, create_test_sales_record};
    use commission_db::repository::{create_batch::CreateBatch, load_batch::LoadBatch};
    use uuid::Uuid;

    #[test]
    fn test_load_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = create_test_repository();

        let mut records = Vec::new();
        for i in 0..3 {
            records.push(create_test_sales_record(&format!("EMP010{i}"), "Premium Package"));
        }
        let saved = repo.create_batch(records)?;

        let missing = Uuid::new_v4();
        let ids = vec![saved[2].id, missing, saved[0].id];
        let loaded = repo.load_batch(&ids)?;

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].as_ref().map(|r| r.id), Some(saved[2].id));
        assert!(loaded[1].is_none());
        assert_eq!(loaded[2].as_ref().map(|r| r.employee_id.as_str()), Some("EMP0100"));

        Ok(())
    }
}
