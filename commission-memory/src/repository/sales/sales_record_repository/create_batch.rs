use commission_db::models::index_aware::IndexAware;
use commission_db::models::sales::sales_record::SalesRecordModel;
use commission_db::repository::create_batch::CreateBatch;
use std::collections::HashSet;
use std::error::Error;

use super::repo_impl::SalesRecordRepositoryImpl;

impl SalesRecordRepositoryImpl {
    pub(super) fn create_batch_impl(
        repo: &SalesRecordRepositoryImpl,
        items: Vec<SalesRecordModel>,
    ) -> Result<Vec<SalesRecordModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut store = repo.store.write();

        // Reject the whole batch before touching the store
        let mut batch_ids = HashSet::with_capacity(items.len());
        for item in &items {
            if store.positions.contains_key(&item.id) || !batch_ids.insert(item.id) {
                return Err(format!("Sales record {} already exists", item.id).into());
            }
        }

        for item in &items {
            let idx = item.to_index();
            store.insert(item.clone(), idx);
        }

        tracing::debug!(count = items.len(), total = store.len(), "stored sales record batch");

        Ok(items)
    }
}

impl CreateBatch<SalesRecordModel> for SalesRecordRepositoryImpl {
    fn create_batch(
        &self,
        items: Vec<SalesRecordModel>,
    ) -> Result<Vec<SalesRecordModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{create_test_repository, create_test_sales_record};
    use commission_db::repository::create_batch::CreateBatch;

    #[test]
    fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = create_test_repository();

        let mut records = Vec::new();
        for i in 0..5 {
            records.push(create_test_sales_record(&format!("EMP000{i}"), "Standard Plan"));
        }

        let saved = repo.create_batch(records)?;

        assert_eq!(saved.len(), 5);
        assert_eq!(repo.count(), 5);
        for record in &saved {
            assert!(record.employee_id.as_str().starts_with("EMP"));
        }

        Ok(())
    }

    #[test]
    fn test_create_batch_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = create_test_repository();

        let saved = repo.create_batch(Vec::new())?;

        assert_eq!(saved.len(), 0);
        assert_eq!(repo.count(), 0);

        Ok(())
    }

    #[test]
    fn test_create_batch_with_duplicate_id_stores_nothing() {
        let repo = create_test_repository();
        let first = create_test_sales_record("EMP0001", "Elite Package");
        let mut second = create_test_sales_record("EMP0002", "Elite Package");
        second.id = first.id;

        let result = repo.create_batch(vec![first, second]);

        assert!(result.is_err());
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_create_batch_rejects_existing_id(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = create_test_repository();
        let record = create_test_sales_record("EMP0001", "Elite Package");
        repo.create_batch(vec![record.clone()])?;

        assert!(repo.create_batch(vec![record]).is_err());
        assert_eq!(repo.count(), 1);

        Ok(())
    }
}
