use commission_db::models::sales::sales_record::SalesRecordModel;
use commission_db::repository::load_page::LoadPage;
use commission_db::repository::pagination::{Page, PageRequest};
use std::error::Error;

use super::repo_impl::SalesRecordRepositoryImpl;

impl LoadPage<SalesRecordModel> for SalesRecordRepositoryImpl {
    fn load_page(
        &self,
        page: PageRequest,
    ) -> Result<Page<SalesRecordModel>, Box<dyn Error + Send + Sync>> {
        let store = self.store.read();
        let total = store.len();
        let items = store.records[page.bounds(total)].to_vec();
        Ok(Page::new(items, total, page))
    }

    fn load_all(&self) -> Result<Vec<SalesRecordModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.store.read().records.clone())
    }
}
