#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use commission_api::domain::SaleStatus;
    use commission_db::models::sales::sales_record::SalesRecordModel;
    use heapless::String as HeaplessString;
    use parking_lot::RwLock;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use uuid::Uuid;

    use super::super::repo_impl::{SalesRecordRepositoryImpl, SalesRecordStore};

    pub fn create_test_repository() -> SalesRecordRepositoryImpl {
        SalesRecordRepositoryImpl::new(Arc::new(RwLock::new(SalesRecordStore::default())))
    }

    pub fn create_test_sales_record(employee_id: &str, product_name: &str) -> SalesRecordModel {
        SalesRecordModel {
            id: Uuid::new_v4(),
            employee_id: HeaplessString::from_str(employee_id).unwrap(),
            employee_name: HeaplessString::from_str("Test Employee").unwrap(),
            designation: HeaplessString::from_str("Sales Executive").unwrap(),
            product_name: HeaplessString::from_str(product_name).unwrap(),
            sale_amount: Decimal::new(1_250_000, 2), // 12500.00
            target_completion: Decimal::new(100, 0),
            status: SaleStatus::Sold,
            custom_commission_rate: None,
            recorded_at: Utc::now(),
        }
    }
}
