use commission_db::models::sales::commission_rate_tier::CommissionRateTierModel;
use parking_lot::RwLock as ParkingRwLock;
use std::sync::Arc;

use super::sales_record_repository::repo_impl::SalesRecordStore;
use super::{RateTableRepositoryImpl, SalesRecordRepositoryImpl};

/// Factory for the sales module repositories
///
/// The factory owns the backing stores; every repository it builds shares them,
/// so repositories built from the same factory see each other's writes.
pub struct SalesRepoFactory {
    sales_record_store: Arc<ParkingRwLock<SalesRecordStore>>,
    rate_tiers: Arc<ParkingRwLock<Vec<CommissionRateTierModel>>>,
}

impl SalesRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sales_record_store: Arc::new(ParkingRwLock::new(SalesRecordStore::default())),
            rate_tiers: Arc::new(ParkingRwLock::new(Vec::new())),
        })
    }

    pub fn build_sales_record_repo(&self) -> Arc<SalesRecordRepositoryImpl> {
        Arc::new(SalesRecordRepositoryImpl::new(self.sales_record_store.clone()))
    }

    pub fn build_rate_table_repo(&self) -> Arc<RateTableRepositoryImpl> {
        Arc::new(RateTableRepositoryImpl::new(self.rate_tiers.clone()))
    }

    pub fn build_all_repos(&self) -> SalesRepositories {
        SalesRepositories {
            sales_record_repository: self.build_sales_record_repo(),
            rate_table_repository: self.build_rate_table_repo(),
        }
    }
}

/// Container for all sales module repositories
#[derive(Clone)]
pub struct SalesRepositories {
    pub sales_record_repository: Arc<SalesRecordRepositoryImpl>,
    pub rate_table_repository: Arc<RateTableRepositoryImpl>,
}
