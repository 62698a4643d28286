use commission_db::models::sales::commission_rate_tier::CommissionRateTierModel;
use commission_db::repository::rate_table::RateTableRepository;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::error::Error;
use std::sync::Arc;

pub struct RateTableRepositoryImpl {
    pub tiers: Arc<RwLock<Vec<CommissionRateTierModel>>>,
}

impl RateTableRepositoryImpl {
    pub fn new(tiers: Arc<RwLock<Vec<CommissionRateTierModel>>>) -> Self {
        Self { tiers }
    }
}

impl RateTableRepository for RateTableRepositoryImpl {
    fn load_tiers(&self) -> Result<Vec<CommissionRateTierModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.tiers.read().clone())
    }

    fn replace_tiers(
        &self,
        mut tiers: Vec<CommissionRateTierModel>,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut seen = HashSet::with_capacity(tiers.len());
        for tier in &tiers {
            if !seen.insert(tier.threshold) {
                return Err(format!("Duplicate commission threshold {}", tier.threshold).into());
            }
        }
        tiers.sort_by_key(|tier| tier.threshold);

        let count = tiers.len();
        *self.tiers.write() = tiers;
        tracing::debug!(tiers = count, "replaced commission rate tiers");
        Ok(count)
    }
}
