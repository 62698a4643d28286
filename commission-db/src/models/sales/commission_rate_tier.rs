use commission_api::domain::CommissionRates;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the stored rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRateTierModel {
    pub threshold: i32,
    pub rate: Decimal,
}

/// Flattens a rate table into rows ordered by ascending threshold.
pub fn tiers_from_rates(rates: &CommissionRates) -> Vec<CommissionRateTierModel> {
    rates
        .iter_ascending()
        .map(|(threshold, rate)| CommissionRateTierModel { threshold, rate })
        .collect()
}

/// Rebuilds a rate table from rows; a later row wins on a duplicate threshold.
pub fn rates_from_tiers(tiers: &[CommissionRateTierModel]) -> CommissionRates {
    tiers.iter().map(|tier| (tier.threshold, tier.rate)).collect()
}
