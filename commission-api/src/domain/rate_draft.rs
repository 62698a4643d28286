use rust_decimal::Decimal;
use validator::Validate;

use super::commission_rates::CommissionRates;
use crate::error::ApiResult;
use crate::service::requests::RateTierRequest;

/// Working copy of a rate table being edited.
///
/// Changes stay local to the draft until it is turned back into a table with
/// [`CommissionRateDraft::into_rates`] and saved; dropping the draft discards
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommissionRateDraft {
    rates: CommissionRates,
}

impl CommissionRateDraft {
    pub fn from_rates(rates: &CommissionRates) -> Self {
        Self {
            rates: rates.clone(),
        }
    }

    /// Changes the rate of a listed tier. Unparseable editor input is expected
    /// to arrive here already coerced to zero.
    pub fn set_rate(&mut self, threshold: i32, rate: Decimal) {
        self.rates.set(threshold, rate);
    }

    /// Adds a tier, overwriting the rate if the threshold already exists.
    pub fn add_tier(&mut self, request: &RateTierRequest) -> ApiResult<()> {
        request.validate()?;
        self.rates.set(request.threshold, request.rate);
        Ok(())
    }

    pub fn remove_tier(&mut self, threshold: i32) -> Option<Decimal> {
        self.rates.remove(threshold)
    }

    pub fn tiers_ascending(&self) -> Vec<(i32, Decimal)> {
        self.rates.iter_ascending().collect()
    }

    pub fn rates(&self) -> &CommissionRates {
        &self.rates
    }

    pub fn into_rates(self) -> CommissionRates {
        self.rates
    }
}
