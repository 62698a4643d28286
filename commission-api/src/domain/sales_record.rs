use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculations::calculate_commission;
use super::commission_rates::{resolve_rate, CommissionRates};
use super::common_enums::SaleStatus;

/// A single sale attributed to an employee.
///
/// Records are never edited once added to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub designation: String,
    pub product_name: String,
    pub sale_amount: Decimal,
    /// Percent of the sales target reached.
    pub target_completion: Decimal,
    pub status: SaleStatus,
    /// Overrides the tiered lookup when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_commission_rate: Option<Decimal>,
}

impl SalesRecord {
    /// Rate shown for this record: the custom rate if set, else the tier lookup.
    pub fn effective_rate(&self, rates: &CommissionRates) -> Decimal {
        self.custom_commission_rate
            .unwrap_or_else(|| resolve_rate(self.target_completion, rates))
    }

    /// Commission honoring the record's custom rate.
    pub fn effective_commission(&self, rates: &CommissionRates) -> Decimal {
        calculate_commission(
            self.sale_amount,
            self.target_completion,
            rates,
            self.custom_commission_rate,
        )
    }

    /// Commission from the shared table alone, as the aggregate figures use it.
    pub fn table_commission(&self, rates: &CommissionRates) -> Decimal {
        calculate_commission(self.sale_amount, self.target_completion, rates, None)
    }
}

/// A record together with the figures displayed on its table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecordRow {
    pub record: SalesRecord,
    pub rate: Decimal,
    pub commission: Decimal,
}

impl SalesRecordRow {
    pub fn new(record: SalesRecord, rates: &CommissionRates) -> Self {
        let rate = record.effective_rate(rates);
        let commission = record.effective_commission(rates);
        Self {
            record,
            rate,
            commission,
        }
    }
}
