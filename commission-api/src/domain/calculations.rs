use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::commission_rates::{resolve_rate, CommissionRates};
use super::sales_record::SalesRecord;

/// Commission on a sale, rounded to cents.
///
/// A `custom_rate` replaces the table lookup entirely. Negative amounts are
/// passed through and yield a negative commission. Products beyond the
/// `Decimal` range saturate at `Decimal::MAX` or `Decimal::MIN`.
pub fn calculate_commission(
    sale_amount: Decimal,
    target_completion: Decimal,
    rates: &CommissionRates,
    custom_rate: Option<Decimal>,
) -> Decimal {
    let rate = custom_rate.unwrap_or_else(|| resolve_rate(target_completion, rates));
    round_to_cents(sale_amount.saturating_mul(rate) / Decimal::ONE_HUNDRED)
}

/// Saturating sum, so one outsized figure cannot poison an aggregate.
pub(crate) fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |total, value| total.saturating_add(value))
}

pub(crate) fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of all sale amounts. Unsold records are included.
pub fn total_sales(records: &[SalesRecord]) -> Decimal {
    saturating_sum(records.iter().map(|record| record.sale_amount))
}

/// Sum of sale amounts for records with status `Sold` only.
pub fn total_sold_sales(records: &[SalesRecord]) -> Decimal {
    saturating_sum(
        records
            .iter()
            .filter(|record| record.status.is_sold())
            .map(|record| record.sale_amount),
    )
}

/// Sum of per-record commissions computed from the shared table.
///
/// Per-record custom rates are not applied here; see
/// [`total_effective_commission`] for the override-aware figure.
pub fn total_commission(records: &[SalesRecord], rates: &CommissionRates) -> Decimal {
    saturating_sum(records.iter().map(|record| record.table_commission(rates)))
}

/// Sum of per-record commissions honoring each record's custom rate.
pub fn total_effective_commission(records: &[SalesRecord], rates: &CommissionRates) -> Decimal {
    saturating_sum(records.iter().map(|record| record.effective_commission(rates)))
}

/// [`total_commission`] divided by the record count; zero for no records.
pub fn average_commission(records: &[SalesRecord], rates: &CommissionRates) -> Decimal {
    if records.is_empty() {
        return Decimal::ZERO;
    }
    total_commission(records, rates) / Decimal::from(records.len())
}

/// Figures behind the dashboard summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub record_count: usize,
    pub total_sales: Decimal,
    pub total_commission: Decimal,
    pub average_commission: Decimal,
    pub total_sold_sales: Decimal,
    pub total_effective_commission: Decimal,
}

impl SalesSummary {
    pub fn compute(records: &[SalesRecord], rates: &CommissionRates) -> Self {
        Self {
            record_count: records.len(),
            total_sales: total_sales(records),
            total_commission: total_commission(records, rates),
            average_commission: average_commission(records, rates),
            total_sold_sales: total_sold_sales(records),
            total_effective_commission: total_effective_commission(records, rates),
        }
    }
}
