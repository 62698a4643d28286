use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculations::{calculate_commission, round_to_cents};
use super::commission_rates::{resolve_rate, CommissionRates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInput {
    pub sale_amount: Decimal,
    pub target_completion: Decimal,
    /// Replaces the table lookup, as on the add-record form.
    #[serde(default)]
    pub custom_commission_rate: Option<Decimal>,
}

impl CalculatorInput {
    pub fn new(sale_amount: Decimal, target_completion: Decimal) -> Self {
        Self {
            sale_amount,
            target_completion,
            custom_commission_rate: None,
        }
    }

    pub fn with_custom_rate(mut self, rate: Decimal) -> Self {
        self.custom_commission_rate = Some(rate);
        self
    }
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self::new(Decimal::from(1000), Decimal::ONE_HUNDRED)
    }
}

/// What-if commission for a hypothetical sale against the current table,
/// or against the input's custom rate when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionPreview {
    pub sale_amount: Decimal,
    pub rate: Decimal,
    pub commission: Decimal,
    /// Commission as a percent of the sale; `None` unless the amount is positive.
    pub percent_of_sale: Option<Decimal>,
}

impl CommissionPreview {
    pub fn compute(input: CalculatorInput, rates: &CommissionRates) -> Self {
        let rate = input
            .custom_commission_rate
            .unwrap_or_else(|| resolve_rate(input.target_completion, rates));
        let commission = calculate_commission(
            input.sale_amount,
            input.target_completion,
            rates,
            input.custom_commission_rate,
        );
        let percent_of_sale = (input.sale_amount > Decimal::ZERO).then(|| {
            round_to_cents((commission / input.sale_amount).saturating_mul(Decimal::ONE_HUNDRED))
        });
        Self {
            sale_amount: input.sale_amount,
            rate,
            commission,
            percent_of_sale,
        }
    }
}
