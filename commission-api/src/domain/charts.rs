use rust_decimal::Decimal;
use serde::Serialize;

use super::calculations::saturating_sum;
use super::commission_rates::CommissionRates;
use super::sales_record::SalesRecord;

/// Completion bands of the target distribution chart as `(label, lower, upper)`.
/// Upper bounds are exclusive; records under 80 percent fall in no band.
const TARGET_BANDS: [(&str, i32, Option<i32>); 4] = [
    ("80%", 80, Some(90)),
    ("90%", 90, Some(100)),
    ("100%", 100, Some(110)),
    ("110%+", 110, None),
];

/// Bars on the "Top Earners" chart.
pub const TOP_EARNERS_SHOWN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetBand {
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeCommission {
    pub name: String,
    pub commission: Decimal,
}

/// Data series behind the dashboard charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionCharts {
    pub target_distribution: Vec<TargetBand>,
    pub employee_commissions: Vec<EmployeeCommission>,
}

impl CommissionCharts {
    pub fn compute(records: &[SalesRecord], rates: &CommissionRates) -> Self {
        Self {
            target_distribution: target_distribution(records),
            employee_commissions: employee_commissions(records, rates),
        }
    }

    /// The first `n` employees of [`CommissionCharts::employee_commissions`].
    ///
    /// Entries keep first-seen order; they are not ranked by commission.
    pub fn top_earners(&self, n: usize) -> &[EmployeeCommission] {
        let end = n.min(self.employee_commissions.len());
        &self.employee_commissions[..end]
    }
}

pub fn target_distribution(records: &[SalesRecord]) -> Vec<TargetBand> {
    TARGET_BANDS
        .iter()
        .map(|(name, lower, upper)| {
            let lower = Decimal::from(*lower);
            let upper = upper.map(Decimal::from);
            let count = records
                .iter()
                .filter(|record| {
                    record.target_completion >= lower
                        && upper.map_or(true, |upper| record.target_completion < upper)
                })
                .count();
            TargetBand { name: *name, count }
        })
        .collect()
}

/// Table commission summed per employee name, in the order names first appear.
pub fn employee_commissions(
    records: &[SalesRecord],
    rates: &CommissionRates,
) -> Vec<EmployeeCommission> {
    let mut totals: Vec<EmployeeCommission> = Vec::new();
    for record in records {
        let commission = record.table_commission(rates);
        match totals.iter_mut().find(|entry| entry.name == record.employee_name) {
            Some(entry) => entry.commission = saturating_sum([entry.commission, commission]),
            None => totals.push(EmployeeCommission {
                name: record.employee_name.clone(),
                commission,
            }),
        }
    }
    totals
}
