use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tiered commission table: target-completion threshold (percent) to
/// commission rate (percent).
///
/// Thresholds are unique. Nothing forces rates to be non-negative or to grow
/// with the threshold; tiers are edited independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommissionRates {
    tiers: BTreeMap<i32, Decimal>,
}

impl CommissionRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table the dashboard starts with: 80/90/100/110/120 percent
    /// completion earning 1 to 5 percent.
    pub fn standard() -> Self {
        [(80, 1), (90, 2), (100, 3), (110, 4), (120, 5)]
            .into_iter()
            .map(|(threshold, rate)| (threshold, Decimal::from(rate)))
            .collect()
    }

    /// Parses a JSON object such as `{"80": 1, "90": 2.5}`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Inserts or overwrites a tier, returning the previous rate.
    pub fn set(&mut self, threshold: i32, rate: Decimal) -> Option<Decimal> {
        self.tiers.insert(threshold, rate)
    }

    pub fn remove(&mut self, threshold: i32) -> Option<Decimal> {
        self.tiers.remove(&threshold)
    }

    pub fn get(&self, threshold: i32) -> Option<Decimal> {
        self.tiers.get(&threshold).copied()
    }

    pub fn contains(&self, threshold: i32) -> bool {
        self.tiers.contains_key(&threshold)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn max_threshold(&self) -> Option<i32> {
        self.tiers.keys().next_back().copied()
    }

    pub fn min_threshold(&self) -> Option<i32> {
        self.tiers.keys().next().copied()
    }

    /// Tiers from the lowest threshold to the highest, as an editor lists them.
    pub fn iter_ascending(&self) -> impl Iterator<Item = (i32, Decimal)> + '_ {
        self.tiers.iter().map(|(threshold, rate)| (*threshold, *rate))
    }

    /// Tiers from the highest threshold to the lowest, the order rate
    /// resolution evaluates them in.
    pub fn iter_descending(&self) -> impl Iterator<Item = (i32, Decimal)> + '_ {
        self.tiers.iter().rev().map(|(threshold, rate)| (*threshold, *rate))
    }
}

impl FromIterator<(i32, Decimal)> for CommissionRates {
    fn from_iter<I: IntoIterator<Item = (i32, Decimal)>>(iter: I) -> Self {
        Self {
            tiers: iter.into_iter().collect(),
        }
    }
}

/// Returns the rate of the highest threshold not exceeding
/// `target_completion`, or zero when no threshold qualifies.
pub fn resolve_rate(target_completion: Decimal, rates: &CommissionRates) -> Decimal {
    rates
        .iter_descending()
        .find(|(threshold, _)| target_completion >= Decimal::from(*threshold))
        .map(|(_, rate)| rate)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_resolve_rate_standard_table() {
        let rates = CommissionRates::standard();

        assert_eq!(resolve_rate(dec!(95), &rates), dec!(2));
        assert_eq!(resolve_rate(dec!(79), &rates), Decimal::ZERO);
        assert_eq!(resolve_rate(dec!(120), &rates), dec!(5));
        assert_eq!(resolve_rate(dec!(80), &rates), dec!(1));
        assert_eq!(resolve_rate(dec!(99.99), &rates), dec!(2));
        assert_eq!(resolve_rate(dec!(500), &rates), dec!(5));
    }

    #[test]
    fn test_resolve_rate_empty_table() {
        let rates = CommissionRates::new();
        assert_eq!(resolve_rate(dec!(100), &rates), Decimal::ZERO);
    }

    #[test]
    fn test_resolve_rate_negative_input() {
        let rates = CommissionRates::standard();
        assert_eq!(resolve_rate(dec!(-10), &rates), Decimal::ZERO);
    }

    #[test]
    fn test_resolve_rate_does_not_assume_monotonic_rates() {
        let rates: CommissionRates = [(50, dec!(9)), (100, dec!(0.5))].into_iter().collect();

        assert_eq!(resolve_rate(dec!(75), &rates), dec!(9));
        assert_eq!(resolve_rate(dec!(100), &rates), dec!(0.5));
    }

    #[test]
    fn test_resolve_rate_reflects_latest_edits() {
        let mut rates = CommissionRates::standard();

        rates.remove(90);
        assert_eq!(resolve_rate(dec!(95), &rates), dec!(1));

        rates.set(95, dec!(2.5));
        assert_eq!(resolve_rate(dec!(95), &rates), dec!(2.5));

        rates.set(120, dec!(7));
        assert_eq!(resolve_rate(dec!(130), &rates), dec!(7));

        rates.remove(80);
        rates.remove(95);
        assert_eq!(resolve_rate(dec!(96), &rates), Decimal::ZERO);
    }

    #[test]
    fn test_rates_from_json_object() {
        let rates = CommissionRates::from_json_str(r#"{"100": 3, "80": 1.5}"#).unwrap();

        assert_eq!(rates.len(), 2);
        assert_eq!(rates.get(80), Some(dec!(1.5)));
        assert_eq!(rates.min_threshold(), Some(80));
        assert_eq!(rates.max_threshold(), Some(100));
    }

    #[test]
    fn test_iteration_orders() {
        let rates = CommissionRates::standard();
        let ascending: Vec<i32> = rates.iter_ascending().map(|(t, _)| t).collect();
        let descending: Vec<i32> = rates.iter_descending().map(|(t, _)| t).collect();

        assert_eq!(ascending, vec![80, 90, 100, 110, 120]);
        assert_eq!(descending, vec![120, 110, 100, 90, 80]);
    }

    fn rate_table() -> impl Strategy<Value = CommissionRates> {
        proptest::collection::btree_map(-50..300i32, 0..10_000i64, 1..8).prop_map(|tiers| {
            tiers
                .into_iter()
                .map(|(threshold, rate)| (threshold, Decimal::new(rate, 2)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_below_every_threshold_resolves_to_zero(rates in rate_table(), gap in 1..1_000i64) {
            let lowest = rates.min_threshold().unwrap();
            let value = Decimal::from(lowest) - Decimal::new(gap, 1);
            prop_assert_eq!(resolve_rate(value, &rates), Decimal::ZERO);
        }

        #[test]
        fn prop_at_or_above_max_resolves_to_top_tier(rates in rate_table(), excess in 0..1_000i64) {
            let highest = rates.max_threshold().unwrap();
            let value = Decimal::from(highest) + Decimal::new(excess, 1);
            prop_assert_eq!(resolve_rate(value, &rates), rates.get(highest).unwrap());
        }

        #[test]
        fn prop_removed_threshold_is_never_selected(
            rates in rate_table(),
            pick in 0..8usize,
            probe in -100..400i32,
        ) {
            let mut rates = rates;
            let thresholds: Vec<i32> = rates.iter_ascending().map(|(t, _)| t).collect();
            let removed = thresholds[pick % thresholds.len()];
            rates.remove(removed);
            let expected = rates
                .iter_descending()
                .find(|(t, _)| *t <= probe)
                .map(|(_, r)| r)
                .unwrap_or(Decimal::ZERO);
            prop_assert_eq!(resolve_rate(Decimal::from(probe), &rates), expected);
            prop_assert!(!rates.contains(removed));
        }
    }
}
