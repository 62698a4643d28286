use crate::models::sales::commission_rate_tier::CommissionRateTierModel;

/// Repository for the live commission rate table
///
/// The table is replaced as a whole. Readers always see either the previous
/// or the new set of tiers, never a mix.
pub trait RateTableRepository: Send + Sync {
    /// Load all tiers ordered by ascending threshold
    fn load_tiers(
        &self,
    ) -> Result<Vec<CommissionRateTierModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Replace all tiers
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of tiers now stored
    /// * `Err` - An error if the tiers were rejected; the previous table stays in place
    fn replace_tiers(
        &self,
        tiers: Vec<CommissionRateTierModel>,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
