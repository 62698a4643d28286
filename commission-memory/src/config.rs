use commission_api::domain::CommissionRates;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid commission rates: {0}")]
    InvalidRates(#[from] serde_json::Error),

    #[error("Inconsistent seed configuration: {0}")]
    Inconsistent(String),
}

pub const EMPLOYEE_COUNT_VAR: &str = "COMMISSION_EMPLOYEE_COUNT";
pub const RNG_SEED_VAR: &str = "COMMISSION_RNG_SEED";
pub const SOLD_PROBABILITY_VAR: &str = "COMMISSION_SOLD_PROBABILITY";
pub const RATES_VAR: &str = "COMMISSION_RATES";

/// How a session's synthetic data is generated, and the rate table it starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub employee_count: usize,
    pub min_sales_per_employee: usize,
    pub max_sales_per_employee: usize,
    /// Whole currency units
    pub min_sale_amount: i64,
    pub max_sale_amount: i64,
    /// Whole percent
    pub min_target_completion: i64,
    pub max_target_completion: i64,
    pub sold_probability: f64,
    /// Fixed seed for reproducible sessions; random when absent
    pub rng_seed: Option<u64>,
    pub rates: CommissionRates,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            employee_count: 8,
            min_sales_per_employee: 3,
            max_sales_per_employee: 5,
            min_sale_amount: 5_000,
            max_sale_amount: 50_000,
            min_target_completion: 75,
            max_target_completion: 125,
            sold_probability: 0.8,
            rng_seed: None,
            rates: CommissionRates::standard(),
        }
    }
}

impl SeedConfig {
    /// Defaults overridden by `COMMISSION_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SeedConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(EMPLOYEE_COUNT_VAR) {
            config.employee_count = parse_var(EMPLOYEE_COUNT_VAR, &value)?;
        }
        if let Some(value) = lookup(RNG_SEED_VAR) {
            config.rng_seed = Some(parse_var(RNG_SEED_VAR, &value)?);
        }
        if let Some(value) = lookup(SOLD_PROBABILITY_VAR) {
            config.sold_probability = parse_var(SOLD_PROBABILITY_VAR, &value)?;
        }
        if let Some(value) = lookup(RATES_VAR) {
            config.rates = CommissionRates::from_json_str(&value)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_sales_per_employee > self.max_sales_per_employee {
            return Err(ConfigError::Inconsistent(format!(
                "sales per employee range {}..={} is empty",
                self.min_sales_per_employee, self.max_sales_per_employee
            )));
        }
        if self.min_sale_amount > self.max_sale_amount {
            return Err(ConfigError::Inconsistent(format!(
                "sale amount range {}..={} is empty",
                self.min_sale_amount, self.max_sale_amount
            )));
        }
        if self.min_sale_amount < 0 {
            return Err(ConfigError::Inconsistent("sale amounts must not be negative".to_string()));
        }
        if self.min_target_completion > self.max_target_completion {
            return Err(ConfigError::Inconsistent(format!(
                "target completion range {}..={} is empty",
                self.min_target_completion, self.max_target_completion
            )));
        }
        if !(0.0..=1.0).contains(&self.sold_probability) {
            return Err(ConfigError::Inconsistent(format!(
                "sold probability {} is outside [0, 1]",
                self.sold_probability
            )));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
