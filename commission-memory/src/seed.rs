use commission_api::domain::{SaleStatus, SalesRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::config::SeedConfig;

const FIRST_NAMES: [&str; 8] = [
    "John", "Sarah", "Michael", "Emily", "David", "Jessica", "Robert", "Amanda",
];
const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
];
const PRODUCTS: [&str; 6] = [
    "Premium Package",
    "Standard Plan",
    "Enterprise Suite",
    "Starter Bundle",
    "Professional Tier",
    "Elite Package",
];
const DESIGNATIONS: [&str; 4] = [
    "Sales Executive",
    "Account Manager",
    "Sales Representative",
    "Senior Sales Manager",
];

const ID_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const GENERATED_ID_LENGTH: usize = 9;

/// RNG for a session: reproducible when the config carries a seed.
pub fn session_rng(config: &SeedConfig) -> StdRng {
    match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn pick<R: Rng>(rng: &mut R, values: &[&'static str]) -> &'static str {
    values[rng.gen_range(0..values.len())]
}

/// Synthetic records: `employee_count` employees with sequential ids
/// (`EMP0001`, ...), each with a random number of sales in the configured range.
pub fn generate_sales_records<R: Rng>(config: &SeedConfig, rng: &mut R) -> Vec<SalesRecord> {
    let mut records = Vec::new();

    for i in 0..config.employee_count {
        let employee_name = format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES));
        let employee_id = format!("EMP{:04}", i + 1);

        let sales_count =
            rng.gen_range(config.min_sales_per_employee..=config.max_sales_per_employee);
        for _ in 0..sales_count {
            let status = if rng.gen_bool(config.sold_probability) {
                SaleStatus::Sold
            } else {
                SaleStatus::NotSold
            };
            records.push(SalesRecord {
                employee_id: employee_id.clone(),
                employee_name: employee_name.clone(),
                designation: pick(rng, &DESIGNATIONS).to_string(),
                product_name: pick(rng, &PRODUCTS).to_string(),
                sale_amount: Decimal::from(
                    rng.gen_range(config.min_sale_amount..=config.max_sale_amount),
                ),
                target_completion: Decimal::from(
                    rng.gen_range(config.min_target_completion..=config.max_target_completion),
                ),
                status,
                custom_commission_rate: None,
            });
        }
    }

    records
}

/// Id for a hand-entered record: `EMP` followed by nine base-36 characters.
pub fn generate_employee_id<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..GENERATED_ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("EMP{suffix}")
}
