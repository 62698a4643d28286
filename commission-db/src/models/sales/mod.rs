pub mod sales_record;
pub mod commission_rate_tier;

pub use sales_record::*;
pub use commission_rate_tier::*;
