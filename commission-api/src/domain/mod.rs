pub mod common_enums;
pub mod commission_rates;
pub mod sales_record;
pub mod calculations;
pub mod calculator;
pub mod charts;
pub mod rate_draft;
pub mod sales_query;

pub use common_enums::*;
pub use commission_rates::*;
pub use sales_record::*;
pub use calculations::*;
pub use calculator::*;
pub use charts::*;
pub use rate_draft::*;
pub use sales_query::*;
