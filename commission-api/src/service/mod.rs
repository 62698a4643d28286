pub mod requests;
pub mod commission_service;

pub use requests::*;
pub use commission_service::*;
