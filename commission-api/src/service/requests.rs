use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::calculator::CalculatorInput;
use crate::domain::common_enums::SaleStatus;

/// Designation assigned to records entered by hand.
pub const DEFAULT_DESIGNATION: &str = "Sales Representative";

/// Largest sale amount a record may carry: 10^15.
pub const MAX_SALE_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);
/// Largest rate, in percent, a record or tier may carry.
pub const MAX_COMMISSION_RATE: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Input of the "add sales record" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddSalesRecordRequest {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub employee_name: String,
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub product_name: String,
    #[validate(custom(function = "validate_sale_amount"))]
    pub sale_amount: Decimal,
    #[serde(default = "default_target_completion")]
    pub target_completion: Decimal,
    #[serde(default)]
    pub status: SaleStatus,
    #[serde(default)]
    #[validate(custom(function = "validate_commission_rate"))]
    pub custom_commission_rate: Option<Decimal>,
}

impl AddSalesRecordRequest {
    pub fn new(
        employee_name: impl Into<String>,
        product_name: impl Into<String>,
        sale_amount: Decimal,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            product_name: product_name.into(),
            sale_amount,
            target_completion: default_target_completion(),
            status: SaleStatus::default(),
            custom_commission_rate: None,
        }
    }
}

/// Live preview shown while the form is being filled in.
impl From<&AddSalesRecordRequest> for CalculatorInput {
    fn from(request: &AddSalesRecordRequest) -> Self {
        CalculatorInput {
            sale_amount: request.sale_amount,
            target_completion: request.target_completion,
            custom_commission_rate: request.custom_commission_rate,
        }
    }
}

fn default_target_completion() -> Decimal {
    Decimal::ONE_HUNDRED
}

/// A tier entered in the rate editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RateTierRequest {
    #[validate(range(min = 1))]
    pub threshold: i32,
    #[validate(custom(function = "validate_commission_rate"))]
    pub rate: Decimal,
}

pub fn validate_sale_amount(value: &Decimal) -> Result<(), ValidationError> {
    validate_bounded(value, MAX_SALE_AMOUNT)
}

pub fn validate_commission_rate(value: &Decimal) -> Result<(), ValidationError> {
    validate_bounded(value, MAX_COMMISSION_RATE)
}

fn validate_bounded(value: &Decimal, max: Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("negative_value"));
    }
    if *value > max {
        return Err(ValidationError::new("value_too_large"));
    }
    Ok(())
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_request() {
        let request =
            AddSalesRecordRequest::new("Michael Williams", "Professional Tier", dec!(18500));
        assert!(request.validate().is_ok());
        assert_eq!(request.target_completion, dec!(100));
        assert_eq!(request.status, SaleStatus::Sold);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let request = AddSalesRecordRequest::new("", "Professional Tier", dec!(18500));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("employee_name"));

        let request = AddSalesRecordRequest::new("Michael Williams", "   ", dec!(18500));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("product_name"));
    }

    #[test]
    fn test_negative_amounts_and_rates_are_rejected() {
        let request = AddSalesRecordRequest::new("Michael Williams", "Professional Tier", dec!(-1));
        assert!(request.validate().is_err());

        let mut request =
            AddSalesRecordRequest::new("Michael Williams", "Professional Tier", dec!(1));
        request.custom_commission_rate = Some(dec!(-0.5));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("custom_commission_rate"));

        request.custom_commission_rate = Some(Decimal::ZERO);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_oversized_amounts_and_rates_are_rejected() {
        assert_eq!(MAX_SALE_AMOUNT, dec!(1000000000000000));

        let request = AddSalesRecordRequest::new("Big Spender", "Elite Package", Decimal::MAX);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("sale_amount"));

        let request = AddSalesRecordRequest::new("Big Spender", "Elite Package", MAX_SALE_AMOUNT);
        assert!(request.validate().is_ok());

        let mut request = AddSalesRecordRequest::new("Big Spender", "Elite Package", dec!(100));
        request.custom_commission_rate = Some(dec!(1000.01));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("custom_commission_rate"));

        assert!(RateTierRequest { threshold: 150, rate: Decimal::MAX }.validate().is_err());
        assert!(RateTierRequest { threshold: 150, rate: MAX_COMMISSION_RATE }.validate().is_ok());
    }

    #[test]
    fn test_multibyte_names_within_character_limit() {
        let request = AddSalesRecordRequest::new("株".repeat(100), "製品".repeat(50), dec!(100));
        assert!(request.validate().is_ok());

        let request = AddSalesRecordRequest::new("株".repeat(101), "Elite Package", dec!(100));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_preview_input_from_request() {
        let mut request = AddSalesRecordRequest::new("Emily Brown", "Elite Package", dec!(2500));
        request.target_completion = dec!(92);
        request.custom_commission_rate = Some(dec!(4.5));

        let input = CalculatorInput::from(&request);
        assert_eq!(input.sale_amount, dec!(2500));
        assert_eq!(input.target_completion, dec!(92));
        assert_eq!(input.custom_commission_rate, Some(dec!(4.5)));
    }

    #[test]
    fn test_request_deserializes_with_form_defaults() {
        let request: AddSalesRecordRequest = serde_json::from_str(
            r#"{"employeeName":"Emily Brown","productName":"Elite Package","saleAmount":"2500"}"#,
        )
        .unwrap();
        assert_eq!(request.target_completion, dec!(100));
        assert_eq!(request.status, SaleStatus::Sold);
        assert_eq!(request.custom_commission_rate, None);
    }

    #[test]
    fn test_rate_tier_request_bounds() {
        assert!(RateTierRequest { threshold: 130, rate: dec!(6) }.validate().is_ok());
        assert!(RateTierRequest { threshold: 0, rate: dec!(6) }.validate().is_err());
        assert!(RateTierRequest { threshold: 130, rate: dec!(-6) }.validate().is_err());
    }
}
