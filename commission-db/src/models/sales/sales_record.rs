use chrono::{DateTime, Utc};
use commission_api::domain::{SaleStatus, SalesRecord};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::{Identifiable, Index, IndexAware};
use crate::utils::hash_as_i64;

/// Stored form of a sales record.
///
/// Text fields are bounded in bytes, with room for four bytes per character
/// of the request limits. A record whose fields do not fit is rejected on
/// conversion rather than truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecordModel {
    pub id: Uuid,
    pub employee_id: HeaplessString<20>,
    pub employee_name: HeaplessString<400>,
    pub designation: HeaplessString<200>,
    pub product_name: HeaplessString<400>,
    pub sale_amount: Decimal,
    pub target_completion: Decimal,
    pub status: SaleStatus,
    pub custom_commission_rate: Option<Decimal>,
    /// Time the record was added to the session
    pub recorded_at: DateTime<Utc>,
}

impl SalesRecordModel {
    pub fn from_record(record: &SalesRecord, recorded_at: DateTime<Utc>) -> Result<Self, String> {
        Ok(Self {
            id: Uuid::new_v4(),
            employee_id: bounded(&record.employee_id, "employee_id")?,
            employee_name: bounded(&record.employee_name, "employee_name")?,
            designation: bounded(&record.designation, "designation")?,
            product_name: bounded(&record.product_name, "product_name")?,
            sale_amount: record.sale_amount,
            target_completion: record.target_completion,
            status: record.status,
            custom_commission_rate: record.custom_commission_rate,
            recorded_at,
        })
    }

    pub fn to_record(&self) -> SalesRecord {
        SalesRecord {
            employee_id: self.employee_id.to_string(),
            employee_name: self.employee_name.to_string(),
            designation: self.designation.to_string(),
            product_name: self.product_name.to_string(),
            sale_amount: self.sale_amount,
            target_completion: self.target_completion,
            status: self.status,
            custom_commission_rate: self.custom_commission_rate,
        }
    }
}

fn bounded<const N: usize>(value: &str, field: &str) -> Result<HeaplessString<N>, String> {
    HeaplessString::from_str(value)
        .map_err(|_| format!("Value for field '{field}' is too long (max {N} bytes)"))
}

impl Identifiable for SalesRecordModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Index model for SalesRecord, used to look records up by employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecordIdxModel {
    pub id: Uuid,
    pub employee_id_hash: i64,
}

impl Identifiable for SalesRecordIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for SalesRecordIdxModel {}

impl IndexAware for SalesRecordModel {
    type IndexType = SalesRecordIdxModel;

    fn to_index(&self) -> Self::IndexType {
        SalesRecordIdxModel {
            id: self.id,
            employee_id_hash: employee_id_hash(self.employee_id.as_str()),
        }
    }
}

/// Hash used to index records by employee id.
pub fn employee_id_hash(employee_id: &str) -> i64 {
    // Serializing a &str to CBOR cannot fail.
    hash_as_i64(employee_id).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_record() -> SalesRecord {
        SalesRecord {
            employee_id: "EMP0004".to_string(),
            employee_name: "Jessica Garcia".to_string(),
            designation: "Account Manager".to_string(),
            product_name: "Starter Bundle".to_string(),
            sale_amount: dec!(7300),
            target_completion: dec!(97),
            status: SaleStatus::NotSold,
            custom_commission_rate: Some(dec!(1.75)),
        }
    }

    #[test]
    fn test_model_round_trips_to_domain_record() {
        let record = sample_record();
        let model = SalesRecordModel::from_record(&record, Utc::now()).unwrap();
        assert_eq!(model.to_record(), record);
    }

    #[test]
    fn test_oversized_field_is_rejected() {
        let mut record = sample_record();
        record.employee_id = "E".repeat(21);
        let err = SalesRecordModel::from_record(&record, Utc::now()).unwrap_err();
        assert!(err.contains("employee_id"));
        assert!(err.contains("max 20 bytes"));
    }

    #[test]
    fn test_multibyte_names_fit() {
        let mut record = sample_record();
        record.employee_name = "株".repeat(100);
        record.product_name = "🚀".repeat(100);
        let model = SalesRecordModel::from_record(&record, Utc::now()).unwrap();
        assert_eq!(model.to_record(), record);

        record.product_name.push('🚀');
        let err = SalesRecordModel::from_record(&record, Utc::now()).unwrap_err();
        assert!(err.contains("product_name"));
    }

    #[test]
    fn test_index_hashes_employee_id() {
        let model = SalesRecordModel::from_record(&sample_record(), Utc::now()).unwrap();
        let idx = model.to_index();
        assert_eq!(idx.id, model.id);
        assert_eq!(idx.employee_id_hash, employee_id_hash("EMP0004"));
    }
}
