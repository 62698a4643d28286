use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Outcome of a sales opportunity.
///
/// Serialized as `"Sold"` / `"Not Sold"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SaleStatus {
    #[default]
    Sold,
    NotSold,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Sold => "Sold",
            SaleStatus::NotSold => "Not Sold",
        }
    }

    pub fn is_sold(&self) -> bool {
        matches!(self, SaleStatus::Sold)
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SaleStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sold" => Ok(SaleStatus::Sold),
            "Not Sold" | "NotSold" => Ok(SaleStatus::NotSold),
            _ => Err(()),
        }
    }
}

impl Serialize for SaleStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_sale_status(self, serializer)
    }
}

impl<'de> Deserialize<'de> for SaleStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_sale_status(deserializer)
    }
}

pub fn serialize_sale_status<S>(value: &SaleStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_str())
}

pub fn deserialize_sale_status<'de, D>(deserializer: D) -> Result<SaleStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = String::deserialize(deserializer)?;
    SaleStatus::from_str(&value_str)
        .map_err(|_| serde::de::Error::custom(format!("Invalid SaleStatus: {value_str}")))
}
