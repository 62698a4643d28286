use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::commission_rates::CommissionRates;
use super::common_enums::SaleStatus;
use super::sales_record::{SalesRecord, SalesRecordRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Sold,
    NotSold,
}

impl StatusFilter {
    pub fn matches(&self, status: SaleStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Sold => status == SaleStatus::Sold,
            StatusFilter::NotSold => status == SaleStatus::NotSold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    #[default]
    Amount,
    Commission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Search, filter and sort state of the sales table.
///
/// Defaults to every record, largest sale first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SalesQuery {
    /// Case-insensitive substring matched against employee and product names.
    pub search: String,
    pub status: StatusFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl SalesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }

    /// Clicking the active column flips its order; clicking another column
    /// selects it in descending order.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.reversed();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Desc;
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.matches_search(record) && self.status.matches(record.status)
    }

    fn matches_search(&self, record: &SalesRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.employee_name.to_lowercase().contains(&needle)
            || record.product_name.to_lowercase().contains(&needle)
    }

    /// Filters and sorts `records` into table rows. The sort is stable, so
    /// ties keep insertion order.
    pub fn apply(&self, records: &[SalesRecord], rates: &CommissionRates) -> Vec<SalesRecordRow> {
        let mut rows: Vec<SalesRecordRow> = records
            .iter()
            .filter(|record| self.matches(record))
            .map(|record| SalesRecordRow::new(record.clone(), rates))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = self.compare(a, b);
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        rows
    }

    fn compare(&self, a: &SalesRecordRow, b: &SalesRecordRow) -> Ordering {
        match self.sort_field {
            SortField::Name => a
                .record
                .employee_name
                .to_lowercase()
                .cmp(&b.record.employee_name.to_lowercase()),
            SortField::Amount => a.record.sale_amount.cmp(&b.record.sale_amount),
            SortField::Commission => a.commission.cmp(&b.commission),
        }
    }
}
