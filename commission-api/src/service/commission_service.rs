use crate::domain::calculations::SalesSummary;
use crate::domain::calculator::{CalculatorInput, CommissionPreview};
use crate::domain::charts::CommissionCharts;
use crate::domain::commission_rates::CommissionRates;
use crate::domain::rate_draft::CommissionRateDraft;
use crate::domain::sales_query::SalesQuery;
use crate::domain::sales_record::{SalesRecord, SalesRecordRow};
use crate::error::ApiResult;
use crate::service::requests::AddSalesRecordRequest;

/// Operations a dashboard session offers to the presentation layer.
///
/// Everything is synchronous and in-memory. Implementations own the record
/// list and the live rate table; every computation reads their current state.
pub trait CommissionService {
    /// All records in insertion order.
    fn list_records(&self) -> ApiResult<Vec<SalesRecord>>;

    /// Table rows after search, status filter and sort.
    fn query_records(&self, query: &SalesQuery) -> ApiResult<Vec<SalesRecordRow>>;

    /// Validates the request and appends a new record, returning it.
    fn add_record(&self, request: AddSalesRecordRequest) -> ApiResult<SalesRecord>;

    /// Snapshot of the live rate table.
    fn rates(&self) -> ApiResult<CommissionRates>;

    /// Replaces the live rate table wholesale.
    fn replace_rates(&self, rates: CommissionRates) -> ApiResult<()>;

    /// Starts an editing session on a copy of the live table.
    fn edit_rates(&self) -> ApiResult<CommissionRateDraft> {
        Ok(CommissionRateDraft::from_rates(&self.rates()?))
    }

    /// Saves an edited draft as the live table.
    fn save_rates(&self, draft: CommissionRateDraft) -> ApiResult<()> {
        self.replace_rates(draft.into_rates())
    }

    fn summary(&self) -> ApiResult<SalesSummary> {
        Ok(SalesSummary::compute(&self.list_records()?, &self.rates()?))
    }

    fn charts(&self) -> ApiResult<CommissionCharts> {
        Ok(CommissionCharts::compute(&self.list_records()?, &self.rates()?))
    }

    fn preview(&self, input: CalculatorInput) -> ApiResult<CommissionPreview> {
        Ok(CommissionPreview::compute(input, &self.rates()?))
    }

    /// Live preview of a record still being entered; the request is not validated.
    fn preview_record(&self, request: &AddSalesRecordRequest) -> ApiResult<CommissionPreview> {
        self.preview(CalculatorInput::from(request))
    }
}
