use chrono::Utc;
use commission_api::domain::{CommissionRates, SalesQuery, SalesRecord, SalesRecordRow};
use commission_api::error::{ApiError, ApiResult};
use commission_api::service::{AddSalesRecordRequest, CommissionService, DEFAULT_DESIGNATION};
use commission_db::models::sales::commission_rate_tier::{rates_from_tiers, tiers_from_rates};
use commission_db::models::sales::sales_record::SalesRecordModel;
use commission_db::repository::create_batch::CreateBatch;
use commission_db::repository::load_batch::LoadBatch;
use commission_db::repository::load_page::LoadPage;
use commission_db::repository::pagination::{Page, PageRequest};
use commission_db::repository::rate_table::RateTableRepository;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use validator::Validate;

use crate::config::SeedConfig;
use crate::memory_repositories::MemoryRepositories;
use crate::repository::sales::SalesRepositories;
use crate::seed::{generate_employee_id, generate_sales_records, session_rng};

fn store_error(e: Box<dyn std::error::Error + Send + Sync>) -> ApiError {
    ApiError::StoreError(e.to_string())
}

/// One dashboard session: the record list and the live rate table.
pub struct DashboardSession {
    repos: SalesRepositories,
    rng: Mutex<StdRng>,
}

impl DashboardSession {
    /// An empty session starting from the config's rate table and RNG seed.
    pub fn new(repos: SalesRepositories, config: &SeedConfig) -> ApiResult<Self> {
        let session = Self {
            repos,
            rng: Mutex::new(session_rng(config)),
        };
        session.replace_rates(config.rates.clone())?;
        Ok(session)
    }

    /// A session pre-filled with synthetic records.
    pub fn seeded(config: &SeedConfig) -> ApiResult<Self> {
        config
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        let repos = MemoryRepositories::new().create_all_repositories();
        let session = Self::new(repos, config)?;

        let records = {
            let mut rng = session.rng.lock();
            generate_sales_records(config, &mut *rng)
        };
        let count = session.insert_records(&records)?;
        tracing::info!(
            records = count,
            employees = config.employee_count,
            "seeded dashboard session"
        );

        Ok(session)
    }

    pub fn repositories(&self) -> &SalesRepositories {
        &self.repos
    }

    /// One page of records in insertion order.
    pub fn records_page(&self, page: PageRequest) -> ApiResult<Page<SalesRecord>> {
        let page = self
            .repos
            .sales_record_repository
            .load_page(page)
            .map_err(store_error)?;
        Ok(page.map(|model| model.to_record()))
    }

    /// Records of one employee, in insertion order.
    pub fn records_for_employee(&self, employee_id: &str) -> ApiResult<Vec<SalesRecord>> {
        let repo = &self.repos.sales_record_repository;
        let ids = repo.find_ids_by_employee_id(employee_id).map_err(store_error)?;
        if ids.is_empty() {
            return Err(ApiError::NotFound(format!("No sales records for employee {employee_id}")));
        }
        let loaded = repo.load_batch(&ids).map_err(store_error)?;
        Ok(loaded
            .into_iter()
            .flatten()
            .map(|model| model.to_record())
            .collect())
    }

    fn insert_records(&self, records: &[SalesRecord]) -> ApiResult<usize> {
        let now = Utc::now();
        let models = records
            .iter()
            .map(|record| SalesRecordModel::from_record(record, now))
            .collect::<Result<Vec<_>, _>>()
            .map_err(ApiError::ValidationError)?;
        let saved = self
            .repos
            .sales_record_repository
            .create_batch(models)
            .map_err(store_error)?;
        Ok(saved.len())
    }
}

impl CommissionService for DashboardSession {
    fn list_records(&self) -> ApiResult<Vec<SalesRecord>> {
        let models = self
            .repos
            .sales_record_repository
            .load_all()
            .map_err(store_error)?;
        Ok(models.iter().map(SalesRecordModel::to_record).collect())
    }

    fn query_records(&self, query: &SalesQuery) -> ApiResult<Vec<SalesRecordRow>> {
        let records = self.list_records()?;
        let rows = query.apply(&records, &self.rates()?);
        tracing::debug!(
            search = %query.search,
            status = ?query.status,
            sort_field = ?query.sort_field,
            sort_order = ?query.sort_order,
            matched = rows.len(),
            "queried sales records"
        );
        Ok(rows)
    }

    fn add_record(&self, request: AddSalesRecordRequest) -> ApiResult<SalesRecord> {
        if let Err(errors) = request.validate() {
            tracing::warn!(%errors, "rejected sales record");
            return Err(errors.into());
        }

        let employee_id = generate_employee_id(&mut *self.rng.lock());
        let record = SalesRecord {
            employee_id,
            employee_name: request.employee_name,
            designation: DEFAULT_DESIGNATION.to_string(),
            product_name: request.product_name,
            sale_amount: request.sale_amount,
            target_completion: request.target_completion,
            status: request.status,
            custom_commission_rate: request.custom_commission_rate,
        };
        self.insert_records(std::slice::from_ref(&record))?;

        tracing::info!(
            employee_id = %record.employee_id,
            product = %record.product_name,
            "added sales record"
        );
        Ok(record)
    }

    fn rates(&self) -> ApiResult<CommissionRates> {
        let tiers = self
            .repos
            .rate_table_repository
            .load_tiers()
            .map_err(store_error)?;
        Ok(rates_from_tiers(&tiers))
    }

    fn replace_rates(&self, rates: CommissionRates) -> ApiResult<()> {
        let count = self
            .repos
            .rate_table_repository
            .replace_tiers(tiers_from_rates(&rates))
            .map_err(store_error)?;
        tracing::info!(tiers = count, "replaced commission rate table");
        Ok(())
    }
}
