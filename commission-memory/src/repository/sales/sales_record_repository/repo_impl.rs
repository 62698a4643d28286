use commission_db::models::sales::sales_record::{SalesRecordIdxModel, SalesRecordModel};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Records in insertion order plus the lookups derived from them.
///
/// Both live behind one lock so a reader never sees a record without its index
/// entry.
#[derive(Debug, Default)]
pub struct SalesRecordStore {
    pub(super) records: Vec<SalesRecordModel>,
    pub(super) positions: HashMap<Uuid, usize>,
    pub(super) by_employee_id_hash: HashMap<i64, Vec<Uuid>>,
}

impl SalesRecordStore {
    pub(super) fn insert(&mut self, item: SalesRecordModel, idx: SalesRecordIdxModel) {
        self.positions.insert(item.id, self.records.len());
        self.by_employee_id_hash
            .entry(idx.employee_id_hash)
            .or_default()
            .push(idx.id);
        self.records.push(item);
    }

    pub(super) fn get(&self, id: &Uuid) -> Option<&SalesRecordModel> {
        self.positions.get(id).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub struct SalesRecordRepositoryImpl {
    pub store: Arc<RwLock<SalesRecordStore>>,
}

impl SalesRecordRepositoryImpl {
    pub fn new(store: Arc<RwLock<SalesRecordStore>>) -> Self {
        Self { store }
    }

    pub fn count(&self) -> usize {
        self.store.read().len()
    }
}
