use crate::db::store::EventStore;
use crate::errors::AppResult;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: Vec<i64>,
    pub missing: Vec<i64>,
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete each id in turn. Ids that no longer exist are collected in
    /// `missing` and do not stop the batch; storage failures do.
    pub fn apply(store: &EventStore, ids: &[i64]) -> AppResult<DeleteReport> {
        let mut report = DeleteReport::default();

        for &id in ids {
            if store.delete(id)? {
                store.audit("del", &format!("#{id}"), "Event deleted");
                report.deleted.push(id);
            } else {
                report.missing.push(id);
            }
        }

        Ok(report)
    }
}
