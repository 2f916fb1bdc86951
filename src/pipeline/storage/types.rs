use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StorageError;

/// Parent row for one imported report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabDraft {
    pub id: Uuid,
    pub provider: Option<String>,
    pub patient_last_name: Option<String>,
    pub patient_first_name: Option<String>,
    pub patient_birthdate: Option<NaiveDate>,
    pub sampled_at: Option<NaiveDateTime>,
    pub result_at: Option<NaiveDateTime>,
}

/// Child row for one result, in report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDraft {
    pub id: Uuid,
    pub lab_id: Uuid,
    pub position: usize,
    pub section: Option<String>,
    pub name: String,
    pub value: Option<f64>,
    pub raw_value: String,
    pub unit: Option<String>,
    pub ref_raw: Option<String>,
}

/// Destination for confirmed lab imports (database, API client, ...).
pub trait LabSink {
    /// Store one lab with its tests. Returns the number of tests stored.
    fn store_lab(&mut self, lab: LabDraft, tests: Vec<TestDraft>) -> Result<usize, StorageError>;
}
