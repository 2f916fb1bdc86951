use std::collections::HashMap;

use uuid::Uuid;

use super::types::{LabDraft, LabSink, TestDraft};
use super::StorageError;
use crate::pipeline::lab_report::ParsedLab;

/// Map a parsed report onto one parent row and its test rows.
/// Rejected lines are diagnostics and are not carried over.
pub fn drafts_from_parsed(lab_id: Uuid, parsed: &ParsedLab) -> (LabDraft, Vec<TestDraft>) {
    let lab = LabDraft {
        id: lab_id,
        provider: parsed.meta.provider.clone(),
        patient_last_name: parsed.patient.last_name.clone(),
        patient_first_name: parsed.patient.first_name.clone(),
        patient_birthdate: parsed.patient.birthdate,
        sampled_at: parsed.meta.sampled_at,
        result_at: parsed.meta.result_at,
    };

    let tests = parsed
        .tests
        .iter()
        .enumerate()
        .map(|(position, test)| TestDraft {
            id: Uuid::new_v4(),
            lab_id,
            position,
            section: test.section.clone(),
            name: test.name.clone(),
            value: test.value,
            raw_value: test.raw_value.clone(),
            unit: test.unit.clone(),
            ref_raw: test.ref_raw.clone(),
        })
        .collect();

    (lab, tests)
}

/// Map-backed sink for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryLabSink {
    labs: HashMap<Uuid, (LabDraft, Vec<TestDraft>)>,
}

impl InMemoryLabSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lab_count(&self) -> usize {
        self.labs.len()
    }

    pub fn get(&self, lab_id: &Uuid) -> Result<(&LabDraft, &[TestDraft]), StorageError> {
        self.labs
            .get(lab_id)
            .map(|(lab, tests)| (lab, tests.as_slice()))
            .ok_or(StorageError::LabNotFound(*lab_id))
    }
}

impl LabSink for InMemoryLabSink {
    fn store_lab(&mut self, lab: LabDraft, tests: Vec<TestDraft>) -> Result<usize, StorageError> {
        if self.labs.contains_key(&lab.id) {
            return Err(StorageError::DuplicateLab(lab.id));
        }
        let count = tests.len();
        tracing::debug!(lab_id = %lab.id, tests = count, "Stored lab import");
        self.labs.insert(lab.id, (lab, tests));
        Ok(count)
    }
}
