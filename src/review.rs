//! Preview-then-confirm flow for lab imports.
//!
//! Parsing is best-effort, so nothing is stored until a person has looked
//! at the preview. A preview with zero tests is a valid outcome, shown as
//! `Empty` rather than raised as an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::preview_thresholds;
use crate::pipeline::lab_report::ParsedLab;
use crate::pipeline::storage::{drafts_from_parsed, LabSink, StorageError};

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Preview has no test results to confirm")]
    NothingToConfirm,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PreviewStatus {
    Empty,
    LowConfidence,
    NeedsReview,
    Ready,
}

impl PreviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::LowConfidence => "low_confidence",
            Self::NeedsReview => "needs_review",
            Self::Ready => "ready",
        }
    }
}

/// Parsed report awaiting user confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    pub id: Uuid,
    pub parsed: ParsedLab,
    pub acceptance_ratio: f32,
    pub status: PreviewStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmResult {
    pub lab_id: Uuid,
    pub tests_stored: usize,
    pub rejected_lines_dropped: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectResult {
    pub preview_id: Uuid,
    pub reason: Option<String>,
}

/// Share of candidate rows that became tests. 0.0 when there were none.
pub fn acceptance_ratio(parsed: &ParsedLab) -> f32 {
    let candidates = parsed.tests.len() + parsed.rejected_lines.len();
    if candidates == 0 {
        return 0.0;
    }
    parsed.tests.len() as f32 / candidates as f32
}

pub fn classify_preview(parsed: &ParsedLab, ratio: f32) -> PreviewStatus {
    if parsed.tests.is_empty() {
        PreviewStatus::Empty
    } else if ratio < preview_thresholds::LOW {
        PreviewStatus::LowConfidence
    } else if ratio < preview_thresholds::HIGH {
        PreviewStatus::NeedsReview
    } else {
        PreviewStatus::Ready
    }
}

pub fn build_preview(parsed: ParsedLab) -> ImportPreview {
    let ratio = acceptance_ratio(&parsed);
    let status = classify_preview(&parsed, ratio);

    tracing::info!(
        tests = parsed.tests.len(),
        rejected = parsed.rejected_lines.len(),
        status = status.as_str(),
        "Built lab import preview"
    );

    ImportPreview {
        id: Uuid::new_v4(),
        parsed,
        acceptance_ratio: ratio,
        status,
    }
}

/// Store a confirmed preview: one lab row plus one row per test.
pub fn confirm_preview(
    preview: &ImportPreview,
    sink: &mut dyn LabSink,
) -> Result<ConfirmResult, ReviewError> {
    if preview.status == PreviewStatus::Empty {
        return Err(ReviewError::NothingToConfirm);
    }

    let (lab, tests) = drafts_from_parsed(preview.id, &preview.parsed);
    let tests_stored = sink.store_lab(lab, tests)?;

    tracing::info!(lab_id = %preview.id, tests_stored, "Lab import confirmed");

    Ok(ConfirmResult {
        lab_id: preview.id,
        tests_stored,
        rejected_lines_dropped: preview.parsed.rejected_lines.len(),
    })
}

pub fn reject_preview(preview: &ImportPreview, reason: Option<String>) -> RejectResult {
    tracing::info!(
        preview_id = %preview.id,
        reason = reason.as_deref().unwrap_or("none"),
        "Lab import rejected"
    );
    RejectResult {
        preview_id: preview.id,
        reason,
    }
}
