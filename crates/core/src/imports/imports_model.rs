//! Import payload and result models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// CSV blobs accepted by the import endpoint. Each section is optional;
/// absent sections are skipped entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportPayload {
    #[serde(default)]
    pub tenant_id: String,
    pub investments_csv: Option<String>,
    pub liabilities_csv: Option<String>,
    pub cashflow_csv: Option<String>,
    pub rentals_csv: Option<String>,
}

impl ImportPayload {
    pub fn validate(&self) -> Result<()> {
        if self.tenant_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "tenantId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Per-section row counts from one import run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    pub inserted: usize,
    pub updated: usize,
    /// Rows dropped for a missing natural key or an unreadable record.
    pub skipped: usize,
}

/// Aggregate result of an import run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub investments: SectionSummary,
    pub liabilities: SectionSummary,
    pub cashflow: SectionSummary,
    pub rentals: SectionSummary,
}
