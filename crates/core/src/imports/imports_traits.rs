use async_trait::async_trait;

use super::imports_model::{ImportPayload, ImportSummary};
use crate::errors::Result;

/// Trait defining the contract for CSV import operations.
#[async_trait]
pub trait ImportServiceTrait: Send + Sync {
    /// Imports every CSV section present in the payload, upserting rows
    /// by their tenant-scoped natural key.
    async fn import_data(&self, payload: ImportPayload) -> Result<ImportSummary>;
}
