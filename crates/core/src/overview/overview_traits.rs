use super::overview_model::OverviewResponse;
use crate::errors::Result;

/// Trait defining the contract for overview snapshot assembly.
pub trait OverviewServiceTrait: Send + Sync {
    /// Builds the full overview snapshot for a tenant.
    fn get_overview(&self, tenant_id: &str) -> Result<OverviewResponse>;
}
