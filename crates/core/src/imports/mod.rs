//! CSV import module - payload models, parsing, and the import service.

mod imports_model;
mod imports_service;
mod imports_traits;

#[cfg(test)]
mod imports_service_tests;

// Re-export the public interface
pub use imports_model::{ImportPayload, ImportSummary, SectionSummary};
pub use imports_service::ImportService;
pub use imports_traits::ImportServiceTrait;
