//! Overview aggregation engine.
//!
//! This is the computed layer of the application: it folds the raw
//! per-entity records into one coherent financial snapshot. The module
//! splits into balance reconstruction (per investment), the monthly
//! aggregator (cross-entity, time-bucketed), and the snapshot composer
//! that assembles the outward-facing payload.

pub mod aggregation;
pub mod balance;

mod overview_model;
mod overview_service;
mod overview_traits;


pub use overview_model::*;
pub use overview_service::{compose_overview, OverviewService};
pub use overview_traits::OverviewServiceTrait;
