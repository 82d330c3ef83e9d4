//! Balance reconstruction for a single investment's movement log.

mod balance_model;
mod balance_service;


pub use balance_model::{BalancePoint, ReconstructedBalance};
pub use balance_service::{extend_flat_series, reconstruct_balance, unclamped_running_value};
