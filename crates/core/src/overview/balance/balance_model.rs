//! Balance reconstruction output models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of a reconstructed balance series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePoint {
    pub timestamp: DateTime<Utc>,
    pub balance: Decimal,
}

impl BalancePoint {
    pub fn new(timestamp: DateTime<Utc>, balance: Decimal) -> Self {
        Self { timestamp, balance }
    }
}

/// Full reconstruction of an investment's balance history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconstructedBalance {
    /// Chronological (timestamp, balance) series from opening to the
    /// latest known point, ascending, each value clamped at zero.
    pub points: Vec<BalancePoint>,
    /// The balance at the latest point.
    pub current: Decimal,
    /// The true arithmetic sum of opening capital and signed movement
    /// deltas, without the zero clamp and without the manual snapshot.
    /// Diagnostic only; a negative value here means the log records more
    /// withdrawals than the displayed balance admits.
    pub unclamped: Decimal,
}
