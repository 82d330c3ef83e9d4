//! Replays an investment's movement log into a balance history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::balance_model::{BalancePoint, ReconstructedBalance};
use crate::investments::{Investment, Movement, MovementKind};

/// Signed balance delta of a movement.
fn signed_delta(movement: &Movement) -> Decimal {
    match movement.kind {
        MovementKind::Contribution => movement.amount,
        MovementKind::Withdrawal => -movement.amount,
        MovementKind::ValuationAdjustment => movement.amount,
    }
}

/// Reconstructs the full balance history of an investment.
///
/// Starts from the opening capital at the opening date (record creation
/// time when no opening date is set) and replays movements in ascending
/// date order. The running value is clamped to zero after every step: an
/// over-withdrawal never shows a negative balance. This masks the true
/// arithmetic, which is reported separately in `unclamped`.
///
/// When a manual current-value snapshot exists it becomes the final
/// point: appended when its as-of date is strictly after the last
/// movement point, otherwise replacing the last point's value in place
/// so ordering is preserved.
pub fn reconstruct_balance(
    investment: &Investment,
    movements: &[Movement],
) -> ReconstructedBalance {
    let mut ordered: Vec<&Movement> = movements.iter().collect();
    ordered.sort_by_key(|m| m.effective_at);

    let mut running = investment.capital_invested.max(Decimal::ZERO);
    let mut unclamped = investment.capital_invested;

    let mut points = Vec::with_capacity(ordered.len() + 2);
    points.push(BalancePoint::new(investment.opening_instant(), running));

    for movement in ordered {
        let delta = signed_delta(movement);
        unclamped += delta;
        running = (running + delta).max(Decimal::ZERO);
        points.push(BalancePoint::new(movement.effective_at, running));
    }

    if let (Some(current_value), Some(as_of)) = (investment.current_value, investment.value_as_of) {
        match points.last_mut() {
            Some(last) if as_of > last.timestamp => {
                points.push(BalancePoint::new(as_of, current_value));
            }
            Some(last) => {
                last.balance = current_value;
            }
            None => points.push(BalancePoint::new(as_of, current_value)),
        }
    }

    points.sort_by_key(|p| p.timestamp);
    let current = points.last().map(|p| p.balance).unwrap_or(Decimal::ZERO);

    ReconstructedBalance {
        points,
        current,
        unclamped,
    }
}

/// The true running arithmetic of the movement log: opening capital plus
/// every signed delta, unclamped and ignoring the manual snapshot field.
///
/// The current-value update flow measures its valuation-adjustment delta
/// against this figure, so replaying the log afterwards lands exactly on
/// the entered value.
pub fn unclamped_running_value(investment: &Investment, movements: &[Movement]) -> Decimal {
    movements
        .iter()
        .fold(investment.capital_invested, |acc, m| acc + signed_delta(m))
}

/// Extends a single-point series to the chart horizon.
///
/// A series with one point that predates the horizon gains a duplicate
/// of its value at the horizon, so a flat line stays visible across the
/// full chart range. Rendering adjacency only; multi-point series are
/// returned unchanged.
pub fn extend_flat_series(
    mut points: Vec<BalancePoint>,
    horizon: DateTime<Utc>,
) -> Vec<BalancePoint> {
    if points.len() == 1 && points[0].timestamp < horizon {
        let value = points[0].balance;
        points.push(BalancePoint::new(horizon, value));
    }
    points
}
