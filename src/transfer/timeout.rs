//! Timeout budgets per transfer mode.

use std::time::Duration;

use crate::config::TransferMode;

/// Budget for a single item. Sized for source media up to tens of hours of
/// runtime.
pub const SINGLE_BUDGET: Duration = Duration::from_secs(60 * 60);

/// Budget for a collection. The server aggregates many individual retrievals
/// before answering, so the ceiling is doubled.
pub const COLLECTION_BUDGET: Duration = Duration::from_secs(2 * 60 * 60);

/// Budget for a metadata probe. Probes return a small JSON document and should
/// never take long.
pub const PROBE_BUDGET: Duration = Duration::from_secs(60);

/// Maximum duration allowed for a transfer in the given mode.
///
/// Exceeding the budget is a terminal failure; there are no retries.
pub fn budget_for(mode: TransferMode) -> Duration {
    match mode {
        TransferMode::Single => SINGLE_BUDGET,
        TransferMode::Collection => COLLECTION_BUDGET,
    }
}
