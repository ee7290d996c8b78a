//! Candidate selection

use crate::warehouses::set::WarehouseSet;

/// Select the candidate using the fewest warehouses.
///
/// Ties keep the earliest candidate. Returns `None` when there are no candidates.
pub fn select(candidates: &[WarehouseSet]) -> Option<&WarehouseSet> {
    candidates.iter().reduce(|best, candidate| {
        if candidate.len() < best.len() {
            candidate
        } else {
            best
        }
    })
}
