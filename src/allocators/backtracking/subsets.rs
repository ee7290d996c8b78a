//! Per-item subset enumeration

use smallvec::SmallVec;

use crate::warehouses::set::WarehouseSet;

type ChosenPositions = SmallVec<[usize; 8]>;

/// Enumerate the warehouse subsets that can cover `required` units of one item.
///
/// `stock` holds the item's stock in every warehouse, in priority order.
/// Subsets are built depth first from increasing positions. As soon as the
/// positions chosen so far reach `required`, that subset is recorded and the
/// remaining siblings at the same depth are not explored: any later sibling
/// would only produce a subset that starts the same way but ends later.
///
/// Results are ordered by starting position, then depth first. Selection relies
/// on this order to break ties.
///
/// A `required` of zero is satisfied by the empty subset. When the total stock
/// is insufficient, no subsets are returned.
pub fn enumerate_subsets(required: u32, stock: &[u32]) -> Vec<WarehouseSet> {
    if required == 0 {
        return vec![WarehouseSet::new()];
    }

    let mut subsets = Vec::new();
    let mut chosen = ChosenPositions::new();

    backtrack(required, stock, 0, 0, &mut chosen, &mut subsets);

    subsets
}

fn backtrack(
    required: u32,
    stock: &[u32],
    start: usize,
    total: u64,
    chosen: &mut ChosenPositions,
    subsets: &mut Vec<WarehouseSet>,
) {
    let candidates = stock
        .iter()
        .copied()
        .enumerate()
        .skip(start)
        .filter(|&(_, available)| available > 0);

    for (position, available) in candidates {
        let running = total + u64::from(available);

        chosen.push(position);

        if running >= u64::from(required) {
            subsets.push(chosen.iter().copied().collect());
            chosen.pop();

            return;
        }

        backtrack(required, stock, position + 1, running, chosen, subsets);

        chosen.pop();
    }
}
