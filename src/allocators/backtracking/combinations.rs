//! Cross-item combination of warehouse subsets

use crate::warehouses::set::WarehouseSet;

/// Combine per-item subsets into candidate shipments.
///
/// Every way of picking one subset per item produces one candidate: the union
/// of the picked subsets. Candidates are generated with the first item varying
/// slowest, so the output order is the lexicographic order of the picks.
///
/// If any item has no subsets the result is empty. With no items at all the
/// single empty candidate is returned.
pub fn combine(per_item: &[Vec<WarehouseSet>]) -> Vec<WarehouseSet> {
    per_item
        .iter()
        .fold(vec![WarehouseSet::new()], |candidates, subsets| {
            candidates
                .iter()
                .flat_map(|candidate| subsets.iter().map(|subset| candidate.union(subset)))
                .collect()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets<const N: usize>(positions: [&[usize]; N]) -> Vec<WarehouseSet> {
        positions
            .into_iter()
            .map(|set| set.iter().copied().collect())
            .collect()
    }

    #[test]
    fn unions_every_pick_first_item_slowest() {
        let per_item = [
            sets([&[1, 2], &[3, 4]]),
            sets([&[2, 3], &[4, 5]]),
            sets([&[3, 4], &[5, 6]]),
        ];

        let candidates = combine(&per_item);

        assert_eq!(
            candidates,
            sets([
                &[1, 2, 3, 4],
                &[1, 2, 3, 5, 6],
                &[1, 2, 3, 4, 5],
                &[1, 2, 4, 5, 6],
                &[2, 3, 4],
                &[2, 3, 4, 5, 6],
                &[3, 4, 5],
                &[3, 4, 5, 6],
            ])
        );
    }

    #[test]
    fn item_without_subsets_empties_result() {
        let per_item = [sets([&[0], &[1]]), Vec::new(), sets([&[2]])];

        assert!(combine(&per_item).is_empty());
    }

    #[test]
    fn no_items_yields_single_empty_candidate() {
        assert_eq!(combine(&[]), vec![WarehouseSet::new()]);
    }

    #[test]
    fn trivially_satisfied_item_adds_no_warehouses() {
        let per_item = [sets([&[0, 2]]), vec![WarehouseSet::new()]];

        assert_eq!(combine(&per_item), sets([&[0, 2]]));
    }
}
