//! Backtracking Allocator
//!
//! Finds the shipment that uses the fewest warehouses in four stages:
//!
//! 1. [`subsets::enumerate_subsets`] lists, per order line, the warehouse
//!    subsets that cover the ordered quantity.
//! 2. [`combinations::combine`] unions one subset per line into candidate
//!    shipments.
//! 3. [`selection::select`] picks the smallest candidate, keeping the earliest
//!    on ties.
//! 4. [`resolution::resolve`] assigns exact quantities, draining warehouses in
//!    priority order.

use tracing::{debug, debug_span, trace};

use crate::{
    allocators::{
        Allocator,
        backtracking::observer::{AllocationObserver, NoopObserver},
    },
    orders::Order,
    shipment::Shipment,
    warehouses::{Warehouse, set::WarehouseSet, stock_levels},
};

pub mod combinations;
pub mod observer;
pub mod resolution;
pub mod selection;
pub mod subsets;

/// Allocator using exhaustive backtracking over warehouse subsets
#[derive(Debug)]
pub struct BacktrackingAllocator;

impl Allocator for BacktrackingAllocator {
    fn allocate(order: &Order, warehouses: &[Warehouse]) -> Shipment {
        Self::allocate_with_observer(order, warehouses, &mut NoopObserver)
    }
}

impl BacktrackingAllocator {
    /// Allocate the order, reporting each search stage to `observer`.
    pub fn allocate_with_observer<O: AllocationObserver>(
        order: &Order,
        warehouses: &[Warehouse],
        observer: &mut O,
    ) -> Shipment {
        let span = debug_span!(
            "allocate",
            lines = order.len(),
            warehouses = warehouses.len()
        );
        let _guard = span.enter();

        let per_item: Vec<Vec<WarehouseSet>> = order
            .iter()
            .map(|line| {
                let stock = stock_levels(warehouses, line.item());
                let subsets = subsets::enumerate_subsets(line.quantity(), &stock);

                trace!(
                    item = line.item(),
                    required = line.quantity(),
                    subsets = subsets.len(),
                    "enumerated item subsets"
                );

                observer.on_item_subsets(line.item(), line.quantity(), &subsets);

                subsets
            })
            .collect();

        let candidates = combinations::combine(&per_item);

        debug!(candidates = candidates.len(), "combined item subsets");

        observer.on_candidates(&candidates);

        let selected = selection::select(&candidates);

        observer.on_selected(selected);

        let shipment = match selected {
            Some(selected) if !selected.is_empty() => {
                debug!(%selected, "selected warehouses");

                resolution::resolve(order, selected, warehouses)
            }
            Some(_) => {
                debug!("order requires no warehouses");

                Shipment::empty()
            }
            None => {
                debug!("order cannot be fulfilled");

                Shipment::empty()
            }
        };

        observer.on_resolved(&shipment);

        shipment
    }
}
