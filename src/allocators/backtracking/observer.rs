//! Allocation Observer

use crate::{shipment::Shipment, warehouses::set::WarehouseSet};

/// Observer trait for following an allocation search as it runs.
///
/// The allocator calls these hooks at each stage of the search so callers can
/// record or render what was considered without duplicating the search logic.
/// The default observer is [`NoopObserver`].
pub trait AllocationObserver {
    /// Called once per order line with the warehouse subsets that can cover it.
    ///
    /// # Parameters
    ///
    /// - `item`: Item identifier from the order line
    /// - `required`: Quantity ordered
    /// - `subsets`: Qualifying subsets, in enumeration order
    fn on_item_subsets(&mut self, item: &str, required: u32, subsets: &[WarehouseSet]);

    /// Called with every candidate shipment, in generation order.
    fn on_candidates(&mut self, _candidates: &[WarehouseSet]) {}

    /// Called with the chosen candidate, or `None` when the order cannot be fulfilled.
    fn on_selected(&mut self, selected: Option<&WarehouseSet>);

    /// Called with the final shipment.
    fn on_resolved(&mut self, _shipment: &Shipment) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AllocationObserver for NoopObserver {
    fn on_item_subsets(&mut self, _item: &str, _required: u32, _subsets: &[WarehouseSet]) {}

    fn on_selected(&mut self, _selected: Option<&WarehouseSet>) {}
}
