//! Allocators for Orders

use crate::{orders::Order, shipment::Shipment, warehouses::Warehouse};

pub mod backtracking;

/// Trait for deciding which warehouses fulfil an order
pub trait Allocator {
    /// Allocate the order across the given warehouses.
    ///
    /// Warehouses are in priority order. Returns an empty [`Shipment`] when the
    /// order cannot be fulfilled in full.
    fn allocate(order: &Order, warehouses: &[Warehouse]) -> Shipment;
}
