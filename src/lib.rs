//! Fulfil
//!
//! Fulfil decides which warehouses should ship a multi-item order. It uses as
//! few warehouses as possible and, among equally small shipments, prefers the
//! warehouses that come earliest in the caller's priority order.
//!
//! ```
//! use fulfil::prelude::*;
//!
//! let order = Order::with_lines([("apple", 10)])?;
//! let warehouses = [
//!     Warehouse::with_inventory("owd", [("apple", 5)]),
//!     Warehouse::with_inventory("dm", [("apple", 5)]),
//! ];
//!
//! let shipment = allocate(&order, &warehouses);
//!
//! assert_eq!(shipment.warehouse_names(), vec!["owd", "dm"]);
//! # Ok::<(), OrderError>(())
//! ```

use crate::{
    allocators::{Allocator, backtracking::BacktrackingAllocator},
    orders::Order,
    shipment::Shipment,
    warehouses::Warehouse,
};

pub mod allocators;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod shipment;
pub mod utils;
pub mod warehouses;

/// Allocate an order across warehouses given in priority order.
///
/// Returns an empty [`Shipment`] if the order cannot be fulfilled in full.
pub fn allocate(order: &Order, warehouses: &[Warehouse]) -> Shipment {
    BacktrackingAllocator::allocate(order, warehouses)
}
