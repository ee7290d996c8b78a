//! Fulfil prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    allocate,
    allocators::{
        Allocator,
        backtracking::{
            BacktrackingAllocator,
            observer::{AllocationObserver, NoopObserver},
        },
    },
    fixtures::{Fixture, FixtureError},
    orders::{Order, OrderError, OrderLine},
    shipment::{Shipment, ShipmentEntry, ShipmentError, ShipmentLine},
    warehouses::{Inventory, Warehouse, set::WarehouseSet},
};
