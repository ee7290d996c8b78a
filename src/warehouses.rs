//! Warehouses

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

pub mod set;

/// Stock held by a warehouse, keyed by item. Absent items have no stock.
pub type Inventory = FxHashMap<String, u32>;

/// A supply source with a name and per-item stock.
///
/// Warehouses are always handled as an ordered slice. A warehouse's position in
/// that slice is its priority: earlier warehouses are preferred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warehouse {
    name: String,
    inventory: Inventory,
}

impl Warehouse {
    /// Create a warehouse with no stock.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Inventory::default(),
        }
    }

    /// Create a warehouse with the given stock.
    pub fn with_inventory<S, I>(name: impl Into<String>, inventory: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, u32)>,
    {
        Self {
            name: name.into(),
            inventory: inventory
                .into_iter()
                .map(|(item, stock)| (item.into(), stock))
                .collect(),
        }
    }

    /// Warehouse name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Warehouse inventory
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Stock held for an item, zero when the item is not stocked.
    pub fn stock_of(&self, item: &str) -> u32 {
        self.inventory.get(item).copied().unwrap_or(0)
    }
}

/// Stock of one item in every warehouse, in warehouse order.
pub fn stock_levels(warehouses: &[Warehouse], item: &str) -> SmallVec<[u32; 10]> {
    warehouses
        .iter()
        .map(|warehouse| warehouse.stock_of(item))
        .collect()
}

/// Total stock of one item across all warehouses.
pub fn total_stock(warehouses: &[Warehouse], item: &str) -> u64 {
    warehouses
        .iter()
        .map(|warehouse| u64::from(warehouse.stock_of(item)))
        .sum()
}
