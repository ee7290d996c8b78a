//! Warehouse Fixtures

use serde::Deserialize;

use crate::warehouses::{Inventory, Warehouse};

/// Wrapper for warehouses in YAML
#[derive(Debug, Deserialize)]
pub struct WarehousesFixture {
    /// Warehouses in priority order
    pub warehouses: Vec<WarehouseFixture>,
}

/// Warehouse fixture from YAML
#[derive(Debug, Deserialize)]
pub struct WarehouseFixture {
    /// Warehouse name
    pub name: String,

    /// Stock per item
    #[serde(default)]
    pub inventory: Inventory,
}

impl From<WarehouseFixture> for Warehouse {
    fn from(fixture: WarehouseFixture) -> Self {
        Warehouse::with_inventory(fixture.name, fixture.inventory)
    }
}
