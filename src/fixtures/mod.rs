//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    fixtures::{orders::OrdersFixture, warehouses::WarehousesFixture},
    orders::{Order, OrderError},
    warehouses::Warehouse,
};

pub mod orders;
pub mod warehouses;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid order data
    #[error("Invalid order {0}: {1}")]
    InvalidOrder(String, OrderError),

    /// Order not found
    #[error("Order not found: {0}")]
    OrderNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Warehouses in priority order
    warehouses: Vec<Warehouse>,

    /// Named orders
    orders: FxHashMap<String, Order>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            warehouses: Vec::new(),
            orders: FxHashMap::default(),
        }
    }

    /// Load warehouses from a YAML fixture file, appending them after any already loaded
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_warehouses(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("warehouses")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: WarehousesFixture = serde_norway::from_str(&contents)?;

        self.warehouses
            .extend(fixture.warehouses.into_iter().map(Warehouse::from));

        Ok(self)
    }

    /// Load orders from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if an order repeats an item.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("orders").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OrdersFixture = serde_norway::from_str(&contents)?;

        for (key, order_fixture) in fixture.orders {
            let order = order_fixture
                .try_into_order()
                .map_err(|err| FixtureError::InvalidOrder(key.clone(), err))?;

            self.orders.insert(key, order);
        }

        Ok(self)
    }

    /// Load a complete fixture set (warehouses and orders with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_warehouses(name)?.load_orders(name)?;

        Ok(fixture)
    }

    /// Get an order by its key
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not found.
    pub fn order(&self, key: &str) -> Result<&Order, FixtureError> {
        self.orders
            .get(key)
            .ok_or_else(|| FixtureError::OrderNotFound(key.to_string()))
    }

    /// Order keys, sorted
    pub fn order_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.orders.keys().map(String::as_str).collect();

        keys.sort_unstable();

        keys
    }

    /// Get all warehouses, in priority order
    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use testresult::TestResult;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_loads_warehouses_and_orders() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_warehouses("many")?.load_orders("many")?;

        let names: Vec<&str> = fixture.warehouses().iter().map(Warehouse::name).collect();

        assert_eq!(
            names,
            vec!["owd", "dm", "wh", "wh1", "wh2", "wh3", "wh4", "wh5"]
        );

        let order = fixture.order("several_items")?;

        assert_eq!(order.quantity_of("apple"), Some(7));
        assert_eq!(order.quantity_of("orange"), Some(1));
        assert_eq!(order.quantity_of("banana"), Some(4));

        Ok(())
    }

    #[test]
    fn fixture_from_set_loads_all_fixtures() -> TestResult {
        let fixture = Fixture::from_set("pair")?;

        assert_eq!(fixture.warehouses().len(), 2);
        assert_eq!(fixture.order_keys(), vec!["insufficient", "mixed"]);

        Ok(())
    }

    #[test]
    fn fixture_order_not_found_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.order("nonexistent");

        assert!(matches!(result, Err(FixtureError::OrderNotFound(_))));
    }

    #[test]
    fn fixture_missing_file_returns_io_error() {
        let mut fixture = Fixture::new();
        let result = fixture.load_warehouses("does_not_exist");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn fixture_load_orders_rejects_duplicate_items() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "orders",
            "duplicates",
            "orders:\n  twice:\n    lines:\n      - item: apple\n        quantity: 1\n      - item: apple\n        quantity: 2\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_orders("duplicates");

        assert!(matches!(
            result,
            Err(FixtureError::InvalidOrder(key, OrderError::DuplicateItem(1, _))) if key == "twice"
        ));

        Ok(())
    }

    #[test]
    fn fixture_load_warehouses_rejects_negative_stock() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "warehouses",
            "negative",
            "warehouses:\n  - name: owd\n    inventory:\n      apple: -1\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_warehouses("negative");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));

        Ok(())
    }

    #[test]
    fn fixture_load_warehouses_appends_in_order() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "warehouses",
            "near",
            "warehouses:\n  - name: near\n    inventory:\n      apple: 1\n",
        )?;
        write_fixture(
            dir.path(),
            "warehouses",
            "far",
            "warehouses:\n  - name: far\n    inventory: {}\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        fixture.load_warehouses("near")?.load_warehouses("far")?;

        let names: Vec<&str> = fixture.warehouses().iter().map(Warehouse::name).collect();

        assert_eq!(names, vec!["near", "far"]);

        Ok(())
    }

    #[test]
    fn fixture_default_matches_new() {
        let fixture = Fixture::default();

        assert_eq!(fixture.base_path, PathBuf::from("./fixtures"));
        assert!(fixture.warehouses.is_empty());
        assert!(fixture.orders.is_empty());
    }
}
