//! Order Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::orders::{Order, OrderError, OrderLine};

/// Wrapper for orders in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Map of order key -> order fixture
    pub orders: FxHashMap<String, OrderFixture>,
}

/// Order fixture from YAML
///
/// Lines are a list rather than a map so their order survives parsing.
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order lines
    #[serde(default)]
    pub lines: Vec<OrderLineFixture>,
}

/// Order line fixture from YAML
#[derive(Debug, Deserialize)]
pub struct OrderLineFixture {
    /// Item identifier
    pub item: String,

    /// Quantity required
    pub quantity: u32,
}

impl OrderFixture {
    /// Convert to an [`Order`]
    ///
    /// # Errors
    ///
    /// Returns an error if an item appears on more than one line.
    pub fn try_into_order(self) -> Result<Order, OrderError> {
        Order::with_lines(
            self.lines
                .into_iter()
                .map(|line| OrderLine::new(line.item, line.quantity)),
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn lines_keep_yaml_order() -> TestResult {
        let fixture: OrderFixture = serde_norway::from_str(
            "lines:\n  - item: orange\n    quantity: 1\n  - item: apple\n    quantity: 7\n",
        )?;

        let order = fixture.try_into_order()?;
        let items: Vec<&str> = order.iter().map(OrderLine::item).collect();

        assert_eq!(items, vec!["orange", "apple"]);

        Ok(())
    }

    #[test]
    fn missing_lines_is_empty_order() -> TestResult {
        let fixture: OrderFixture = serde_norway::from_str("{}")?;

        assert!(fixture.try_into_order()?.is_empty());

        Ok(())
    }
}
