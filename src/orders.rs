//! Orders

use smallvec::SmallVec;
use thiserror::Error;

/// Errors related to order construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The same item appears on more than one order line (line index, item).
    #[error("Order line {0} repeats item {1}")]
    DuplicateItem(usize, String),
}

/// A single requested item and the quantity required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    item: String,
    quantity: u32,
}

impl OrderLine {
    /// Create a new order line.
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }

    /// Item identifier
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Quantity required
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl<S: Into<String>> From<(S, u32)> for OrderLine {
    fn from((item, quantity): (S, u32)) -> Self {
        OrderLine::new(item, quantity)
    }
}

/// Order
///
/// Lines keep their insertion order, which is the order items are searched in
/// and therefore decides which of several equally small shipments is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: SmallVec<[OrderLine; 10]>,
}

impl Order {
    /// Create a new, empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order from the given lines.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError::DuplicateItem`] if an item appears on more than one line.
    pub fn with_lines<L>(lines: impl IntoIterator<Item = L>) -> Result<Self, OrderError>
    where
        L: Into<OrderLine>,
    {
        let mut order = Order::new();

        lines
            .into_iter()
            .try_for_each(|line| order.push(line.into()))?;

        Ok(order)
    }

    /// Append a line to the order.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError::DuplicateItem`] if the item is already on the order.
    pub fn push(&mut self, line: OrderLine) -> Result<(), OrderError> {
        if self.quantity_of(line.item()).is_some() {
            return Err(OrderError::DuplicateItem(self.lines.len(), line.item));
        }

        self.lines.push(line);

        Ok(())
    }

    /// Iterate over the order lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines.iter()
    }

    /// Quantity requested for an item, if it is on the order.
    pub fn quantity_of(&self, item: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.item() == item)
            .map(OrderLine::quantity)
    }

    /// Get the number of lines on the order.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the order has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units requested across all lines.
    pub fn total_units(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a OrderLine;
    type IntoIter = std::slice::Iter<'a, OrderLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn with_lines_keeps_insertion_order() -> TestResult {
        let order = Order::with_lines([("banana", 4), ("apple", 7), ("orange", 1)])?;

        let items: Vec<&str> = order.iter().map(OrderLine::item).collect();

        assert_eq!(items, vec!["banana", "apple", "orange"]);

        Ok(())
    }

    #[test]
    fn with_lines_duplicate_item_errors() {
        let result = Order::with_lines([("apple", 1), ("pear", 2), ("apple", 3)]);

        assert_eq!(
            result,
            Err(OrderError::DuplicateItem(2, "apple".to_string()))
        );
    }

    #[test]
    fn quantity_of_missing_item_is_none() -> TestResult {
        let order = Order::with_lines([("apple", 5)])?;

        assert_eq!(order.quantity_of("apple"), Some(5));
        assert_eq!(order.quantity_of("pear"), None);

        Ok(())
    }

    #[test]
    fn total_units_sums_all_lines() -> TestResult {
        let order = Order::with_lines([("apple", 5), ("banana", 0), ("orange", u32::MAX)])?;

        assert_eq!(order.total_units(), 5 + u64::from(u32::MAX));

        Ok(())
    }

    #[test]
    fn is_empty() -> TestResult {
        let empty = Order::new();
        let non_empty = Order::with_lines([("apple", 1)])?;

        assert!(empty.is_empty());
        assert!(!non_empty.is_empty());
        assert_eq!(non_empty.len(), 1);

        Ok(())
    }
}
