//! Shipment

use std::io;

use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

/// Errors that can occur when writing a shipment.
#[derive(Debug, Error)]
pub enum ShipmentError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Quantity of one item a warehouse must ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentLine {
    /// Item identifier
    pub item: String,

    /// Quantity to ship, always greater than zero
    pub quantity: u32,
}

/// Everything a single warehouse must ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentEntry {
    /// Position of the warehouse in the input slice
    pub warehouse_idx: usize,

    /// Warehouse name
    pub name: String,

    /// Lines to ship, in order line order
    pub lines: SmallVec<[ShipmentLine; 4]>,
}

impl ShipmentEntry {
    /// Create an entry with no lines.
    pub fn new(warehouse_idx: usize, name: impl Into<String>) -> Self {
        Self {
            warehouse_idx,
            name: name.into(),
            lines: SmallVec::new(),
        }
    }

    /// Quantity of an item shipped from this warehouse, zero if not shipped.
    pub fn quantity_for(&self, item: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item == item)
            .map_or(0, |line| line.quantity)
    }

    /// Total number of units shipped from this warehouse.
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// Resolved shipment for an order.
///
/// Entries follow the original warehouse order and each warehouse appears at
/// most once. An empty shipment means the order could not be fulfilled in
/// full (or needed nothing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shipment {
    entries: SmallVec<[ShipmentEntry; 4]>,
}

impl Shipment {
    /// Create an empty shipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a shipment from resolved entries.
    pub fn new(entries: SmallVec<[ShipmentEntry; 4]>) -> Self {
        Self { entries }
    }

    /// Resolved entries, in warehouse order.
    pub fn entries(&self) -> &[ShipmentEntry] {
        &self.entries
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &ShipmentEntry> {
        self.entries.iter()
    }

    /// Get the number of warehouses in the shipment.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the shipment is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the shipping warehouses, in warehouse order.
    pub fn warehouse_names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Total quantity of an item across every warehouse.
    pub fn quantity_for(&self, item: &str) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity_for(item)))
            .sum()
    }

    /// Total number of units shipped.
    pub fn total_units(&self) -> u64 {
        self.entries.iter().map(ShipmentEntry::total_units).sum()
    }

    /// Writes the shipment as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ShipmentError> {
        if self.is_empty() {
            writeln!(out, "\nNo shipment.")?;

            return Ok(());
        }

        let mut builder = Builder::default();
        let mut entry_boundary_rows: SmallVec<[usize; 8]> = SmallVec::new();

        builder.push_record(["Warehouse", "Item", "Quantity"]);

        let mut row = 1;

        for entry in &self.entries {
            entry_boundary_rows.push(row);

            if entry.lines.is_empty() {
                builder.push_record([entry.name.as_str(), "-", "0"]);
                row += 1;

                continue;
            }

            for (i, line) in entry.lines.iter().enumerate() {
                let name = if i == 0 { entry.name.as_str() } else { "" };
                let quantity = line.quantity.to_string();

                builder.push_record([name, line.item.as_str(), quantity.as_str()]);
                row += 1;
            }
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();

        for &boundary in &entry_boundary_rows {
            theme.insert_horizontal_line(boundary, separator);
        }

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::last(), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(
            out,
            " Warehouses: {}  Units: {}",
            self.len(),
            self.total_units()
        )?;

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Shipment {
    type Item = &'a ShipmentEntry;
    type IntoIter = std::slice::Iter<'a, ShipmentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
