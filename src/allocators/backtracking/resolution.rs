//! Allocation resolution

use smallvec::SmallVec;

use crate::{
    orders::Order,
    shipment::{Shipment, ShipmentEntry, ShipmentLine},
    warehouses::{Warehouse, set::WarehouseSet},
};

/// Work out how much of each item every selected warehouse ships.
///
/// Selected warehouses are visited in priority order. Each one ships as much of
/// every still outstanding item as it can, so earlier warehouses are drained
/// before later ones are tapped. Items a warehouse ships none of are left off
/// its entry. A selected warehouse that ends up shipping nothing still gets an
/// (empty) entry; positions outside `warehouses` are skipped.
pub fn resolve(order: &Order, selected: &WarehouseSet, warehouses: &[Warehouse]) -> Shipment {
    let mut remaining: SmallVec<[u32; 10]> = order.iter().map(|line| line.quantity()).collect();

    let entries = selected
        .iter()
        .filter_map(|position| Some((position, warehouses.get(position)?)))
        .map(|(position, warehouse)| {
            let mut entry = ShipmentEntry::new(position, warehouse.name());

            for (line, outstanding) in order.iter().zip(remaining.iter_mut()) {
                let shipped = (*outstanding).min(warehouse.stock_of(line.item()));

                if shipped == 0 {
                    continue;
                }

                *outstanding -= shipped;

                entry.lines.push(ShipmentLine {
                    item: line.item().to_string(),
                    quantity: shipped,
                });
            }

            entry
        })
        .collect();

    Shipment::new(entries)
}
