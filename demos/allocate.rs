//! Allocation Example
//!
//! This example allocates the orders of a fixture set across its warehouses.
//!
//! Use `-f` to load a fixture set by name
//! Use `-o` to allocate a single order from the set
//! Use `-l` to set the log filter (overridden by `RUST_LOG`)

use std::{io, time::Instant};

use anyhow::Result;

use clap::Parser;
use fulfil::{allocate, fixtures::Fixture, utils::ExampleAllocationArgs};
use tracing_subscriber::{EnvFilter, fmt};

/// Allocation Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleAllocationArgs::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let fixture = Fixture::from_set(&args.fixture)?;

    let keys = match args.order.as_deref() {
        Some(key) => vec![key],
        None => fixture.order_keys(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for key in keys {
        let order = fixture.order(key)?;

        let start = Instant::now();
        let shipment = allocate(order, fixture.warehouses());
        let elapsed = start.elapsed().as_secs_f32();

        println!("\nOrder: {key} ({} units)", order.total_units());

        shipment.write_to(&mut handle)?;

        println!("Solution: {elapsed}s");
    }

    Ok(())
}
