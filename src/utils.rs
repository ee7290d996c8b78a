//! Utils

use clap::Parser;

/// Arguments for the allocation examples
#[derive(Debug, Parser)]
pub struct ExampleAllocationArgs {
    /// Fixture set to load warehouses and orders from
    #[clap(short, long, default_value = "many")]
    pub fixture: String,

    /// Allocate only this order (defaults to every order in the set)
    #[clap(short, long)]
    pub order: Option<String>,

    /// Log filter used when `RUST_LOG` is not set
    #[clap(short, long, default_value = "fulfil=debug")]
    pub log_filter: String,
}
