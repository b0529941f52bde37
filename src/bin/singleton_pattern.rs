//! Singleton pattern demo.
//!
//! Run with: cargo run --bin singleton_pattern

use anyhow::{Context, Result};
use design_patterns::banner;
use design_patterns::singleton::{first_use, second_use, shared_logger};
use design_patterns::{CatalogConfig, FancyLogger};

fn main() -> Result<()> {
    design_patterns::init_tracing();
    let config = CatalogConfig::load().context("failed to load catalog config")?;

    banner("Process-Wide Instance");
    first_use(shared_logger());
    second_use(shared_logger());

    banner("Instance Owned By main");
    let logger = FancyLogger::with_prefix(&config.logger_prefix);
    first_use(&logger);
    second_use(&logger);

    banner("A Fresh Logger Starts Empty");
    let scratch = FancyLogger::new();
    scratch.print_log_count();

    Ok(())
}
