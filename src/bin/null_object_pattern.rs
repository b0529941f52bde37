//! Null object pattern demo.
//!
//! Run with: cargo run --bin null_object_pattern

use anyhow::{Context, Result};
use design_patterns::banner;
use design_patterns::null_object::{greeting_with_checks, print_user, UserDirectory};
use design_patterns::CatalogConfig;

fn main() -> Result<()> {
    design_patterns::init_tracing();
    let config = CatalogConfig::load().context("failed to load catalog config")?;
    let directory = UserDirectory::new([(1, "Bob"), (2, "John")], &config.access_list);

    banner("Checking For Missing Users Everywhere");
    for id in 1..=3 {
        for line in greeting_with_checks(directory.find_user(id).ok()) {
            println!("{line}");
        }
    }

    banner("Null Object");
    for id in 1..=3 {
        print_user(&directory, id);
    }

    if let Err(e) = directory.find_user(3) {
        println!("Strict lookup: {e}");
    }

    Ok(())
}
