//! # Design Patterns & SOLID Principles
//!
//! Each module shows one pattern or principle three ways: the version that
//! violates it, the fixed version, and (where it reads naturally) a
//! closure-based functional rewrite.
//!
//! ## Patterns Covered
//!
//! 1. **Creational**
//!    - [`builder`]: consuming builder and options struct with defaults
//!    - [`singleton`]: a process-wide logger versus an injected one
//!
//! 2. **Behavioral**
//!    - [`command`]: commands with undo and a history-keeping calculator
//!    - [`null_object`]: a "Guest" stand-in instead of `Option` checks
//!
//! 3. **Structural**
//!    - [`facade`]: one function in front of URL assembly and JSON decoding
//!
//! 4. **SOLID**
//!    - [`single_responsibility`]: calorie tracking split from logging
//!    - [`open_closed`]: quiz rendering through a trait, not a type tag
//!    - [`liskov`]: rectangles, squares and birds
//!    - [`interface_segregation`]: small capability traits for game entities
//!    - [`dependency_inversion`]: a store that only knows about payments
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin builder_pattern
//! cargo run --bin command_pattern
//! RUST_LOG=design_patterns=debug cargo run --bin singleton_pattern
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod dependency_inversion;
pub mod error;
pub mod facade;
pub mod interface_segregation;
pub mod liskov;
pub mod logger;
pub mod null_object;
pub mod open_closed;
pub mod single_responsibility;
pub mod singleton;

pub use config::CatalogConfig;
pub use error::{PatternError, Result};
pub use logger::FancyLogger;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber used by every demo binary.
///
/// Honors `RUST_LOG`; without it only warnings from this crate are shown so
/// the narrated output stays readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("design_patterns=warn"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Prints a section banner the way every demo separates its parts.
pub fn banner(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}
