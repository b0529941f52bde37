//! Single responsibility demo.
//!
//! Run with: cargo run --bin single_responsibility

use anyhow::{Context, Result};
use design_patterns::banner;
use design_patterns::single_responsibility::{
    create_calorie_tracker, CalorieTracker, SelfLoggingCalorieTracker,
};
use design_patterns::{CatalogConfig, FancyLogger};

fn main() -> Result<()> {
    design_patterns::init_tracing();
    let config = CatalogConfig::load().context("failed to load catalog config")?;
    let logger = FancyLogger::with_prefix(&config.logger_prefix);

    banner("Tracker Logs For Itself");
    let mut tracker = SelfLoggingCalorieTracker::new(config.max_calories);
    tracker.track_calories(500);
    tracker.track_calories(1000);
    tracker.track_calories(700);

    banner("Tracker Delegates To A Logger");
    let mut tracker = CalorieTracker::new(config.max_calories, &logger);
    tracker.track_calories(500);
    tracker.track_calories(1000);
    tracker.track_calories(700);

    banner("Closure Tracker");
    let mut track = create_calorie_tracker(config.max_calories, &logger);
    track(500);
    track(1000);
    track(700);

    logger.print_log_count();
    Ok(())
}
