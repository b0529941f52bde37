//! Singleton pattern: one logger for the whole program.
//!
//! [`shared_logger`] is the classic process-wide instance, reachable from
//! anywhere and impossible to replace. The `*_use` functions take the logger
//! as a parameter instead, so the caller decides which instance they share
//! and tests can hand in a fresh one.

use crate::logger::FancyLogger;
use lazy_static::lazy_static;

lazy_static! {
    static ref SHARED_LOGGER: FancyLogger = FancyLogger::new();
}

/// Created on first use; every caller in the process gets the same one.
pub fn shared_logger() -> &'static FancyLogger {
    &SHARED_LOGGER
}

pub fn first_use(logger: &FancyLogger) {
    logger.print_log_count();
    logger.log("First File");
    logger.print_log_count();
}

pub fn second_use(logger: &FancyLogger) {
    logger.print_log_count();
    logger.log("Second File");
    logger.print_log_count();
}
