//! Single responsibility: a calorie tracker that tracks calories, and
//! nothing else. Reporting the surplus is the logger's job.

use crate::logger::FancyLogger;

pub const SURPLUS_MESSAGE: &str = "Max calories exceeded";

// =============================================================================
// Milestone 1: Tracker that also owns the reporting
// =============================================================================

#[derive(Debug)]
pub struct SelfLoggingCalorieTracker {
    max_calories: u32,
    current_calories: u64,
    warnings: Vec<String>,
}

impl SelfLoggingCalorieTracker {
    pub fn new(max_calories: u32) -> Self {
        Self {
            max_calories,
            current_calories: 0,
            warnings: Vec::new(),
        }
    }

    pub fn track_calories(&mut self, calorie_count: u32) {
        self.current_calories += u64::from(calorie_count);
        if self.current_calories > u64::from(self.max_calories) {
            self.log_calorie_surplus();
        }
    }

    // A second reason for this type to change.
    fn log_calorie_surplus(&mut self) {
        println!("{SURPLUS_MESSAGE}");
        self.warnings.push(SURPLUS_MESSAGE.to_string());
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

// =============================================================================
// Milestone 2: Tracking and logging split apart
// =============================================================================

pub struct CalorieTracker<'a> {
    max_calories: u32,
    current_calories: u64,
    logger: &'a FancyLogger,
}

impl<'a> CalorieTracker<'a> {
    pub fn new(max_calories: u32, logger: &'a FancyLogger) -> Self {
        Self {
            max_calories,
            current_calories: 0,
            logger,
        }
    }

    pub fn track_calories(&mut self, calorie_count: u32) {
        self.current_calories += u64::from(calorie_count);
        tracing::debug!(current = self.current_calories, max = self.max_calories, "calories tracked");
        if self.current_calories > u64::from(self.max_calories) {
            self.logger.log(SURPLUS_MESSAGE);
        }
    }

    pub fn current_calories(&self) -> u64 {
        self.current_calories
    }
}

// =============================================================================
// Milestone 3: Closure-based tracker
// =============================================================================

/// The running total lives only inside the returned closure.
pub fn create_calorie_tracker(max_calories: u32, logger: &FancyLogger) -> impl FnMut(u32) + '_ {
    let mut current_calories: u64 = 0;
    move |calorie_count: u32| {
        current_calories += u64::from(calorie_count);
        if current_calories > u64::from(max_calories) {
            logger.log(SURPLUS_MESSAGE);
        }
    }
}
