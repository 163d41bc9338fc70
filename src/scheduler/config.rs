//! Scheduler configuration and clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::Result;

/// Engine-wide options for [`TimetableScheduler`](super::TimetableScheduler).
///
/// # Examples
///
/// ```
/// use u_timetable::scheduler::SchedulerConfig;
///
/// let config = SchedulerConfig::default()
///     .with_exclusive_slots(true)
///     .with_deduplicate_warnings(true);
/// assert!(config.exclusive_slots);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    /// Once any course occupies a slot, no later course may use it.
    ///
    /// When `false`, only faculty, room and daily bookkeeping is exclusive
    /// and several courses may share a slot with distinct faculty and rooms.
    pub exclusive_slots: bool,

    /// Record an unregistered-faculty warning once per (faculty, course)
    /// pair instead of once per candidate slot examined. Off by default.
    pub deduplicate_warnings: bool,

    /// Run [`validate_request`](crate::validation::validate_request) before
    /// resolving the program.
    pub validate_request: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            exclusive_slots: false,
            deduplicate_warnings: false,
            validate_request: true,
        }
    }
}

impl SchedulerConfig {
    pub fn with_exclusive_slots(mut self, exclusive: bool) -> Self {
        self.exclusive_slots = exclusive;
        self
    }

    pub fn with_deduplicate_warnings(mut self, dedupe: bool) -> Self {
        self.deduplicate_warnings = dedupe;
        self
    }

    pub fn with_validate_request(mut self, validate: bool) -> Self {
        self.validate_request = validate;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Source of the `generatedAt` timestamp.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant, for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
