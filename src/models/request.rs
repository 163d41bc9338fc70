//! Generation request and scheduling constraints.

use serde::{Deserialize, Serialize};

use super::{CourseDefinition, Weekday};
use crate::error::Result;

/// Soft constraints applied to a single generation run.
///
/// Every field is optional; the default value leaves the run unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Cap on sessions placed on any single day (1..=4). `None` or 0 = no cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sessions_per_day: Option<u8>,
    /// Only slots on these days are used. Empty = every day.
    #[serde(default)]
    pub preferred_days: Vec<Weekday>,
    /// Slot identifiers never used.
    #[serde(default)]
    pub avoid_slots: Vec<String>,
}

impl Constraints {
    /// Lowest accepted daily cap.
    pub const MIN_SESSIONS_PER_DAY: u8 = 1;
    /// Highest accepted daily cap.
    pub const MAX_SESSIONS_PER_DAY: u8 = 4;

    /// Creates an unconstrained set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of sessions per day.
    pub fn with_max_sessions_per_day(mut self, max: u8) -> Self {
        self.max_sessions_per_day = Some(max);
        self
    }

    /// Restricts placement to the given days.
    pub fn with_preferred_days<I>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        self.preferred_days = days.into_iter().collect();
        self
    }

    /// Excludes the given slots.
    pub fn with_avoid_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoid_slots = slots.into_iter().map(Into::into).collect();
        self
    }
}

/// A request to generate one program's weekly timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    /// Program whose core courses are scheduled.
    pub program_id: String,
    /// Semester number (1-based), echoed into the summary.
    pub semester: u32,
    /// Additional course identifiers, scheduled after the core courses.
    #[serde(default)]
    pub electives: Vec<String>,
    /// Request-scoped course definitions; override catalog entries by id.
    #[serde(default)]
    pub custom_courses: Vec<CourseDefinition>,
    /// Soft constraints.
    #[serde(default)]
    pub constraints: Constraints,
}

impl TimetableRequest {
    /// Creates a request with no electives, custom courses or constraints.
    pub fn new(program_id: impl Into<String>, semester: u32) -> Self {
        Self {
            program_id: program_id.into(),
            semester,
            electives: Vec::new(),
            custom_courses: Vec::new(),
            constraints: Constraints::default(),
        }
    }

    /// Adds an elective course identifier.
    pub fn with_elective(mut self, course_id: impl Into<String>) -> Self {
        self.electives.push(course_id.into());
        self
    }

    /// Adds a request-scoped course definition.
    pub fn with_custom_course(mut self, course: CourseDefinition) -> Self {
        self.custom_courses.push(course);
        self
    }

    /// Sets the constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
