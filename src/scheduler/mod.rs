//! Greedy timetable generation.
//!
//! Places each selected course into at most one (slot, faculty, room)
//! triple while honoring hard constraints (no double-booking, faculty load
//! caps, availability windows, room-type compatibility) and the request's
//! soft constraints (preferred slots and days, daily cap, avoided slots).
//!
//! # Algorithm
//!
//! A single-pass constructive heuristic: courses are taken in union order,
//! candidate slots in preference-then-catalog order, faculty and rooms
//! first-fit. Nothing is backtracked; courses that find no slot are
//! reported as unassigned. It does not search for an optimal assignment.
//!
//! # Usage
//!
//! ```
//! use u_timetable::catalog::Catalog;
//! use u_timetable::models::TimetableRequest;
//! use u_timetable::scheduler::{SchedulerConfig, TimetableScheduler};
//!
//! let scheduler = TimetableScheduler::new()
//!     .with_config(SchedulerConfig::default().with_exclusive_slots(true));
//! let result = scheduler.generate(&Catalog::new(), &TimetableRequest::new("P1", 1));
//! assert!(result.is_err()); // unknown program
//! ```

mod assign;
mod candidates;
mod config;
pub mod constraints;
pub(crate) mod context;
mod generator;
mod resolve;
mod selection;
mod utilisation;

pub use assign::{assign_course, AssignmentScope, Placement};
pub use candidates::candidate_slots;
pub use config::{Clock, FixedClock, SchedulerConfig, SystemClock};
pub use context::{Booking, UsageTracker, WarningLog};
pub use generator::{generate, select_courses, GenerationPhase, TimetableScheduler};
pub use resolve::CoursePool;
pub use selection::{select_faculty, select_room};
pub use utilisation::{average_rate, faculty_utilisation, utilisation_rate};
