//! Academic timetable generation.
//!
//! Turns a program's courses (plus requested electives and ad-hoc custom
//! courses) into a weekly timetable: each course gets at most one time slot,
//! faculty member and room. Placement is greedy and first-fit, so the result
//! depends on course order and is not globally optimal.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Slot`, `Room`, `FacultyMember`,
//!   `CourseDefinition`, `Program`, `TimetableRequest`, `Timetable`
//! - **`catalog`**: Read-only reference data with id lookups
//! - **`scheduler`**: The generator, its phases and configuration
//! - **`validation`**: Input integrity checks and timetable invariant checks
//! - **`scenario`**: Saved timetable variants
//! - **`synthetic`**: Seeded random catalogs for testing
//!
//! # Example
//!
//! ```
//! use u_timetable::catalog::Catalog;
//! use u_timetable::models::*;
//! use u_timetable::scheduler::TimetableScheduler;
//!
//! let catalog = Catalog::new()
//!     .with_slot(Slot::new("MON-1", Weekday::Monday, "09:00-10:00"))
//!     .with_faculty(FacultyMember::new("F1", 6).with_availability(["MON-1"]))
//!     .with_room(Room::new("R1", RoomType::Classroom).with_availability(["MON-1"]))
//!     .with_course(CourseDefinition::new("CS101").with_credits(3).with_faculty_pool(["F1"]))
//!     .with_program(Program::new("BSC").with_course("CS101"));
//!
//! let timetable = TimetableScheduler::new()
//!     .generate(&catalog, &TimetableRequest::new("BSC", 1))
//!     .unwrap();
//! assert_eq!(timetable.sessions.len(), 1);
//! assert_eq!(timetable.sessions[0].room_id, "R1");
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

pub mod catalog;
pub mod error;
pub mod models;
pub mod scenario;
pub mod scheduler;
pub mod synthetic;
pub mod validation;

pub use error::{Result, TimetableError};
