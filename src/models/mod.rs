//! Timetabling domain models.
//!
//! Provides the reference data (programs, courses, faculty, rooms, slots),
//! the generation request, and the generated timetable.
//!
//! # Domain Mappings
//!
//! | Timetabling | Scheduling | Meaning |
//! |-------------|------------|---------|
//! | CourseDefinition | Task | Unit of work to place |
//! | FacultyMember | Resource (Human) | Load-capped teacher |
//! | Room | Resource (Primary) | Typed teaching space |
//! | Slot | TimeWindow | Atomic weekly time unit |
//! | Timetable | Schedule | Generated solution |

mod course;
mod faculty;
mod program;
mod request;
mod room;
mod slot;
mod timetable;

pub use course::{CourseDefinition, SessionType};
pub use faculty::FacultyMember;
pub use program::Program;
pub use request::{Constraints, TimetableRequest};
pub use room::{Room, RoomType};
pub use slot::{Slot, Weekday};
pub use timetable::{
    FacultyUtilisation, Metadata, ProgramSummary, Session, Summary, Timetable, Totals,
    UnassignedEntry, UNASSIGNED_REASON,
};
