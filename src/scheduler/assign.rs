//! Per-course assignment.
//!
//! # Algorithm
//!
//! 1. Build the candidate slot sequence (preferred, then catalog order).
//! 2. For each slot: skip unknown ids, occupied slots (exclusive mode only)
//!    and slots failing the day-preference or daily-cap predicate.
//! 3. Select the first fitting faculty member, then the first fitting room.
//! 4. On the first slot where both are found, commit the booking and stop.
//! 5. If the sequence is exhausted, the course is unassigned.
//!
//! Greedy and non-backtracking: earlier placements are never revisited.
//!
//! # Complexity
//! O(s * (p + r)) per course where s=slots, p=faculty pool size, r=rooms.

use tracing::debug;

use super::candidates::candidate_slots;
use super::constraints::slot_is_viable;
use super::context::Booking;
use super::selection::{select_faculty, select_room};
use super::{UsageTracker, WarningLog};
use crate::catalog::Catalog;
use crate::models::{Constraints, CourseDefinition, Session, UnassignedEntry};

/// Result of placing one course.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Scheduled(Session),
    Unassigned(UnassignedEntry),
}

impl Placement {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Placement::Scheduled(_))
    }
}

/// Inputs shared by every course of one run.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentScope<'a> {
    pub catalog: &'a Catalog,
    pub constraints: &'a Constraints,
    pub exclusive_slots: bool,
}

/// Places one course, updating `usage` on success.
pub fn assign_course(
    course: &CourseDefinition,
    scope: AssignmentScope<'_>,
    usage: &mut UsageTracker,
    warnings: &mut WarningLog,
) -> Placement {
    let catalog = scope.catalog;

    for slot_id in candidate_slots(course, catalog.slots(), scope.constraints) {
        let Some(slot) = catalog.slot(slot_id) else {
            continue;
        };
        if scope.exclusive_slots && usage.is_slot_occupied(slot_id) {
            continue;
        }
        if !slot_is_viable(slot, scope.constraints, usage) {
            continue;
        }

        let Some(faculty) = select_faculty(course, slot_id, catalog, usage, warnings) else {
            continue;
        };
        let Some(room) = select_room(course, slot_id, catalog.rooms(), usage) else {
            continue;
        };

        usage.commit(Booking {
            slot_id: &slot.id,
            day: slot.day,
            faculty_id: &faculty.id,
            room_id: &room.id,
            credits: course.credits,
        });
        debug!(
            course_id = %course.id,
            slot_id = %slot.id,
            faculty_id = %faculty.id,
            room_id = %room.id,
            "course placed"
        );
        return Placement::Scheduled(Session::from_parts(course, faculty, room, slot));
    }

    debug!(course_id = %course.id, "no viable slot");
    Placement::Unassigned(UnassignedEntry::no_slot(course))
}
