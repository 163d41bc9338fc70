//! First-fit faculty and room selection.
//!
//! Both selectors are read-only against the [`UsageTracker`]: they return
//! the first qualifying candidate and leave booking to the caller, which
//! commits faculty, room and day together only when a course is placed.

use tracing::warn;

use super::{UsageTracker, WarningLog};
use crate::catalog::Catalog;
use crate::models::{CourseDefinition, FacultyMember, Room};

/// Message recorded when a course's pool names an unknown faculty id.
pub fn unregistered_faculty_warning(faculty_id: &str, course_id: &str) -> String {
    format!("Faculty '{faculty_id}' listed for course '{course_id}' is not registered.")
}

/// Picks the first faculty member from the course pool, in pool order, who
/// is available in the slot, has `credits` of load left and is not already
/// teaching in that slot.
///
/// Unknown faculty ids are skipped with a warning.
pub fn select_faculty<'c>(
    course: &CourseDefinition,
    slot_id: &str,
    catalog: &'c Catalog,
    usage: &UsageTracker,
    warnings: &mut WarningLog,
) -> Option<&'c FacultyMember> {
    for faculty_id in &course.faculty_pool {
        let Some(member) = catalog.faculty_member(faculty_id) else {
            warn!(faculty_id = %faculty_id, course_id = %course.id, "unregistered faculty in pool");
            warnings.push(unregistered_faculty_warning(faculty_id, &course.id));
            continue;
        };

        if !member.is_available_in(slot_id) {
            continue;
        }
        if !member.can_take(usage.faculty_load(&member.id), course.credits) {
            continue;
        }
        if usage.is_faculty_booked(slot_id, &member.id) {
            continue;
        }
        return Some(member);
    }
    None
}

/// Picks the first room, in catalog order, whose type the course accepts,
/// which is available in the slot and not yet booked there.
pub fn select_room<'c>(
    course: &CourseDefinition,
    slot_id: &str,
    rooms: &'c [Room],
    usage: &UsageTracker,
) -> Option<&'c Room> {
    let accepted = course.accepted_room_types();
    rooms.iter().find(|room| {
        accepted.contains(&room.room_type)
            && room.is_available_in(slot_id)
            && !usage.is_room_booked(slot_id, &room.id)
    })
}
