//! Integrity checks for catalogs, requests and generated timetables.
//!
//! Every check collects all issues instead of stopping at the first.
//!
//! - [`validate_catalog`]: duplicate ids, dangling slot/course references,
//!   zero credits or capacity.
//! - [`validate_request`]: the request shape accepted by the generator.
//! - [`validate_timetable`]: the output invariants (no double-booking,
//!   one session per course, load caps, room compatibility, availability,
//!   and every selected course reported exactly once).
//!
//! Faculty pools naming unregistered faculty are not catalog errors; the
//! generator reports them as warnings at run time.

use std::collections::{HashMap, HashSet};

use crate::catalog::Catalog;
use crate::models::{Constraints, CourseDefinition, Timetable, TimetableRequest};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An availability or preference list names an unknown slot.
    UnknownSlot,
    /// A program names an unknown course.
    UnknownCourse,
    /// A course has zero credits.
    InvalidCredits,
    /// A faculty member has zero capacity.
    InvalidCapacity,
    /// A request field is missing or out of range.
    InvalidField,
    /// A faculty member or room teaches twice in one slot.
    DoubleBooking,
    /// A course appears more than once in the output.
    DuplicateCourse,
    /// A faculty member exceeds their load cap.
    LoadExceeded,
    /// A session sits in a room type its course does not accept.
    RoomTypeMismatch,
    /// A session uses a slot its faculty or room is not available in.
    Unavailable,
    /// A selected course is missing from, or extra in, the output.
    CoverageMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_duplicates<'a>(
    entity: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
}

/// Validates catalog reference data.
///
/// Checks:
/// 1. No duplicate program, course, faculty, room or slot IDs
/// 2. Faculty and room availability only names known slots
/// 3. Course preferred slots only name known slots
/// 4. Program course lists only name known courses
/// 5. Courses have at least one credit; faculty at least one load unit
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    check_duplicates("program", catalog.programs().iter().map(|p| p.id.as_str()), &mut errors);
    check_duplicates("course", catalog.courses().iter().map(|c| c.id.as_str()), &mut errors);
    check_duplicates("faculty", catalog.faculty().iter().map(|f| f.id.as_str()), &mut errors);
    check_duplicates("room", catalog.rooms().iter().map(|r| r.id.as_str()), &mut errors);
    check_duplicates("slot", catalog.slots().iter().map(|s| s.id.as_str()), &mut errors);

    let unknown_slot = |owner: &str, slot_id: &str| {
        ValidationError::new(
            ValidationErrorKind::UnknownSlot,
            format!("{owner} references unknown slot '{slot_id}'"),
        )
    };

    for member in catalog.faculty() {
        if member.max_load == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Faculty '{}' has zero max load", member.id),
            ));
        }
        for slot_id in &member.availability {
            if catalog.slot(slot_id).is_none() {
                errors.push(unknown_slot(&format!("Faculty '{}'", member.id), slot_id));
            }
        }
    }

    for room in catalog.rooms() {
        for slot_id in &room.availability {
            if catalog.slot(slot_id).is_none() {
                errors.push(unknown_slot(&format!("Room '{}'", room.id), slot_id));
            }
        }
    }

    for course in catalog.courses() {
        check_course(course, catalog, &mut errors);
    }

    for program in catalog.programs() {
        for course_id in &program.courses {
            if catalog.course(course_id).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourse,
                    format!(
                        "Program '{}' references unknown course '{}'",
                        program.id, course_id
                    ),
                ));
            }
        }
    }

    finish(errors)
}

fn check_course(course: &CourseDefinition, catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    if course.credits == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCredits,
            format!("Course '{}' has zero credits", course.id),
        ));
    }
    for slot_id in &course.preferred_slots {
        if catalog.slot(slot_id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSlot,
                format!("Course '{}' references unknown slot '{}'", course.id, slot_id),
            ));
        }
    }
}

/// Validates a generation request.
///
/// Checks:
/// 1. Program id is non-empty
/// 2. Semester is at least 1
/// 3. `maxSessionsPerDay`, when set, lies in 1..=4
/// 4. Custom courses have a non-empty, unique id and at least one credit
pub fn validate_request(request: &TimetableRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let invalid =
        |message: String| ValidationError::new(ValidationErrorKind::InvalidField, message);

    if request.program_id.trim().is_empty() {
        errors.push(invalid("programId is required".to_string()));
    }
    if request.semester < 1 {
        errors.push(invalid("semester must be at least 1".to_string()));
    }
    if let Some(cap) = request.constraints.max_sessions_per_day {
        let range = Constraints::MIN_SESSIONS_PER_DAY..=Constraints::MAX_SESSIONS_PER_DAY;
        if !range.contains(&cap) {
            errors.push(invalid(format!(
                "maxSessionsPerDay must be between {} and {}, got {cap}",
                Constraints::MIN_SESSIONS_PER_DAY,
                Constraints::MAX_SESSIONS_PER_DAY
            )));
        }
    }

    let mut custom_ids = HashSet::new();
    for course in &request.custom_courses {
        if course.id.trim().is_empty() {
            errors.push(invalid("custom course id is required".to_string()));
            continue;
        }
        if !custom_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate custom course ID: {}", course.id),
            ));
        }
        if course.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCredits,
                format!("Custom course '{}' has zero credits", course.id),
            ));
        }
    }

    finish(errors)
}

/// Checks a generated timetable against the catalog and the resolved
/// courses that were selected for it.
///
/// Checks:
/// 1. No faculty member teaches twice in one slot
/// 2. No room is booked twice in one slot
/// 3. No course has more than one session
/// 4. No faculty member exceeds their max load
/// 5. Every session's room type is accepted by its course
/// 6. Every session's slot is in its faculty's and room's availability
/// 7. Every selected course appears exactly once across sessions and
///    unassigned entries
pub fn validate_timetable(
    timetable: &Timetable,
    catalog: &Catalog,
    selected: &[CourseDefinition],
) -> ValidationResult {
    let mut errors = Vec::new();
    let courses: HashMap<&str, &CourseDefinition> =
        selected.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut faculty_slots = HashSet::new();
    let mut room_slots = HashSet::new();
    let mut load: HashMap<&str, u32> = HashMap::new();

    for s in &timetable.sessions {
        if !faculty_slots.insert((s.slot_id.as_str(), s.faculty_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DoubleBooking,
                format!("Faculty '{}' double-booked in slot '{}'", s.faculty_id, s.slot_id),
            ));
        }
        if !room_slots.insert((s.slot_id.as_str(), s.room_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DoubleBooking,
                format!("Room '{}' double-booked in slot '{}'", s.room_id, s.slot_id),
            ));
        }
        *load.entry(s.faculty_id.as_str()).or_insert(0) += s.credits;

        if let Some(course) = courses.get(s.course_id.as_str()) {
            if !course.accepts_room_type(&s.room_type) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RoomTypeMismatch,
                    format!(
                        "Course '{}' placed in {} room '{}'",
                        s.course_id, s.room_type, s.room_id
                    ),
                ));
            }
        }

        let faculty_ok = catalog
            .faculty_member(&s.faculty_id)
            .is_some_and(|f| f.is_available_in(&s.slot_id));
        let room_ok = catalog
            .room(&s.room_id)
            .is_some_and(|r| r.is_available_in(&s.slot_id));
        if !faculty_ok || !room_ok {
            errors.push(ValidationError::new(
                ValidationErrorKind::Unavailable,
                format!(
                    "Course '{}' uses slot '{}' outside faculty or room availability",
                    s.course_id, s.slot_id
                ),
            ));
        }
    }

    for (faculty_id, used) in &load {
        if let Some(member) = catalog.faculty_member(faculty_id) {
            if *used > member.max_load {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LoadExceeded,
                    format!(
                        "Faculty '{}' carries {} credits over a max load of {}",
                        faculty_id, used, member.max_load
                    ),
                ));
            }
        }
    }

    let mut reported: HashMap<&str, usize> = HashMap::new();
    for id in timetable
        .sessions
        .iter()
        .map(|s| s.course_id.as_str())
        .chain(timetable.unassigned.iter().map(|u| u.course_id.as_str()))
    {
        *reported.entry(id).or_insert(0) += 1;
    }
    for (id, count) in &reported {
        if *count > 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!("Course '{id}' reported {count} times"),
            ));
        }
        if !courses.contains_key(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CoverageMismatch,
                format!("Course '{id}' was not selected"),
            ));
        }
    }
    for course in selected {
        if !reported.contains_key(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CoverageMismatch,
                format!("Course '{}' is neither scheduled nor unassigned", course.id),
            ));
        }
    }

    finish(errors)
}
