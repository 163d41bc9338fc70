//! Candidate slot ordering.
//!
//! The order in which slots are tried is the engine's tie-break policy:
//! a course's preferred slots come first in their declared order, then the
//! remaining catalog slots in catalog order. Avoided slots are dropped and
//! duplicates collapse to their first occurrence.

use std::collections::HashSet;

use crate::models::{Constraints, CourseDefinition, Slot};

/// Returns the ordered, de-duplicated slot ids to try for a course.
///
/// Preferred slot ids are kept even when they do not name a catalog slot;
/// the assignment step skips unknown ids.
pub fn candidate_slots<'a>(
    course: &'a CourseDefinition,
    slots: &'a [Slot],
    constraints: &Constraints,
) -> Vec<&'a str> {
    let avoid: HashSet<&str> = constraints.avoid_slots.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    course
        .preferred_slots
        .iter()
        .map(String::as_str)
        .chain(slots.iter().map(|s| s.id.as_str()))
        .filter(|id| seen.insert(*id))
        .filter(|id| !avoid.contains(id))
        .collect()
}
