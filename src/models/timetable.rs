//! Timetable (solution) model.
//!
//! A timetable is the output of one generation run: the sessions that were
//! placed, the courses that could not be placed, a utilisation summary and
//! run metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Constraints, CourseDefinition, FacultyMember, Room, RoomType, SessionType, Slot, Weekday,
};
use crate::error::Result;

/// Reason recorded for every course the engine could not place.
pub const UNASSIGNED_REASON: &str = "No conflict-free slot available with current constraints";

/// A course placed into a (slot, faculty, room) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub course_id: String,
    pub course_name: String,
    pub credits: u32,
    pub session_type: SessionType,
    pub faculty_id: String,
    pub faculty_name: String,
    pub room_id: String,
    pub room_type: RoomType,
    pub slot_id: String,
    pub day: Weekday,
    pub time: String,
}

impl Session {
    /// Builds a session from its resolved parts.
    pub fn from_parts(
        course: &CourseDefinition,
        faculty: &FacultyMember,
        room: &Room,
        slot: &Slot,
    ) -> Self {
        Self {
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            credits: course.credits,
            session_type: course.session_type.clone(),
            faculty_id: faculty.id.clone(),
            faculty_name: faculty.name.clone(),
            room_id: room.id.clone(),
            room_type: room.room_type.clone(),
            slot_id: slot.id.clone(),
            day: slot.day,
            time: slot.time.clone(),
        }
    }
}

/// A course that could not be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedEntry {
    pub course_id: String,
    pub course_name: String,
    pub reason: String,
}

impl UnassignedEntry {
    /// Creates an entry with the standard placement-failure reason.
    pub fn no_slot(course: &CourseDefinition) -> Self {
        Self {
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            reason: UNASSIGNED_REASON.to_string(),
        }
    }
}

/// Program echo in the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub id: String,
    pub name: String,
    pub semester: u32,
}

/// Course counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Courses selected for scheduling.
    pub planned_courses: usize,
    /// Courses placed.
    pub scheduled_sessions: usize,
    /// Courses left unassigned.
    pub unscheduled_sessions: usize,
}

/// Load used by one faculty member against their capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyUtilisation {
    pub faculty_id: String,
    pub faculty_name: String,
    pub utilised_credits: u32,
    pub capacity_credits: u32,
    /// `utilised / capacity`, clamped to 0.0..=1.0.
    pub utilisation_rate: f64,
}

/// Run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub program: ProgramSummary,
    pub totals: Totals,
    pub faculty_utilisation: Vec<FacultyUtilisation>,
}

/// Run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub generated_at: DateTime<Utc>,
    pub constraints_applied: Constraints,
    /// Non-fatal issues met during the run, in the order they occurred.
    pub warnings: Vec<String>,
}

/// A generated weekly timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    pub sessions: Vec<Session>,
    pub unassigned: Vec<UnassignedEntry>,
    pub summary: Summary,
    pub metadata: Metadata,
}

impl Timetable {
    /// Whether every planned course was placed.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// The session placed for a course, if any.
    pub fn session_for_course(&self, course_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.course_id == course_id)
    }

    /// Sessions taught by a faculty member.
    pub fn sessions_for_faculty(&self, faculty_id: &str) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.faculty_id == faculty_id)
            .collect()
    }

    /// Sessions held in a room.
    pub fn sessions_for_room(&self, room_id: &str) -> Vec<&Session> {
        self.sessions.iter().filter(|s| s.room_id == room_id).collect()
    }

    /// Sessions held on a given day.
    pub fn sessions_on(&self, day: Weekday) -> Vec<&Session> {
        self.sessions.iter().filter(|s| s.day == day).collect()
    }

    /// Utilisation entry for a faculty member.
    pub fn utilisation_for(&self, faculty_id: &str) -> Option<&FacultyUtilisation> {
        self.summary
            .faculty_utilisation
            .iter()
            .find(|u| u.faculty_id == faculty_id)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
