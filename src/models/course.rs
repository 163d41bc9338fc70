//! Course model.
//!
//! A course definition is the unit the timetable engine places: it consumes
//! one slot, one faculty member (charged `credits` load units) and one room
//! whose type is compatible with the course's session type.
//!
//! # Room Compatibility
//!
//! | Session type | Accepted room types |
//! |--------------|---------------------|
//! | theory | classroom, seminar |
//! | practical | lab, seminar |
//! | fieldwork | field, seminar |
//! | seminar | seminar |
//! | lab | lab |
//! | project | lab, classroom |
//! | (other) | classroom |
//!
//! An explicit `room_type` on the course wins, then a non-empty
//! `room_types` list, then the table above.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RoomType;

/// Kind of teaching session a course requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionType {
    #[default]
    Theory,
    Practical,
    Fieldwork,
    Seminar,
    Lab,
    Project,
    /// Unrecognized session type. Falls back to classroom rooms.
    Other(String),
}

impl SessionType {
    /// Lowercase name used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            SessionType::Theory => "theory",
            SessionType::Practical => "practical",
            SessionType::Fieldwork => "fieldwork",
            SessionType::Seminar => "seminar",
            SessionType::Lab => "lab",
            SessionType::Project => "project",
            SessionType::Other(name) => name,
        }
    }

    /// Room types this session type may use when the course carries no
    /// explicit override.
    pub fn compatible_room_types(&self) -> Vec<RoomType> {
        match self {
            SessionType::Theory => vec![RoomType::Classroom, RoomType::Seminar],
            SessionType::Practical => vec![RoomType::Lab, RoomType::Seminar],
            SessionType::Fieldwork => vec![RoomType::Field, RoomType::Seminar],
            SessionType::Seminar => vec![RoomType::Seminar],
            SessionType::Lab => vec![RoomType::Lab],
            SessionType::Project => vec![RoomType::Lab, RoomType::Classroom],
            // TODO: decide whether unknown session types should be rejected by validation instead
            SessionType::Other(_) => vec![RoomType::Classroom],
        }
    }
}

impl From<String> for SessionType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "theory" => SessionType::Theory,
            "practical" => SessionType::Practical,
            "fieldwork" => SessionType::Fieldwork,
            "seminar" => SessionType::Seminar,
            "lab" => SessionType::Lab,
            "project" => SessionType::Project,
            _ => SessionType::Other(s),
        }
    }
}

impl From<&str> for SessionType {
    fn from(s: &str) -> Self {
        SessionType::from(s.to_string())
    }
}

impl From<SessionType> for String {
    fn from(t: SessionType) -> Self {
        match t {
            SessionType::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_credits() -> u32 {
    1
}

/// A course to be placed in the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDefinition {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Load units charged to the assigned faculty member.
    #[serde(default = "default_credits")]
    pub credits: u32,
    /// Session type.
    #[serde(rename = "type", default)]
    pub session_type: SessionType,
    /// Slots to try first, in order.
    #[serde(default)]
    pub preferred_slots: Vec<String>,
    /// Candidate faculty, in order of preference.
    #[serde(default)]
    pub faculty_pool: Vec<String>,
    /// Single room type override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    /// Multiple room type override (used when `room_type` is absent).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub room_types: Vec<RoomType>,
}

impl CourseDefinition {
    /// Creates a one-credit theory course.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            credits: default_credits(),
            session_type: SessionType::Theory,
            preferred_slots: Vec::new(),
            faculty_pool: Vec::new(),
            room_type: None,
            room_types: Vec::new(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the session type.
    pub fn with_session_type(mut self, session_type: impl Into<SessionType>) -> Self {
        self.session_type = session_type.into();
        self
    }

    /// Sets the preferred slots.
    pub fn with_preferred_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_slots = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the faculty pool.
    pub fn with_faculty_pool<I, S>(mut self, faculty: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.faculty_pool = faculty.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the course to a single room type.
    pub fn with_room_type(mut self, room_type: impl Into<RoomType>) -> Self {
        self.room_type = Some(room_type.into());
        self
    }

    /// Restricts the course to a set of room types.
    pub fn with_room_types<I, T>(mut self, room_types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RoomType>,
    {
        self.room_types = room_types.into_iter().map(Into::into).collect();
        self
    }

    /// Room types this course may be placed in.
    pub fn accepted_room_types(&self) -> Vec<RoomType> {
        if let Some(rt) = &self.room_type {
            return vec![rt.clone()];
        }
        if !self.room_types.is_empty() {
            return self.room_types.clone();
        }
        self.session_type.compatible_room_types()
    }

    /// Whether a room of the given type can host this course.
    pub fn accepts_room_type(&self, room_type: &RoomType) -> bool {
        self.accepted_room_types().contains(room_type)
    }
}
