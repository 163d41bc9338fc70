//! Room model.
//!
//! Rooms are read-only reference data: a type that determines which
//! sessions they can host, and the set of slots in which they are free.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room classification.
///
/// Serialized as a lowercase string. Unknown names round-trip through
/// `Custom` so catalogs may introduce site-specific room kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    /// General lecture room.
    Classroom,
    /// Small discussion room.
    Seminar,
    /// Laboratory or computer room.
    Lab,
    /// Off-site or outdoor location.
    Field,
    /// Site-specific type.
    Custom(String),
}

impl RoomType {
    /// Lowercase name used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            RoomType::Classroom => "classroom",
            RoomType::Seminar => "seminar",
            RoomType::Lab => "lab",
            RoomType::Field => "field",
            RoomType::Custom(name) => name,
        }
    }
}

impl From<String> for RoomType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "classroom" => RoomType::Classroom,
            "seminar" => RoomType::Seminar,
            "lab" => RoomType::Lab,
            "field" => RoomType::Field,
            _ => RoomType::Custom(s),
        }
    }
}

impl From<&str> for RoomType {
    fn from(s: &str) -> Self {
        RoomType::from(s.to_string())
    }
}

impl From<RoomType> for String {
    fn from(t: RoomType) -> Self {
        match t {
            RoomType::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A teaching room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Room classification.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Slot identifiers in which the room can be booked.
    #[serde(default)]
    pub availability: Vec<String>,
}

impl Room {
    /// Creates a room with no availability.
    pub fn new(id: impl Into<String>, room_type: impl Into<RoomType>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            room_type: room_type.into(),
            availability: Vec::new(),
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the available slots.
    pub fn with_availability<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the room can be booked in the given slot.
    pub fn is_available_in(&self, slot_id: &str) -> bool {
        self.availability.iter().any(|s| s == slot_id)
    }
}
