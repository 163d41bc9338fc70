//! Faculty model.
//!
//! Faculty members are shared, read-only reference data. Load consumed
//! during a generation run is tracked per request by the scheduler and is
//! never written back onto the entity.

use serde::{Deserialize, Serialize};

/// A faculty member who can teach courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyMember {
    /// Unique faculty identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Slot identifiers in which this member can teach.
    #[serde(default)]
    pub availability: Vec<String>,
    /// Teaching capacity in credit units.
    pub max_load: u32,
}

impl FacultyMember {
    /// Creates a faculty member with the given capacity and no availability.
    pub fn new(id: impl Into<String>, max_load: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            availability: Vec::new(),
            max_load,
        }
    }

    /// Sets the display name.
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

    /// Whether this member can teach in the given slot.
    pub fn is_available_in(&self, slot_id: &str) -> bool {
        self.availability.iter().any(|s| s == slot_id)
    }

    /// Whether `credits` more units fit on top of `used`.
    #[inline]
    pub fn can_take(&self, used: u32, credits: u32) -> bool {
        used.saturating_add(credits) <= self.max_load
    }
}
