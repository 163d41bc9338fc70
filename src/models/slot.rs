//! Weekly slot model.
//!
//! A slot is an atomic (day, time range) unit of the teaching week.
//! The universe of slots is fixed per deployment and read-only during
//! timetable generation.
//!
//! # Time Model
//! Slots carry a display time range (e.g. `"09:00-10:30"`) rather than
//! absolute timestamps. Two slots never overlap by construction; the engine
//! treats slot identifiers as opaque, mutually exclusive units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the teaching week (Monday to Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Full English day name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown weekday '{s}'"))
    }
}

/// A weekly time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique slot identifier (e.g. `"MON-1"`).
    pub id: String,
    /// Day of the week.
    pub day: Weekday,
    /// Display time range (e.g. `"09:00-10:30"`).
    pub time: String,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(id: impl Into<String>, day: Weekday, time: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            day,
            time: time.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_parse() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Friday".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Funday".parse::<Weekday>().is_err());
        assert!("Sunday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_serde_names() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");
        let day: Weekday = serde_json::from_str("\"Saturday\"").unwrap();
        assert_eq!(day, Weekday::Saturday);
        assert!(serde_json::from_str::<Weekday>("\"Sunday\"").is_err());
    }

    #[test]
    fn test_slot_new() {
        let s = Slot::new("MON-1", Weekday::Monday, "09:00-10:30");
        assert_eq!(s.id, "MON-1");
        assert_eq!(s.day, Weekday::Monday);
        assert_eq!(s.day.to_string(), "Monday");
    }
}
