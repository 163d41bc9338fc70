//! Request-scoped usage trackers.

use std::collections::{HashMap, HashSet};

use crate::models::Weekday;

/// Resource usage accumulated during a single generation run.
///
/// Created empty at the start of a request and dropped at its end. Never
/// share one tracker between concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    /// Faculty booked per slot (slot_id → faculty ids).
    slot_faculty: HashMap<String, HashSet<String>>,
    /// Rooms booked per slot (slot_id → room ids).
    slot_room: HashMap<String, HashSet<String>>,
    /// Credits consumed per faculty member.
    faculty_load: HashMap<String, u32>,
    /// Sessions placed per day.
    day_usage: HashMap<Weekday, u32>,
    /// Slots holding at least one session.
    occupied_slots: HashSet<String>,
}

/// A successful placement, applied to the tracker in one step.
#[derive(Debug, Clone, Copy)]
pub struct Booking<'a> {
    pub slot_id: &'a str,
    pub day: Weekday,
    pub faculty_id: &'a str,
    pub room_id: &'a str,
    pub credits: u32,
}

impl UsageTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits already charged to a faculty member.
    pub fn faculty_load(&self, faculty_id: &str) -> u32 {
        self.faculty_load.get(faculty_id).copied().unwrap_or(0)
    }

    /// Whether the faculty member already teaches in the slot.
    pub fn is_faculty_booked(&self, slot_id: &str, faculty_id: &str) -> bool {
        self.slot_faculty
            .get(slot_id)
            .is_some_and(|set| set.contains(faculty_id))
    }

    /// Whether the room is already booked in the slot.
    pub fn is_room_booked(&self, slot_id: &str, room_id: &str) -> bool {
        self.slot_room
            .get(slot_id)
            .is_some_and(|set| set.contains(room_id))
    }

    /// Sessions already placed on a day.
    pub fn sessions_on(&self, day: Weekday) -> u32 {
        self.day_usage.get(&day).copied().unwrap_or(0)
    }

    /// Whether any session occupies the slot.
    pub fn is_slot_occupied(&self, slot_id: &str) -> bool {
        self.occupied_slots.contains(slot_id)
    }

    /// Applies a placement: books faculty and room in the slot, charges the
    /// faculty load and counts the session against its day.
    pub fn commit(&mut self, booking: Booking<'_>) {
        self.slot_faculty
            .entry(booking.slot_id.to_string())
            .or_default()
            .insert(booking.faculty_id.to_string());
        self.slot_room
            .entry(booking.slot_id.to_string())
            .or_default()
            .insert(booking.room_id.to_string());
        *self
            .faculty_load
            .entry(booking.faculty_id.to_string())
            .or_insert(0) += booking.credits;
        *self.day_usage.entry(booking.day).or_insert(0) += 1;
        self.occupied_slots.insert(booking.slot_id.to_string());
    }
}

/// Ordered log of non-fatal warnings for one run.
#[derive(Debug, Clone, Default)]
pub struct WarningLog {
    entries: Vec<String>,
    seen: HashSet<String>,
    deduplicate: bool,
}

impl WarningLog {
    /// Creates a log; with `deduplicate`, repeated messages are kept once.
    pub fn new(deduplicate: bool) -> Self {
        Self {
            entries: Vec::new(),
            seen: HashSet::new(),
            deduplicate,
        }
    }

    pub fn push(&mut self, message: String) {
        if self.deduplicate && !self.seen.insert(message.clone()) {
            return;
        }
        self.entries.push(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_updates_all_trackers() {
        let mut t = UsageTracker::new();
        t.commit(Booking {
            slot_id: "MON-1",
            day: Weekday::Monday,
            faculty_id: "F1",
            room_id: "R1",
            credits: 3,
        });

        assert!(t.is_faculty_booked("MON-1", "F1"));
        assert!(!t.is_faculty_booked("MON-2", "F1"));
        assert!(t.is_room_booked("MON-1", "R1"));
        assert!(!t.is_room_booked("MON-1", "R2"));
        assert_eq!(t.faculty_load("F1"), 3);
        assert_eq!(t.faculty_load("F2"), 0);
        assert_eq!(t.sessions_on(Weekday::Monday), 1);
        assert_eq!(t.sessions_on(Weekday::Tuesday), 0);
        assert!(t.is_slot_occupied("MON-1"));
    }

    #[test]
    fn test_load_accumulates() {
        let mut t = UsageTracker::new();
        for (slot, credits) in [("MON-1", 2), ("TUE-1", 1)] {
            t.commit(Booking {
                slot_id: slot,
                day: Weekday::Monday,
                faculty_id: "F1",
                room_id: "R1",
                credits,
            });
        }
        assert_eq!(t.faculty_load("F1"), 3);
        assert_eq!(t.sessions_on(Weekday::Monday), 2);
    }

    #[test]
    fn test_warning_log_dedupe() {
        let mut log = WarningLog::new(true);
        log.push("a".into());
        log.push("b".into());
        log.push("a".into());
        assert_eq!(log.into_vec(), vec!["a", "b"]);

        let mut log = WarningLog::new(false);
        log.push("a".into());
        log.push("a".into());
        assert_eq!(log.len(), 2);
    }
}
