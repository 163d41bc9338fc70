//! Slot-level constraint predicates.
//!
//! Day preference and daily cap decide whether a candidate slot is worth
//! trying at all. Faculty and room fit are checked during selection
//! (see [`selection`](super::selection)).

use super::UsageTracker;
use crate::models::{Constraints, Slot};

/// True when no preferred days are set or the slot falls on one of them.
pub fn respects_preferred_days(slot: &Slot, constraints: &Constraints) -> bool {
    constraints.preferred_days.is_empty() || constraints.preferred_days.contains(&slot.day)
}

/// True when no daily cap is set or the slot's day is still below it.
///
/// A cap of 0 counts as unset.
pub fn within_daily_cap(slot: &Slot, constraints: &Constraints, usage: &UsageTracker) -> bool {
    match constraints.max_sessions_per_day {
        None | Some(0) => true,
        Some(cap) => usage.sessions_on(slot.day) < u32::from(cap),
    }
}

/// Both slot-level predicates.
pub fn slot_is_viable(slot: &Slot, constraints: &Constraints, usage: &UsageTracker) -> bool {
    respects_preferred_days(slot, constraints) && within_daily_cap(slot, constraints, usage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;
    use crate::scheduler::context::Booking;

    fn monday() -> Slot {
        Slot::new("MON-1", Weekday::Monday, "09:00")
    }

    fn book_monday(usage: &mut UsageTracker, slot_id: &str) {
        usage.commit(Booking {
            slot_id,
            day: Weekday::Monday,
            faculty_id: "F",
            room_id: "R",
            credits: 1,
        });
    }

    #[test]
    fn test_preferred_days() {
        let s = monday();
        assert!(respects_preferred_days(&s, &Constraints::default()));
        let c = Constraints::new().with_preferred_days([Weekday::Monday, Weekday::Friday]);
        assert!(respects_preferred_days(&s, &c));
        let c = Constraints::new().with_preferred_days([Weekday::Tuesday]);
        assert!(!respects_preferred_days(&s, &c));
    }

    #[test]
    fn test_daily_cap_strictly_less() {
        let s = monday();
        let c = Constraints::new().with_max_sessions_per_day(2);
        let mut usage = UsageTracker::new();
        assert!(within_daily_cap(&s, &c, &usage));
        book_monday(&mut usage, "MON-2");
        assert!(within_daily_cap(&s, &c, &usage));
        book_monday(&mut usage, "MON-3");
        assert!(!within_daily_cap(&s, &c, &usage));
        assert!(within_daily_cap(&s, &Constraints::default(), &usage));
    }

    #[test]
    fn test_zero_cap_is_unconstrained() {
        let s = monday();
        let c = Constraints::new().with_max_sessions_per_day(0);
        let mut usage = UsageTracker::new();
        assert!(within_daily_cap(&s, &c, &usage));
        book_monday(&mut usage, "MON-2");
        assert!(within_daily_cap(&s, &c, &usage));
    }

    #[test]
    fn test_slot_is_viable_combines() {
        let s = monday();
        let usage = UsageTracker::new();
        let c = Constraints::new()
            .with_preferred_days([Weekday::Tuesday])
            .with_max_sessions_per_day(4);
        assert!(!slot_is_viable(&s, &c, &usage));
    }
}
