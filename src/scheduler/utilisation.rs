//! Faculty utilisation summary.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Utilised credits | Sum of credits of sessions taught |
//! | Capacity credits | Faculty `max_load` |
//! | Utilisation rate | min(1, utilised / capacity); 0 when capacity is 0 |

use super::UsageTracker;
use crate::models::{FacultyMember, FacultyUtilisation};

/// Utilisation of every registered faculty member, in catalog order.
///
/// Members without sessions are included at 0%.
pub fn faculty_utilisation(
    faculty: &[FacultyMember],
    usage: &UsageTracker,
) -> Vec<FacultyUtilisation> {
    faculty
        .iter()
        .map(|member| {
            let used = usage.faculty_load(&member.id);
            FacultyUtilisation {
                faculty_id: member.id.clone(),
                faculty_name: member.name.clone(),
                utilised_credits: used,
                capacity_credits: member.max_load,
                utilisation_rate: utilisation_rate(used, member.max_load),
            }
        })
        .collect()
}

/// `used / capacity`, clamped to 0.0..=1.0.
pub fn utilisation_rate(used: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    (f64::from(used) / f64::from(capacity)).min(1.0)
}

/// Mean utilisation rate across the given entries (0.0 when empty).
pub fn average_rate(entries: &[FacultyUtilisation]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(|e| e.utilisation_rate).sum::<f64>() / entries.len() as f64
}
