use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use u_timetable::catalog::Catalog;
use u_timetable::models::{CourseDefinition, TimetableRequest, Weekday};
use u_timetable::scheduler::{FixedClock, SchedulerConfig, TimetableScheduler};
use u_timetable::synthetic::{SyntheticCatalog, SYNTHETIC_PROGRAM_ID};
use u_timetable::validation::{validate_catalog, validate_timetable};

fn scheduler(exclusive: bool) -> TimetableScheduler {
    let at = Utc.with_ymd_and_hms(2025, 9, 1, 7, 30, 0).unwrap();
    TimetableScheduler::new()
        .with_config(SchedulerConfig::default().with_exclusive_slots(exclusive))
        .with_clock(FixedClock(at))
}

fn selected(catalog: &Catalog, request: &TimetableRequest) -> Vec<CourseDefinition> {
    let program = catalog.program(SYNTHETIC_PROGRAM_ID).unwrap();
    program
        .courses
        .iter()
        .chain(request.electives.iter())
        .map(|id| catalog.course(id).unwrap().clone())
        .collect()
}

fn shape() -> impl Strategy<Value = SyntheticCatalog> {
    (
        any::<u64>(),
        1usize..=6,
        1usize..=6,
        0usize..=8,
        0usize..=6,
        1usize..=15,
        0usize..=5,
        0.0f64..=1.0,
    )
        .prop_map(
            |(seed, days, slots_per_day, faculty, rooms, core_courses, electives, availability)| {
                SyntheticCatalog {
                    seed,
                    days,
                    slots_per_day,
                    faculty,
                    rooms,
                    core_courses,
                    electives,
                    availability,
                    ..SyntheticCatalog::default()
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_invariants_hold(config in shape(), exclusive in any::<bool>()) {
        let (catalog, request) = config.generate();
        prop_assert!(validate_catalog(&catalog).is_ok());

        let tt = scheduler(exclusive).generate(&catalog, &request).unwrap();
        let courses = selected(&catalog, &request);
        let checked = validate_timetable(&tt, &catalog, &courses);
        prop_assert!(checked.is_ok(), "{:?}", checked);

        prop_assert_eq!(tt.summary.totals.planned_courses, courses.len());
        prop_assert_eq!(
            tt.summary.totals.scheduled_sessions + tt.summary.totals.unscheduled_sessions,
            courses.len()
        );
        for u in &tt.summary.faculty_utilisation {
            prop_assert!((0.0..=1.0).contains(&u.utilisation_rate));
        }
        if exclusive {
            let mut slots: Vec<_> = tt.sessions.iter().map(|s| s.slot_id.as_str()).collect();
            slots.sort_unstable();
            slots.dedup();
            prop_assert_eq!(slots.len(), tt.sessions.len());
        }
    }

    #[test]
    fn prop_soft_constraints_respected(config in shape()) {
        let (catalog, request) = config.generate();
        let tt = scheduler(false).generate(&catalog, &request).unwrap();
        let constraints = &request.constraints;

        let mut per_day: HashMap<Weekday, usize> = HashMap::new();
        for s in &tt.sessions {
            prop_assert!(!constraints.avoid_slots.contains(&s.slot_id));
            if !constraints.preferred_days.is_empty() {
                prop_assert!(constraints.preferred_days.contains(&s.day));
            }
            *per_day.entry(s.day).or_default() += 1;
        }
        if let Some(cap) = constraints.max_sessions_per_day {
            prop_assert!(per_day.values().all(|&n| n <= cap as usize));
        }
    }

    #[test]
    fn prop_generation_is_deterministic(seed in any::<u64>()) {
        let (catalog, request) = SyntheticCatalog::default().with_seed(seed).generate();
        let first = scheduler(false).generate(&catalog, &request).unwrap();
        let second = scheduler(false).generate(&catalog, &request).unwrap();
        prop_assert_eq!(first.to_json_pretty().unwrap(), second.to_json_pretty().unwrap());
    }
}

#[test]
fn test_large_catalog_completes() {
    let config = SyntheticCatalog {
        days: 6,
        slots_per_day: 8,
        faculty: 60,
        rooms: 40,
        core_courses: 200,
        electives: 40,
        ..SyntheticCatalog::default()
    }
    .with_seed(2024);
    let (catalog, request) = config.generate();
    let tt = scheduler(false).generate(&catalog, &request).unwrap();

    assert_eq!(tt.summary.totals.planned_courses, 240);
    assert!(tt.summary.totals.scheduled_sessions > 0);
    assert!(validate_timetable(&tt, &catalog, &selected(&catalog, &request)).is_ok());
}
