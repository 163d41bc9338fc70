//! Request orchestration.
//!
//! # Phases
//!
//! `ResolvingProgram → ResolvingCourses → Scheduling → Summarising → Done`
//!
//! Request validation and the first two phases may end in `Failed`
//! (`Validation`, `ProgramNotFound`, `InvalidRequest`);
//! once scheduling starts the run always produces a (possibly partial)
//! timetable, with placement failures and unregistered references reported
//! in `unassigned` and `metadata.warnings`.
//!
//! # Ordering
//! Courses are scheduled in union order: the program's core courses in
//! program order, then electives in request order, each id once. The greedy
//! engine is order-sensitive: an earlier course may take the only resource
//! a later course could have used.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::assign::{assign_course, AssignmentScope, Placement};
use super::config::{Clock, SchedulerConfig, SystemClock};
use super::resolve::CoursePool;
use super::utilisation::{average_rate, faculty_utilisation};
use super::{UsageTracker, WarningLog};
use crate::catalog::Catalog;
use crate::error::{Result, TimetableError};
use crate::models::{
    CourseDefinition, Metadata, Program, ProgramSummary, Summary, Timetable, TimetableRequest,
    Totals,
};
use crate::validation::validate_request;

/// Stage of a generation run, reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    ResolvingProgram,
    ResolvingCourses,
    Scheduling,
    Summarising,
    Done,
    /// Terminal; reachable from the two resolving phases only.
    Failed,
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationPhase::ResolvingProgram => "resolving_program",
            GenerationPhase::ResolvingCourses => "resolving_courses",
            GenerationPhase::Scheduling => "scheduling",
            GenerationPhase::Summarising => "summarising",
            GenerationPhase::Done => "done",
            GenerationPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Message recorded for a selected course id that resolves to nothing.
pub fn unresolved_course_warning(course_id: &str) -> String {
    format!("Course '{course_id}' could not be located in the catalog.")
}

/// Greedy timetable generator.
///
/// Holds no per-request state: every call to [`generate`](Self::generate)
/// builds its own usage trackers, so one scheduler (and one catalog) can
/// serve concurrent requests.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::Catalog;
/// use u_timetable::models::*;
/// use u_timetable::scheduler::TimetableScheduler;
///
/// let catalog = Catalog::new()
///     .with_slot(Slot::new("MON-1", Weekday::Monday, "09:00-10:00"))
///     .with_faculty(FacultyMember::new("F1", 6).with_availability(["MON-1"]))
///     .with_room(Room::new("R1", RoomType::Classroom).with_availability(["MON-1"]))
///     .with_course(CourseDefinition::new("C1").with_credits(3).with_faculty_pool(["F1"]))
///     .with_program(Program::new("P1").with_course("C1"));
///
/// let timetable = TimetableScheduler::new()
///     .generate(&catalog, &TimetableRequest::new("P1", 1))
///     .unwrap();
/// assert_eq!(timetable.sessions.len(), 1);
/// assert!(timetable.unassigned.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TimetableScheduler {
    config: SchedulerConfig,
    clock: Arc<dyn Clock>,
}

impl TimetableScheduler {
    /// Creates a scheduler with default configuration and the system clock.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the clock used for `metadata.generatedAt`.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates a timetable for one request.
    ///
    /// # Errors
    /// - [`TimetableError::Validation`] when request validation is enabled
    ///   and the request is malformed.
    /// - [`TimetableError::ProgramNotFound`] for an unknown program id.
    /// - [`TimetableError::InvalidRequest`] when no selected course resolves.
    #[instrument(skip_all, fields(program_id = %request.program_id, semester = request.semester))]
    pub fn generate(&self, catalog: &Catalog, request: &TimetableRequest) -> Result<Timetable> {
        if self.config.validate_request {
            if let Err(errors) = validate_request(request) {
                warn!(
                    phase = %GenerationPhase::Failed,
                    errors = errors.len(),
                    "request validation failed"
                );
                return Err(TimetableError::Validation(errors));
            }
        }

        debug!(phase = %GenerationPhase::ResolvingProgram, "entering phase");
        let Some(program) = catalog.program(&request.program_id) else {
            warn!(phase = %GenerationPhase::Failed, "program not found");
            return Err(TimetableError::ProgramNotFound {
                program_id: request.program_id.clone(),
            });
        };

        debug!(phase = %GenerationPhase::ResolvingCourses, "entering phase");
        let mut warnings = WarningLog::new(self.config.deduplicate_warnings);
        let pool = CoursePool::build(catalog, &request.custom_courses);
        let selected = select_courses(program, &request.electives, &pool, &mut warnings);
        debug!(known = pool.len(), selected = selected.len(), "courses resolved");
        if selected.is_empty() {
            warn!(phase = %GenerationPhase::Failed, "no resolvable courses");
            return Err(TimetableError::InvalidRequest(
                "No valid courses available for timetable generation.".to_string(),
            ));
        }

        debug!(phase = %GenerationPhase::Scheduling, courses = selected.len(), "entering phase");
        let scope = AssignmentScope {
            catalog,
            constraints: &request.constraints,
            exclusive_slots: self.config.exclusive_slots,
        };
        let mut usage = UsageTracker::new();
        let mut sessions = Vec::new();
        let mut unassigned = Vec::new();
        for course in &selected {
            match assign_course(course, scope, &mut usage, &mut warnings) {
                Placement::Scheduled(session) => sessions.push(session),
                Placement::Unassigned(entry) => unassigned.push(entry),
            }
        }

        debug!(phase = %GenerationPhase::Summarising, "entering phase");
        let summary = Summary {
            program: ProgramSummary {
                id: program.id.clone(),
                name: program.name.clone(),
                semester: request.semester,
            },
            totals: Totals {
                planned_courses: selected.len(),
                scheduled_sessions: sessions.len(),
                unscheduled_sessions: unassigned.len(),
            },
            faculty_utilisation: faculty_utilisation(catalog.faculty(), &usage),
        };

        info!(
            phase = %GenerationPhase::Done,
            planned = summary.totals.planned_courses,
            scheduled = summary.totals.scheduled_sessions,
            unassigned = summary.totals.unscheduled_sessions,
            warnings = warnings.len(),
            mean_utilisation = average_rate(&summary.faculty_utilisation),
            "timetable generated"
        );

        Ok(Timetable {
            sessions,
            unassigned,
            summary,
            metadata: Metadata {
                generated_at: self.clock.now(),
                constraints_applied: request.constraints.clone(),
                warnings: warnings.into_vec(),
            },
        })
    }
}

impl Default for TimetableScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Unions core and elective ids (first occurrence wins) and resolves them.
///
/// Unresolved ids are dropped with a warning.
pub fn select_courses<'a>(
    program: &Program,
    electives: &[String],
    pool: &CoursePool<'a>,
    warnings: &mut WarningLog,
) -> Vec<&'a CourseDefinition> {
    let mut seen: HashSet<&str> = HashSet::new();
    program
        .courses
        .iter()
        .chain(electives.iter())
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| {
            let course = pool.get(id);
            if course.is_none() {
                warn!(course_id = %id, "course not found");
                warnings.push(unresolved_course_warning(id));
            }
            course
        })
        .collect()
}

/// Generates a timetable with the default scheduler.
pub fn generate(catalog: &Catalog, request: &TimetableRequest) -> Result<Timetable> {
    TimetableScheduler::new().generate(catalog, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FacultyMember, Room, RoomType, Slot, Weekday};
    use crate::scheduler::FixedClock;
    use chrono::{TimeZone, Utc};

    fn catalog() -> Catalog {
        Catalog::new()
            .with_slot(Slot::new("MON-1", Weekday::Monday, "09:00-10:00"))
            .with_slot(Slot::new("MON-2", Weekday::Monday, "10:00-11:00"))
            .with_faculty(
                FacultyMember::new("F1", 10)
                    .with_name("Dr. A")
                    .with_availability(["MON-1", "MON-2"]),
            )
            .with_faculty(FacultyMember::new("F2", 4).with_name("Dr. B"))
            .with_room(Room::new("R1", RoomType::Classroom).with_availability(["MON-1", "MON-2"]))
            .with_course(
                CourseDefinition::new("C1")
                    .with_name("Algebra")
                    .with_credits(3)
                    .with_faculty_pool(["F1"]),
            )
            .with_course(
                CourseDefinition::new("C2")
                    .with_name("Logic")
                    .with_credits(2)
                    .with_faculty_pool(["F1"]),
            )
            .with_course(
                CourseDefinition::new("E1")
                    .with_name("Elective")
                    .with_credits(1)
                    .with_faculty_pool(["F1"]),
            )
            .with_program(
                Program::new("P1")
                    .with_name("Program One")
                    .with_course("C1")
                    .with_course("C2"),
            )
            .with_program(Program::new("EMPTY").with_course("MISSING"))
    }

    fn scheduler() -> TimetableScheduler {
        TimetableScheduler::new().with_clock(FixedClock(
            Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn test_generate_basic() {
        let cat = catalog();
        let t = scheduler()
            .generate(&cat, &TimetableRequest::new("P1", 2))
            .unwrap();
        assert_eq!(t.sessions.len(), 2);
        assert!(t.unassigned.is_empty());
        assert_eq!(t.summary.program.name, "Program One");
        assert_eq!(t.summary.program.semester, 2);
        assert_eq!(t.summary.totals.planned_courses, 2);
        assert_eq!(t.utilisation_for("F1").unwrap().utilised_credits, 5);
        assert_eq!(t.utilisation_for("F2").unwrap().utilised_credits, 0);
        assert_eq!(
            t.metadata.generated_at,
            Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_unknown_program() {
        let cat = catalog();
        let err = scheduler()
            .generate(&cat, &TimetableRequest::new("NOPE", 1))
            .unwrap_err();
        assert!(matches!(
            err,
            TimetableError::ProgramNotFound { ref program_id } if program_id == "NOPE"
        ));
    }

    #[test]
    fn test_no_resolvable_courses() {
        let cat = catalog();
        let err = scheduler()
            .generate(&cat, &TimetableRequest::new("EMPTY", 1))
            .unwrap_err();
        assert!(matches!(err, TimetableError::InvalidRequest(_)));
    }

    #[test]
    fn test_elective_order_and_dedup() {
        let cat = catalog();
        let req = TimetableRequest::new("P1", 1)
            .with_elective("E1")
            .with_elective("C1")
            .with_elective("GHOST");
        let t = scheduler().generate(&cat, &req).unwrap();
        assert_eq!(t.summary.totals.planned_courses, 3);
        assert_eq!(
            t.metadata.warnings,
            vec!["Course 'GHOST' could not be located in the catalog."]
        );
        // Two slots, one faculty: E1 comes last and finds nothing.
        let ids: Vec<_> = t.sessions.iter().map(|s| s.course_id.as_str()).collect();
        assert_eq!(ids, vec!["C1", "C2"]);
        assert_eq!(t.unassigned[0].course_id, "E1");
    }

    #[test]
    fn test_custom_course_overrides_for_request_only() {
        let cat = catalog();
        let req = TimetableRequest::new("P1", 1).with_custom_course(
            CourseDefinition::new("C1")
                .with_name("Custom")
                .with_credits(1)
                .with_faculty_pool(["F1"]),
        );
        let t = scheduler().generate(&cat, &req).unwrap();
        assert_eq!(t.session_for_course("C1").unwrap().course_name, "Custom");
        assert_eq!(t.utilisation_for("F1").unwrap().utilised_credits, 3);
        assert_eq!(cat.course("C1").unwrap().name, "Algebra");
    }

    #[test]
    fn test_validation_rejects_bad_request() {
        let cat = catalog();
        let req = TimetableRequest::new("P1", 0);
        let err = scheduler().generate(&cat, &req).unwrap_err();
        assert!(matches!(err, TimetableError::Validation(_)));

        let lenient =
            scheduler().with_config(SchedulerConfig::default().with_validate_request(false));
        assert!(lenient.generate(&cat, &req).is_ok());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(GenerationPhase::ResolvingProgram.to_string(), "resolving_program");
        assert_eq!(GenerationPhase::Done.to_string(), "done");
        assert_eq!(GenerationPhase::Failed.to_string(), "failed");
    }
}
