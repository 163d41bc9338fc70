//! Seeded random catalogs.
//!
//! Produces reproducible catalogs and matching requests for stress tests
//! and invariant checks. The same configuration (seed included) always
//! yields the same catalog and request.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::models::{
    Constraints, CourseDefinition, FacultyMember, Program, Room, RoomType, SessionType, Slot,
    TimetableRequest, Weekday,
};

/// Id of the single program in a synthetic catalog.
pub const SYNTHETIC_PROGRAM_ID: &str = "PRG";

/// Shape of a synthetic catalog.
///
/// # Example
///
/// ```
/// use u_timetable::synthetic::SyntheticCatalog;
///
/// let (catalog, request) = SyntheticCatalog::default().with_seed(7).generate();
/// assert_eq!(catalog.slots().len(), 5 * 4);
/// assert_eq!(request.program_id, "PRG");
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticCatalog {
    /// Random seed.
    pub seed: u64,
    /// Teaching days, starting Monday (1..=6).
    pub days: usize,
    /// Slots per day.
    pub slots_per_day: usize,
    pub faculty: usize,
    pub rooms: usize,
    /// Core courses in the program (at least 1 is generated).
    pub core_courses: usize,
    /// Courses requested as electives.
    pub electives: usize,
    /// Probability that a faculty member or room is free in a given slot.
    pub availability: f64,
    /// Probability that a course pool also names an unregistered faculty id.
    pub unregistered_rate: f64,
    /// Whether to draw random request constraints.
    pub random_constraints: bool,
}

impl Default for SyntheticCatalog {
    fn default() -> Self {
        Self {
            seed: 0,
            days: 5,
            slots_per_day: 4,
            faculty: 6,
            rooms: 5,
            core_courses: 8,
            electives: 3,
            availability: 0.6,
            unregistered_rate: 0.1,
            random_constraints: true,
        }
    }
}

const ROOM_TYPES: [RoomType; 4] = [
    RoomType::Classroom,
    RoomType::Seminar,
    RoomType::Lab,
    RoomType::Field,
];

const SESSION_TYPES: [SessionType; 6] = [
    SessionType::Theory,
    SessionType::Practical,
    SessionType::Fieldwork,
    SessionType::Seminar,
    SessionType::Lab,
    SessionType::Project,
];

fn slot_id(day: Weekday, index: usize) -> String {
    format!("{}-{}", day.as_str()[..3].to_uppercase(), index)
}

impl SyntheticCatalog {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sizes(mut self, faculty: usize, rooms: usize, core_courses: usize) -> Self {
        self.faculty = faculty;
        self.rooms = rooms;
        self.core_courses = core_courses;
        self
    }

    pub fn with_availability(mut self, p: f64) -> Self {
        self.availability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_random_constraints(mut self, enabled: bool) -> Self {
        self.random_constraints = enabled;
        self
    }

    /// Builds the catalog and a request for its program.
    pub fn generate(&self) -> (Catalog, TimetableRequest) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut catalog = Catalog::new();

        let days = &Weekday::ALL[..self.days.clamp(1, Weekday::ALL.len())];
        let mut slot_ids = Vec::new();
        for &day in days {
            for i in 1..=self.slots_per_day {
                let id = slot_id(day, i);
                catalog = catalog.with_slot(Slot::new(
                    id.clone(),
                    day,
                    format!("{:02}:00-{:02}:00", 8 + i, 9 + i),
                ));
                slot_ids.push(id);
            }
        }

        let availability = self.availability.clamp(0.0, 1.0);
        let mut faculty_ids = Vec::new();
        for i in 1..=self.faculty {
            let id = format!("F{i}");
            let free: Vec<&String> = slot_ids
                .iter()
                .filter(|_| rng.random_bool(availability))
                .collect();
            catalog = catalog.with_faculty(
                FacultyMember::new(id.clone(), rng.random_range(2..=8))
                    .with_name(format!("Faculty {i}"))
                    .with_availability(free.into_iter().cloned()),
            );
            faculty_ids.push(id);
        }

        for i in 1..=self.rooms {
            let room_type = ROOM_TYPES[rng.random_range(0..ROOM_TYPES.len())].clone();
            let free: Vec<&String> = slot_ids
                .iter()
                .filter(|_| rng.random_bool(availability))
                .collect();
            catalog = catalog.with_room(
                Room::new(format!("R{i}"), room_type)
                    .with_name(format!("Room {i}"))
                    .with_availability(free.into_iter().cloned()),
            );
        }

        let unregistered_rate = self.unregistered_rate.clamp(0.0, 1.0);
        let core = self.core_courses.max(1);
        let total = core + self.electives;
        let mut program = Program::new(SYNTHETIC_PROGRAM_ID).with_name("Synthetic Program");
        let mut request = TimetableRequest::new(SYNTHETIC_PROGRAM_ID, 1);

        for i in 1..=total {
            let id = format!("C{i}");
            let pool_size = rng.random_range(1..=3).min(faculty_ids.len());
            let mut pool: Vec<String> = faculty_ids
                .choose_multiple(&mut rng, pool_size)
                .cloned()
                .collect();
            if rng.random_bool(unregistered_rate) {
                pool.insert(0, format!("GHOST{i}"));
            }
            let preferred_count = rng.random_range(0..=2);
            let preferred: Vec<String> = slot_ids
                .choose_multiple(&mut rng, preferred_count)
                .cloned()
                .collect();

            let mut course = CourseDefinition::new(id.clone())
                .with_name(format!("Course {i}"))
                .with_credits(rng.random_range(1..=4))
                .with_session_type(SESSION_TYPES[rng.random_range(0..SESSION_TYPES.len())].clone())
                .with_faculty_pool(pool)
                .with_preferred_slots(preferred);
            if rng.random_bool(0.1) {
                let override_type = ROOM_TYPES[rng.random_range(0..ROOM_TYPES.len())].clone();
                course = course.with_room_type(override_type);
            }
            catalog = catalog.with_course(course);

            if i <= core {
                program = program.with_course(id);
            } else {
                request = request.with_elective(id);
            }
        }
        catalog = catalog.with_program(program);

        if self.random_constraints {
            request = request.with_constraints(self.random_constraints(&mut rng, days, &slot_ids));
        }

        (catalog, request)
    }

    fn random_constraints(
        &self,
        rng: &mut StdRng,
        days: &[Weekday],
        slot_ids: &[String],
    ) -> Constraints {
        let mut constraints = Constraints::new();
        if rng.random_bool(0.4) {
            constraints = constraints.with_max_sessions_per_day(rng.random_range(1..=4));
        }
        if rng.random_bool(0.3) {
            constraints = constraints
                .with_preferred_days(days.iter().copied().filter(|_| rng.random_bool(0.6)));
        }
        if rng.random_bool(0.5) {
            let avoid_count = rng.random_range(1..=3);
            let avoid: Vec<String> = slot_ids.choose_multiple(rng, avoid_count).cloned().collect();
            constraints = constraints.with_avoid_slots(avoid);
        }
        constraints
    }
}
