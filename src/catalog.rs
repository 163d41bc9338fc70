//! Reference data catalog.
//!
//! The catalog is the read-only provider of programs, courses, faculty,
//! rooms and slots. Every collection keeps its declaration order, which
//! the scheduler relies on for deterministic first-fit selection.
//!
//! A catalog is never mutated by timetable generation and can be shared
//! across threads (e.g. behind an `Arc`) without locking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;
use crate::models::{CourseDefinition, FacultyMember, Program, Room, Slot};

/// Serialized form of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogData {
    #[serde(default)]
    programs: Vec<Program>,
    #[serde(default)]
    courses: Vec<CourseDefinition>,
    #[serde(default)]
    faculty: Vec<FacultyMember>,
    #[serde(default)]
    rooms: Vec<Room>,
    #[serde(default)]
    slots: Vec<Slot>,
}

/// Read-only reference data for timetable generation.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::Catalog;
/// use u_timetable::models::{
///     CourseDefinition, FacultyMember, Program, Room, RoomType, Slot, Weekday,
/// };
///
/// let catalog = Catalog::new()
///     .with_slot(Slot::new("MON-1", Weekday::Monday, "09:00-10:00"))
///     .with_faculty(FacultyMember::new("F1", 6).with_availability(["MON-1"]))
///     .with_room(Room::new("R1", RoomType::Classroom).with_availability(["MON-1"]))
///     .with_course(CourseDefinition::new("C1").with_faculty_pool(["F1"]))
///     .with_program(Program::new("P1").with_course("C1"));
///
/// assert!(catalog.program("P1").is_some());
/// assert_eq!(catalog.slots().len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "CatalogData", into = "CatalogData")]
pub struct Catalog {
    programs: Vec<Program>,
    courses: Vec<CourseDefinition>,
    faculty: Vec<FacultyMember>,
    rooms: Vec<Room>,
    slots: Vec<Slot>,
    program_index: HashMap<String, usize>,
    course_index: HashMap<String, usize>,
    faculty_index: HashMap<String, usize>,
    room_index: HashMap<String, usize>,
    slot_index: HashMap<String, usize>,
}

/// Resource listing: everything but the programs.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceListing<'a> {
    pub courses: &'a [CourseDefinition],
    pub faculty: &'a [FacultyMember],
    pub rooms: &'a [Room],
    pub slots: &'a [Slot],
}

/// Records `id → position`; the first declaration wins on duplicates.
fn index_first(index: &mut HashMap<String, usize>, id: &str, position: usize) {
    index.entry(id.to_string()).or_insert(position);
}

impl From<CatalogData> for Catalog {
    fn from(data: CatalogData) -> Self {
        let mut catalog = Catalog::new();
        for p in data.programs {
            catalog.push_program(p);
        }
        for c in data.courses {
            catalog.push_course(c);
        }
        for f in data.faculty {
            catalog.push_faculty(f);
        }
        for r in data.rooms {
            catalog.push_room(r);
        }
        for s in data.slots {
            catalog.push_slot(s);
        }
        catalog
    }
}

impl From<Catalog> for CatalogData {
    fn from(c: Catalog) -> Self {
        CatalogData {
            programs: c.programs,
            courses: c.courses,
            faculty: c.faculty,
            rooms: c.rooms,
            slots: c.slots,
        }
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from JSON with `programs`, `courses`, `faculty`,
    /// `rooms` and `slots` arrays (each optional).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the catalog to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn push_program(&mut self, program: Program) {
        index_first(&mut self.program_index, &program.id, self.programs.len());
        self.programs.push(program);
    }

    fn push_course(&mut self, course: CourseDefinition) {
        index_first(&mut self.course_index, &course.id, self.courses.len());
        self.courses.push(course);
    }

    fn push_faculty(&mut self, member: FacultyMember) {
        index_first(&mut self.faculty_index, &member.id, self.faculty.len());
        self.faculty.push(member);
    }

    fn push_room(&mut self, room: Room) {
        index_first(&mut self.room_index, &room.id, self.rooms.len());
        self.rooms.push(room);
    }

    fn push_slot(&mut self, slot: Slot) {
        index_first(&mut self.slot_index, &slot.id, self.slots.len());
        self.slots.push(slot);
    }

    /// Adds a program.
    pub fn with_program(mut self, program: Program) -> Self {
        self.push_program(program);
        self
    }

    /// Adds a course.
    pub fn with_course(mut self, course: CourseDefinition) -> Self {
        self.push_course(course);
        self
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, member: FacultyMember) -> Self {
        self.push_faculty(member);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.push_room(room);
        self
    }

    /// Adds a slot.
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.push_slot(slot);
        self
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn courses(&self) -> &[CourseDefinition] {
        &self.courses
    }

    pub fn faculty(&self) -> &[FacultyMember] {
        &self.faculty
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn program(&self, id: &str) -> Option<&Program> {
        self.program_index.get(id).map(|&i| &self.programs[i])
    }

    pub fn course(&self, id: &str) -> Option<&CourseDefinition> {
        self.course_index.get(id).map(|&i| &self.courses[i])
    }

    pub fn faculty_member(&self, id: &str) -> Option<&FacultyMember> {
        self.faculty_index.get(id).map(|&i| &self.faculty[i])
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slot_index.get(id).map(|&i| &self.slots[i])
    }

    /// Courses, faculty, rooms and slots without the programs.
    pub fn resources(&self) -> ResourceListing<'_> {
        ResourceListing {
            courses: &self.courses,
            faculty: &self.faculty,
            rooms: &self.rooms,
            slots: &self.slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomType, Weekday};

    const CATALOG_JSON: &str = r#"{
        "programs": [{"id": "BSC", "name": "B.Sc.", "courses": ["C1", "C2"]}],
        "courses": [
            {"id": "C1", "name": "Algebra", "credits": 3, "type": "theory", "facultyPool": ["F1"]},
            {"id": "C2", "name": "Lab I", "credits": 2, "type": "lab", "preferredSlots": ["MON-2"]}
        ],
        "faculty": [{"id": "F1", "name": "Dr. A", "availability": ["MON-1"], "maxLoad": 6}],
        "rooms": [{"id": "R1", "type": "classroom", "availability": ["MON-1", "MON-2"]}],
        "slots": [
            {"id": "MON-1", "day": "Monday", "time": "09:00-10:00"},
            {"id": "MON-2", "day": "Monday", "time": "10:00-11:00"}
        ]
    }"#;

    #[test]
    fn test_from_json_lookups() {
        let c = Catalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(c.program("BSC").unwrap().courses, vec!["C1", "C2"]);
        assert_eq!(c.course("C2").unwrap().preferred_slots, vec!["MON-2"]);
        assert!(c.course("C2").unwrap().faculty_pool.is_empty());
        assert_eq!(c.faculty_member("F1").unwrap().max_load, 6);
        assert_eq!(c.room("R1").unwrap().room_type, RoomType::Classroom);
        assert_eq!(c.slot("MON-2").unwrap().day, Weekday::Monday);
        assert!(c.course("nope").is_none());
    }

    #[test]
    fn test_catalog_order_preserved() {
        let c = Catalog::from_json(CATALOG_JSON).unwrap();
        let ids: Vec<_> = c.slots().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["MON-1", "MON-2"]);
    }

    #[test]
    fn test_json_round_trip_keeps_index() {
        let c = Catalog::from_json(CATALOG_JSON).unwrap();
        let back = Catalog::from_json(&c.to_json().unwrap()).unwrap();
        assert!(back.faculty_member("F1").is_some());
        assert_eq!(back.courses().len(), 2);
    }

    #[test]
    fn test_duplicate_id_first_wins() {
        let c = Catalog::new()
            .with_faculty(FacultyMember::new("F1", 3).with_name("first"))
            .with_faculty(FacultyMember::new("F1", 9).with_name("second"));
        assert_eq!(c.faculty_member("F1").unwrap().name, "first");
        assert_eq!(c.faculty().len(), 2);
    }

    #[test]
    fn test_resources_listing() {
        let c = Catalog::from_json(CATALOG_JSON).unwrap();
        let r = c.resources();
        assert_eq!(r.courses.len(), 2);
        assert_eq!(r.rooms.len(), 1);
        let v = serde_json::to_value(&r).unwrap();
        assert!(v.get("programs").is_none());
    }
}
