//! Scenario snapshots.
//!
//! A scenario pairs a named request configuration with the timetable it
//! produced, so planners can keep and compare alternatives. The store is
//! independent of the generator: it neither reads nor writes usage trackers.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, TimetableError};
use crate::models::{Constraints, Timetable, TimetableRequest};

/// Request parameters kept with a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    pub program_id: String,
    pub semester: u32,
    #[serde(default)]
    pub electives: Vec<String>,
    #[serde(default)]
    pub constraints: Constraints,
}

impl From<&TimetableRequest> for ScenarioConfig {
    fn from(request: &TimetableRequest) -> Self {
        Self {
            program_id: request.program_id.clone(),
            semester: request.semester,
            electives: request.electives.clone(),
            constraints: request.constraints.clone(),
        }
    }
}

/// Input to [`ScenarioStore::save`].
#[derive(Debug, Clone)]
pub struct NewScenario {
    /// Existing id to overwrite; `None` allocates a fresh one.
    pub id: Option<String>,
    pub name: String,
    pub config: ScenarioConfig,
    pub timetable: Timetable,
}

impl NewScenario {
    pub fn new(name: impl Into<String>, config: ScenarioConfig, timetable: Timetable) -> Self {
        Self {
            id: None,
            name: name.into(),
            config,
            timetable,
        }
    }

    /// Targets an existing scenario id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A stored scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSnapshot {
    pub id: String,
    pub name: String,
    pub config: ScenarioConfig,
    pub timetable: Timetable,
    pub updated_at: DateTime<Utc>,
}

/// Persistence for scenario snapshots.
pub trait ScenarioStore: Send + Sync {
    /// Saves a scenario, overwriting one with the same id.
    fn save(&self, scenario: NewScenario) -> Result<ScenarioSnapshot>;

    /// All scenarios in first-save order.
    fn list(&self) -> Result<Vec<ScenarioSnapshot>>;

    /// Looks up a scenario by id.
    fn get(&self, id: &str) -> Result<Option<ScenarioSnapshot>>;

    /// Looks up a scenario, failing when it does not exist.
    fn require(&self, id: &str) -> Result<ScenarioSnapshot> {
        self.get(id)?.ok_or_else(|| TimetableError::ScenarioNotFound {
            scenario_id: id.to_string(),
        })
    }
}

/// Process-local scenario store.
#[derive(Debug, Default)]
pub struct InMemoryScenarioStore {
    scenarios: RwLock<Vec<ScenarioSnapshot>>,
}

impl InMemoryScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioStore for InMemoryScenarioStore {
    fn save(&self, scenario: NewScenario) -> Result<ScenarioSnapshot> {
        let snapshot = ScenarioSnapshot {
            id: scenario
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: scenario.name,
            config: scenario.config,
            timetable: scenario.timetable,
            updated_at: Utc::now(),
        };

        let mut scenarios = self
            .scenarios
            .write()
            .map_err(|_| TimetableError::StorePoisoned)?;
        match scenarios.iter_mut().find(|s| s.id == snapshot.id) {
            Some(existing) => *existing = snapshot.clone(),
            None => scenarios.push(snapshot.clone()),
        }
        debug!(scenario_id = %snapshot.id, "scenario saved");
        Ok(snapshot)
    }

    fn list(&self) -> Result<Vec<ScenarioSnapshot>> {
        let scenarios = self
            .scenarios
            .read()
            .map_err(|_| TimetableError::StorePoisoned)?;
        Ok(scenarios.clone())
    }

    fn get(&self, id: &str) -> Result<Option<ScenarioSnapshot>> {
        let scenarios = self
            .scenarios
            .read()
            .map_err(|_| TimetableError::StorePoisoned)?;
        Ok(scenarios.iter().find(|s| s.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{CourseDefinition, FacultyMember, Program, Room, RoomType, Slot, Weekday};
    use crate::scheduler::TimetableScheduler;
    use std::sync::Arc;

    fn sample() -> (ScenarioConfig, Timetable) {
        let catalog = Catalog::new()
            .with_slot(Slot::new("MON-1", Weekday::Monday, "09:00"))
            .with_faculty(FacultyMember::new("F1", 3).with_availability(["MON-1"]))
            .with_room(Room::new("R1", RoomType::Classroom).with_availability(["MON-1"]))
            .with_course(CourseDefinition::new("C1").with_faculty_pool(["F1"]))
            .with_program(Program::new("P").with_course("C1"));
        let request = TimetableRequest::new("P", 1);
        let timetable = TimetableScheduler::new().generate(&catalog, &request).unwrap();
        (ScenarioConfig::from(&request), timetable)
    }

    #[test]
    fn test_save_assigns_id() {
        let store = InMemoryScenarioStore::new();
        let (config, timetable) = sample();
        let saved = store.save(NewScenario::new("Plan A", config, timetable)).unwrap();
        assert!(Uuid::parse_str(&saved.id).is_ok());
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.get(&saved.id).unwrap().unwrap().name, "Plan A");
    }

    #[test]
    fn test_save_with_id_overwrites() {
        let store = InMemoryScenarioStore::new();
        let (config, timetable) = sample();
        store
            .save(NewScenario::new("v1", config.clone(), timetable.clone()).with_id("s-1"))
            .unwrap();
        store
            .save(NewScenario::new("other", config.clone(), timetable.clone()))
            .unwrap();
        store
            .save(NewScenario::new("v2", config, timetable).with_id("s-1"))
            .unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "s-1");
        assert_eq!(all[0].name, "v2");
    }

    #[test]
    fn test_require_missing() {
        let store = InMemoryScenarioStore::new();
        assert!(store.get("nope").unwrap().is_none());
        let err = store.require("nope").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_shared_across_threads() {
        let store = Arc::new(InMemoryScenarioStore::new());
        let (config, timetable) = sample();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                let (config, timetable) = (config.clone(), timetable.clone());
                std::thread::spawn(move || {
                    store
                        .save(NewScenario::new(format!("plan {i}"), config, timetable))
                        .unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.list().unwrap().len(), 4);
    }

    #[test]
    fn test_snapshot_json_names() {
        let store = InMemoryScenarioStore::new();
        let (config, timetable) = sample();
        let saved = store.save(NewScenario::new("A", config, timetable)).unwrap();
        let v = serde_json::to_value(&saved).unwrap();
        assert!(v.get("updatedAt").is_some());
        assert_eq!(v["config"]["programId"], "P");
    }
}
