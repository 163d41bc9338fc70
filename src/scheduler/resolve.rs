//! Course resolution.
//!
//! Merges catalog courses with request-scoped custom courses into a single
//! lookup. Custom definitions shadow catalog entries with the same id for
//! the duration of one request only; the catalog itself is never touched.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::CourseDefinition;

/// Unified course lookup for one request.
#[derive(Debug, Clone)]
pub struct CoursePool<'a> {
    courses: HashMap<&'a str, &'a CourseDefinition>,
}

impl<'a> CoursePool<'a> {
    /// Builds the pool: catalog entries first, then custom courses, later
    /// entries replacing earlier ones with the same id. Custom courses with
    /// an empty id are ignored.
    pub fn build(catalog: &'a Catalog, custom_courses: &'a [CourseDefinition]) -> Self {
        let mut courses = HashMap::with_capacity(catalog.courses().len() + custom_courses.len());
        for course in catalog.courses() {
            courses.entry(course.id.as_str()).or_insert(course);
        }
        for course in custom_courses.iter().filter(|c| !c.id.is_empty()) {
            courses.insert(course.id.as_str(), course);
        }
        Self { courses }
    }

    /// Looks up a course definition.
    pub fn get(&self, course_id: &str) -> Option<&'a CourseDefinition> {
        self.courses.get(course_id).copied()
    }

    /// Number of distinct course ids.
    pub(crate) fn len(&self) -> usize {
        self.courses.len()
    }
}
