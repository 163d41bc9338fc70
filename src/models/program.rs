//! Academic program model.

use serde::{Deserialize, Serialize};

/// A degree program and its core courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Unique program identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Core course identifiers, in scheduling order.
    #[serde(default)]
    pub courses: Vec<String>,
}

impl Program {
    /// Creates a program with no courses.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            courses: Vec::new(),
        }
    }

    /// Sets the program name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a core course.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.courses.push(course_id.into());
        self
    }
}
