/// Course record shapes, as received and as used internally
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A course record in any of the shapes the timetable store has produced.
///
/// Older payloads carry `number`/`time`, newer ones `id`/`schedule`, and the
/// identifier may be a string or an integer. Every field is kept as a raw
/// JSON value so that one mistyped field never rejects the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCourseRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub number: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub professor: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub schedule: Option<Value>,
    #[serde(default)]
    pub time: Option<Value>,
}

/// Canonical course record consumed by the period engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Identifier compared as a string; `None` when the store sent none
    pub id: Option<String>,
    pub name: String,
    pub professor: String,
    pub location: String,
    /// Raw schedule string such as `월1A,1B 수2A`
    pub schedule: Option<String>,
}

impl CourseRecord {
    /// Creates a record with an id and schedule and empty text fields.
    pub fn new(id: impl Into<String>, schedule: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            schedule: Some(schedule.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_professor(mut self, professor: impl Into<String>) -> Self {
        self.professor = professor.into();
        self
    }
}
