//! Error types for the timetable subsystem.

use super::types::Day;
use thiserror::Error;

/// Errors that can occur while configuring the engine or editing a timetable.
///
/// Malformed schedule strings are never reported here; they simply produce no
/// time blocks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimetableError {
    /// Configuration values are inconsistent
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Input could not be decoded as JSON
    #[error("JSON error: {message}")]
    Json { message: String },

    /// Configuration file could not be read
    #[error("I/O error: {message}")]
    Io { message: String },

    /// The course record carries no identifier
    #[error("Course record has no identifier")]
    MissingId,

    /// The course is already part of the timetable
    #[error("Course {course_id} is already in the timetable")]
    DuplicateCourse { course_id: String },

    /// The course overlaps a course already in the timetable
    #[error("Course {course_id} conflicts with {conflicting_course_id} on {day}")]
    Conflict {
        course_id: String,
        conflicting_course_id: String,
        day: Day,
    },

    /// The course schedule could not be read, so conflicts cannot be checked
    #[error("Schedule of course {course_id} could not be read; conflicts cannot be verified")]
    Unverifiable { course_id: String },
}

impl TimetableError {
    /// Returns true if this error is a time conflict with another course.
    pub fn is_conflict(&self) -> bool {
        matches!(self, TimetableError::Conflict { .. })
    }

    /// Returns true if the caller can still go ahead after confirming with the user.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TimetableError::Unverifiable { .. })
    }
}

impl From<serde_json::Error> for TimetableError {
    fn from(err: serde_json::Error) -> Self {
        TimetableError::Json {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for TimetableError {
    fn from(err: std::io::Error) -> Self {
        TimetableError::Io {
            message: err.to_string(),
        }
    }
}
