/// Normalization of course records coming from the timetable store
mod types;

pub use types::{CourseRecord, RawCourseRecord};

use crate::period_engine::TimetableError;
use serde_json::Value;
use tracing::{debug, warn};

/// Reads an identifier that may be a string or an integer.
fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a text field, ignoring values of any other JSON type.
fn text_from_value(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => {
            debug!(value = %other, "Ignoring non-text value in course record");
            None
        }
    }
}

/// Maps any accepted record shape onto the canonical [`CourseRecord`].
///
/// `id` wins over `number` and `schedule` wins over `time` when both are
/// present.
pub fn normalize(raw: RawCourseRecord) -> CourseRecord {
    let id = raw
        .id
        .as_ref()
        .and_then(id_from_value)
        .or_else(|| raw.number.as_ref().and_then(id_from_value));

    let schedule = text_from_value(raw.schedule.as_ref())
        .filter(|s| !s.trim().is_empty())
        .or_else(|| text_from_value(raw.time.as_ref()).filter(|s| !s.trim().is_empty()));

    CourseRecord {
        id,
        name: text_from_value(raw.name.as_ref()).unwrap_or_default(),
        professor: text_from_value(raw.professor.as_ref()).unwrap_or_default(),
        location: text_from_value(raw.location.as_ref()).unwrap_or_default(),
        schedule,
    }
}

/// Normalizes one JSON value. Returns `None` for values that are not objects.
pub fn record_from_value(value: &Value) -> Option<CourseRecord> {
    if !value.is_object() {
        return None;
    }
    match serde_json::from_value::<RawCourseRecord>(value.clone()) {
        Ok(raw) => Some(normalize(raw)),
        Err(e) => {
            debug!(error = %e, "Course record has unexpected field types");
            None
        }
    }
}

/// Parses a JSON array of course records from the store
///
/// # Arguments
/// * `json` - Response body holding an array of records
///
/// # Returns
/// * `Ok(Vec<CourseRecord>)` - Normalized records; unusable elements are skipped
/// * `Err` - If the body is not JSON or not an array
pub fn records_from_json(json: &str) -> Result<Vec<CourseRecord>, TimetableError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(TimetableError::Json {
            message: "expected an array of course records".to_string(),
        });
    };

    let records: Vec<CourseRecord> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let record = record_from_value(item);
            if record.is_none() {
                warn!(index, "Skipping unreadable course record");
            }
            record
        })
        .collect();

    debug!(
        received = items.len(),
        kept = records.len(),
        "Normalized course records"
    );

    Ok(records)
}
