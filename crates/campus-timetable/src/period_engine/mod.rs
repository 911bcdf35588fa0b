/// Timetable period engine: schedule parsing, conflicts, grid layout
mod cache;
mod config;
mod conflict;
mod display;
mod error;
mod layout;
mod parser;
pub mod periods;
mod timetable;
mod types;

pub use cache::{GridMemo, MemoStats, ViewDigest, DEFAULT_MEMO_CAPACITY};
pub use config::{DisplayConfig, GridConfig, TimetableConfig};
pub use conflict::{find_all_conflicts, find_conflict};
pub use display::{
    building_name, building_name_with, color_in, color_index, color_of, DEFAULT_CAMPUS_SUFFIXES,
    DEFAULT_PALETTE,
};
pub use error::TimetableError;
pub use layout::GridLayoutEngine;
pub use parser::{parse_schedule, MIN_BLOCK_MINUTES};
pub use periods::{Half, PeriodCode};
pub use timetable::{occupancy_at, occupancy_at_datetime, Timetable};
pub use types::*;

use crate::records::CourseRecord;
use std::collections::HashSet;
use tracing::debug;

/// Parses the schedule of one course record
///
/// Records without an id or schedule produce no blocks. Blocks repeating an
/// earlier `(day, start_minute)` of the same course are dropped, so the
/// result holds at most one block per day and start time.
pub fn parse_course(record: &CourseRecord) -> Vec<TimeBlock> {
    let (Some(id), Some(schedule)) = (record.id.as_deref(), record.schedule.as_deref()) else {
        debug!(
            course_id = record.id.as_deref().unwrap_or("<none>"),
            "Course record has no id or schedule"
        );
        return Vec::new();
    };

    let mut seen = HashSet::new();
    parse_schedule(id, schedule)
        .into_iter()
        .filter(|b| seen.insert((b.day, b.start_minute)))
        .collect()
}

/// Parses every record, keeping course order.
pub fn parse_courses(records: &[CourseRecord]) -> Vec<TimeBlock> {
    records.iter().flat_map(parse_course).collect()
}

/// Builds the full grid view for a list of courses in one step.
///
/// Convenience function that combines parse, hour range and layout.
pub fn render_grid(
    engine: &GridLayoutEngine,
    records: &[CourseRecord],
    render_width: f32,
    time_column_width: f32,
    row_height: f32,
) -> GridView {
    let blocks = parse_courses(records);
    GridView {
        hours: engine.compute_hours(&blocks),
        rects: engine.layout(&blocks, render_width, time_column_width, row_height),
    }
}
