//! Timetable period engine for the campus companion app.
//!
//! Turns course records with compact schedule strings (`월1A,1B 수2A`) into
//! weekday time blocks, checks new courses for time conflicts, lays the blocks
//! out on an hour grid and derives display colors and building names. All
//! functions are pure; callers pass in their current course list every time.

pub mod period_engine;
pub mod records;

pub use period_engine::{
    building_name, color_of, find_all_conflicts, find_conflict, parse_course, parse_courses,
    parse_schedule, render_grid, ConflictResult, Day, GridLayoutEngine, GridView, LayoutRect,
    Occupancy, TimeBlock, Timetable, TimetableConfig, TimetableError,
};
pub use records::{records_from_json, CourseRecord};
