/// Types for parsed timetable data
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five teaching weekdays of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "월")]
    Mon,
    #[serde(rename = "화")]
    Tue,
    #[serde(rename = "수")]
    Wed,
    #[serde(rename = "목")]
    Thu,
    #[serde(rename = "금")]
    Fri,
}

impl Day {
    /// All grid days in column order.
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Looks up a day from its glyph as used in schedule strings (e.g. '월').
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '월' => Some(Day::Mon),
            '화' => Some(Day::Tue),
            '수' => Some(Day::Wed),
            '목' => Some(Day::Thu),
            '금' => Some(Day::Fri),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Day::Mon => '월',
            Day::Tue => '화',
            Day::Wed => '수',
            Day::Thu => '목',
            Day::Fri => '금',
        }
    }

    /// Zero-based grid column.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Maps a calendar weekday onto the grid. Weekends have no column.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Day::Mon),
            Weekday::Tue => Some(Day::Tue),
            Weekday::Wed => Some(Day::Wed),
            Weekday::Thu => Some(Day::Thu),
            Weekday::Fri => Some(Day::Fri),
            Weekday::Sat | Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A parsed meeting interval of one course on one day.
///
/// Minutes are counted from 00:00. Blocks produced by the parser always end
/// after they start; blocks built elsewhere (e.g. deserialized from the UI)
/// may not, see [`TimeBlock::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeBlock {
    pub course_id: String,
    pub day: Day,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl TimeBlock {
    /// Length in minutes, zero for a block that does not end after it starts.
    pub fn duration(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Returns true if the block ends after it starts.
    pub fn is_valid(&self) -> bool {
        self.start_minute < self.end_minute
    }

    /// Returns the shared `[start, end)` range if both blocks meet at the same time.
    ///
    /// Blocks that merely touch (one ends when the other starts) do not overlap.
    pub fn overlap_with(&self, other: &TimeBlock) -> Option<(u32, u32)> {
        if self.day != other.day || !self.is_valid() || !other.is_valid() {
            return None;
        }
        if self.start_minute < other.end_minute && self.end_minute > other.start_minute {
            Some((
                self.start_minute.max(other.start_minute),
                self.end_minute.min(other.end_minute),
            ))
        } else {
            None
        }
    }

    /// Returns true if the block is in progress at `minute` on `day`.
    pub fn contains(&self, day: Day, minute: u32) -> bool {
        self.day == day && self.start_minute <= minute && minute < self.end_minute
    }
}

/// A single overlap between a candidate block and an existing block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The existing course that is in the way
    pub course_id: String,
    pub day: Day,
    pub overlap_start: u32,
    pub overlap_end: u32,
}

/// Verdict of a conflict check for a candidate course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConflictResult {
    /// Checked, nothing overlaps
    Clear,
    /// Overlaps an existing course
    Conflict(Conflict),
    /// The candidate has no readable schedule, so nothing could be checked
    Unverifiable,
}

impl ConflictResult {
    pub fn is_clear(&self) -> bool {
        matches!(self, ConflictResult::Clear)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictResult::Conflict(_))
    }

    pub fn is_unverifiable(&self) -> bool {
        matches!(self, ConflictResult::Unverifiable)
    }

    /// Returns the id of the conflicting existing course, if any.
    pub fn conflicting_course(&self) -> Option<&str> {
        match self {
            ConflictResult::Conflict(c) => Some(&c.course_id),
            _ => None,
        }
    }
}

/// Placement of one time block on the rendered grid.
///
/// Lengths use whatever unit the caller's rendering surface uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutRect {
    pub top: f32,
    pub height: f32,
    pub left: f32,
    pub width: f32,
    pub block: TimeBlock,
    pub color: String,
}

/// Whether a timetable has a class running at a given moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Occupancy {
    InClass { course_id: String, until_minute: u32 },
    Free,
}

impl Occupancy {
    pub fn is_in_class(&self) -> bool {
        matches!(self, Occupancy::InClass { .. })
    }
}

/// Everything the rendering layer needs to draw one timetable
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridView {
    /// Row-start hours for the hour labels
    pub hours: Vec<u32>,
    pub rects: Vec<LayoutRect>,
}
