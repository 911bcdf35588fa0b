//! Schedule string parsing.
//!
//! A raw schedule is a sequence of day glyphs each followed by a
//! comma-separated run of period codes, e.g. `월1A,1B,2A 수3A,3B`.

use super::periods;
use super::types::{Day, TimeBlock};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Minimum length of a parsed block, and the length credited to its last code.
pub const MIN_BLOCK_MINUTES: u32 = 30;

// Static regex - compiled once
static GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([월화수목금])\s*([0-9A-Za-z]+(?:\s*,\s*[0-9A-Za-z]*)*)").unwrap()
});

/// One day+codes group as found in the raw string, before lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawGroup<'a> {
    day: Day,
    codes: Vec<&'a str>,
}

/// Finds every day+codes group in `raw`, in order of appearance.
fn scan_groups(raw: &str) -> Vec<RawGroup<'_>> {
    GROUP_REGEX
        .captures_iter(raw)
        .filter_map(|caps| {
            let glyph = caps.get(1)?.as_str().chars().next()?;
            let day = Day::from_glyph(glyph)?;
            let codes = caps
                .get(2)?
                .as_str()
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>();
            Some(RawGroup { day, codes })
        })
        .collect()
}

/// Converts one group into a block, or `None` if its endpoints are not in the table.
fn group_to_block(course_id: &str, group: &RawGroup<'_>) -> Option<TimeBlock> {
    let mut codes: Vec<(&str, Option<u32>)> = group
        .codes
        .iter()
        .map(|c| (*c, periods::lookup(c)))
        .collect();

    // unknown codes sort last so they land on the end of the range
    codes.sort_by_key(|(_, minute)| minute.unwrap_or(u32::MAX));

    let (first_code, first) = *codes.first()?;
    let (last_code, last) = *codes.last()?;

    let (Some(start), Some(last)) = (first, last) else {
        debug!(
            course_id = %course_id,
            day = %group.day,
            first = first_code,
            last = last_code,
            "Discarding schedule group with unknown period code"
        );
        return None;
    };

    let mut end = last + MIN_BLOCK_MINUTES;
    if end <= start {
        end = start + MIN_BLOCK_MINUTES;
    }

    Some(TimeBlock {
        course_id: course_id.to_string(),
        day: group.day,
        start_minute: start,
        end_minute: end,
    })
}

/// Parses a raw schedule string into time blocks tagged with `course_id`.
///
/// Emits one block per day+codes group. Groups whose earliest or latest code
/// is unknown are dropped, and a string without any recognizable group yields
/// an empty vector. Identical groups are emitted once each.
pub fn parse_schedule(course_id: &str, raw: &str) -> Vec<TimeBlock> {
    let blocks: Vec<TimeBlock> = scan_groups(raw)
        .iter()
        .filter_map(|group| group_to_block(course_id, group))
        .collect();

    if blocks.is_empty() && !raw.trim().is_empty() {
        debug!(course_id = %course_id, raw = raw, "No readable schedule groups");
    }

    blocks
}
