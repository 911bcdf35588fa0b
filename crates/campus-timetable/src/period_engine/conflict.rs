//! Time conflict detection between a candidate course and a timetable.
//!
//! Blocks conflict when they share a day and their `[start, end)` ranges
//! intersect. A course ending exactly when another begins is not a conflict.

use super::types::{Conflict, ConflictResult, TimeBlock};

fn conflict_between(candidate: &TimeBlock, existing: &TimeBlock) -> Option<Conflict> {
    candidate
        .overlap_with(existing)
        .map(|(overlap_start, overlap_end)| Conflict {
            course_id: existing.course_id.clone(),
            day: existing.day,
            overlap_start,
            overlap_end,
        })
}

/// Checks candidate blocks against existing blocks, stopping at the first overlap.
///
/// A candidate without blocks cannot be checked and yields
/// [`ConflictResult::Unverifiable`] rather than [`ConflictResult::Clear`].
pub fn find_conflict(existing: &[TimeBlock], candidate: &[TimeBlock]) -> ConflictResult {
    if candidate.is_empty() {
        return ConflictResult::Unverifiable;
    }

    candidate
        .iter()
        .find_map(|c| existing.iter().find_map(|e| conflict_between(c, e)))
        .map_or(ConflictResult::Clear, ConflictResult::Conflict)
}

/// Reports every overlapping (candidate, existing) pair.
///
/// Ordered by candidate block, then by existing block.
pub fn find_all_conflicts(existing: &[TimeBlock], candidate: &[TimeBlock]) -> Vec<Conflict> {
    candidate
        .iter()
        .flat_map(|c| existing.iter().filter_map(move |e| conflict_between(c, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period_engine::types::Day;

    fn block(id: &str, day: Day, start: u32, end: u32) -> TimeBlock {
        TimeBlock {
            course_id: id.to_string(),
            day,
            start_minute: start,
            end_minute: end,
        }
    }

    #[test]
    fn test_touching_blocks_do_not_conflict() {
        let existing = [block("a", Day::Mon, 540, 600)];
        let candidate = [block("b", Day::Mon, 600, 660)];
        assert_eq!(find_conflict(&existing, &candidate), ConflictResult::Clear);

        let candidate = [block("b", Day::Mon, 599, 660)];
        let result = find_conflict(&existing, &candidate);
        assert_eq!(result.conflicting_course(), Some("a"));
        assert_eq!(
            result,
            ConflictResult::Conflict(Conflict {
                course_id: "a".to_string(),
                day: Day::Mon,
                overlap_start: 599,
                overlap_end: 600,
            })
        );
    }

    #[test]
    fn test_touching_from_the_other_side() {
        let existing = [block("a", Day::Tue, 600, 660)];
        assert!(find_conflict(&existing, &[block("b", Day::Tue, 540, 600)]).is_clear());
        assert!(find_conflict(&existing, &[block("b", Day::Tue, 540, 601)]).is_conflict());
    }

    #[test]
    fn test_reversed_blocks_never_conflict() {
        let existing = [block("a", Day::Mon, 500, 700)];
        let reversed = block("b", Day::Mon, 600, 540);
        assert_eq!(reversed.duration(), 0);
        assert!(find_conflict(&existing, &[reversed.clone()]).is_clear());
        assert!(find_all_conflicts(&[reversed], &[block("c", Day::Mon, 550, 580)]).is_empty());
    }

    #[test]
    fn test_different_days_do_not_conflict() {
        let existing = [block("a", Day::Mon, 540, 600)];
        let candidate = [block("b", Day::Tue, 540, 600)];
        assert!(find_conflict(&existing, &candidate).is_clear());
    }

    #[test]
    fn test_containment_conflicts() {
        let existing = [block("a", Day::Wed, 540, 720)];
        let candidate = [block("b", Day::Wed, 600, 630)];
        assert!(find_conflict(&existing, &candidate).is_conflict());
    }

    #[test]
    fn test_empty_candidate_is_unverifiable() {
        let existing = [block("a", Day::Mon, 540, 600)];
        assert!(find_conflict(&existing, &[]).is_unverifiable());
        assert!(find_conflict(&[], &[]).is_unverifiable());
    }

    #[test]
    fn test_empty_timetable_is_clear() {
        assert!(find_conflict(&[], &[block("b", Day::Fri, 540, 600)]).is_clear());
    }

    #[test]
    fn test_first_conflict_wins() {
        let existing = [
            block("a", Day::Mon, 540, 600),
            block("b", Day::Mon, 600, 660),
        ];
        let candidate = [block("c", Day::Mon, 570, 630)];
        assert_eq!(find_conflict(&existing, &candidate).conflicting_course(), Some("a"));

        let all = find_all_conflicts(&existing, &candidate);
        let ids: Vec<&str> = all.iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
