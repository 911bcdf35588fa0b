//! A student's (or a friend's) set of courses.
//!
//! Adding a course goes through the conflict checker first. The collection is
//! a plain value owned by the caller; blocks are reparsed from the records on
//! every query.

use super::conflict::{find_all_conflicts, find_conflict};
use super::error::TimetableError;
use super::layout::GridLayoutEngine;
use super::types::{Conflict, ConflictResult, Day, GridView, Occupancy, TimeBlock};
use super::{parse_course, parse_courses};
use crate::records::CourseRecord;
use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::{info, warn};

/// Finds the class running at `minute` on `day`, if any.
pub fn occupancy_at(blocks: &[TimeBlock], day: Day, minute: u32) -> Occupancy {
    blocks
        .iter()
        .find(|b| b.contains(day, minute))
        .map_or(Occupancy::Free, |b| Occupancy::InClass {
            course_id: b.course_id.clone(),
            until_minute: b.end_minute,
        })
}

/// Same as [`occupancy_at`] for a local date and time. Weekends are always free.
pub fn occupancy_at_datetime(blocks: &[TimeBlock], at: NaiveDateTime) -> Occupancy {
    match Day::from_weekday(at.weekday()) {
        Some(day) => occupancy_at(blocks, day, at.hour() * 60 + at.minute()),
        None => Occupancy::Free,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    courses: Vec<CourseRecord>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records as received from the store, without any checks.
    pub fn from_records(courses: Vec<CourseRecord>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.courses
            .iter()
            .any(|c| c.id.as_deref() == Some(course_id))
    }

    /// All blocks of all courses, in course order.
    pub fn blocks(&self) -> Vec<TimeBlock> {
        parse_courses(&self.courses)
    }

    /// Courses whose schedule produced no blocks, for a "could not read time" warning.
    pub fn unparsable_courses(&self) -> Vec<&CourseRecord> {
        self.courses
            .iter()
            .filter(|c| parse_course(c).is_empty())
            .collect()
    }

    /// Checks a candidate against the current courses, stopping at the first overlap.
    pub fn check(&self, candidate: &CourseRecord) -> ConflictResult {
        find_conflict(&self.blocks(), &parse_course(candidate))
    }

    /// Lists every overlap between a candidate and the current courses.
    pub fn conflicts(&self, candidate: &CourseRecord) -> Vec<Conflict> {
        find_all_conflicts(&self.blocks(), &parse_course(candidate))
    }

    fn ensure_new(&self, candidate: &CourseRecord) -> Result<String, TimetableError> {
        let course_id = candidate.id.clone().ok_or(TimetableError::MissingId)?;
        if self.contains(&course_id) {
            return Err(TimetableError::DuplicateCourse { course_id });
        }
        Ok(course_id)
    }

    /// Adds a course if it is new and overlaps nothing
    ///
    /// # Returns
    /// * `Ok(())` - The course was added
    /// * `Err(TimetableError::Unverifiable)` - The schedule could not be read;
    ///   use [`Timetable::add_unverified`] once the user has confirmed
    /// * `Err` - Missing id, duplicate, or time conflict
    pub fn add(&mut self, candidate: CourseRecord) -> Result<(), TimetableError> {
        let course_id = self.ensure_new(&candidate)?;

        match self.check(&candidate) {
            ConflictResult::Clear => {}
            ConflictResult::Conflict(conflict) => {
                info!(
                    course_id = %course_id,
                    conflicting_course_id = %conflict.course_id,
                    day = %conflict.day,
                    "Rejecting course with time conflict"
                );
                return Err(TimetableError::Conflict {
                    course_id,
                    conflicting_course_id: conflict.course_id,
                    day: conflict.day,
                });
            }
            ConflictResult::Unverifiable => {
                return Err(TimetableError::Unverifiable { course_id });
            }
        }

        info!(course_id = %course_id, "Adding course to timetable");
        self.courses.push(candidate);
        Ok(())
    }

    /// Adds a course whose schedule may be unreadable.
    ///
    /// Readable schedules are still checked for conflicts.
    pub fn add_unverified(&mut self, candidate: CourseRecord) -> Result<(), TimetableError> {
        let course_id = self.ensure_new(&candidate)?;
        if let ConflictResult::Conflict(conflict) = self.check(&candidate) {
            return Err(TimetableError::Conflict {
                course_id,
                conflicting_course_id: conflict.course_id,
                day: conflict.day,
            });
        }

        warn!(course_id = %course_id, "Adding course without verified schedule");
        self.courses.push(candidate);
        Ok(())
    }

    /// Removes a course by id and returns it.
    pub fn remove(&mut self, course_id: &str) -> Option<CourseRecord> {
        let index = self
            .courses
            .iter()
            .position(|c| c.id.as_deref() == Some(course_id))?;
        info!(course_id = %course_id, "Removing course from timetable");
        Some(self.courses.remove(index))
    }

    pub fn occupancy_at(&self, day: Day, minute: u32) -> Occupancy {
        occupancy_at(&self.blocks(), day, minute)
    }

    pub fn occupancy_at_datetime(&self, at: NaiveDateTime) -> Occupancy {
        occupancy_at_datetime(&self.blocks(), at)
    }

    /// Hour labels and block rectangles for the current courses.
    pub fn view(
        &self,
        engine: &GridLayoutEngine,
        render_width: f32,
        time_column_width: f32,
        row_height: f32,
    ) -> GridView {
        let blocks = self.blocks();
        GridView {
            hours: engine.compute_hours(&blocks),
            rects: engine.layout(&blocks, render_width, time_column_width, row_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timetable() -> Timetable {
        Timetable::from_records(vec![
            CourseRecord::new("1", "월1A,1B"),
            CourseRecord::new("2", "월2A,2B"),
        ])
    }

    #[test]
    fn test_add_clear_course() {
        let mut table = timetable();
        assert!(table.add(CourseRecord::new("3", "월3A,3B")).is_ok());
        assert_eq!(table.len(), 3);
        assert!(table.contains("3"));
    }

    #[test]
    fn test_add_conflicting_course() {
        let mut table = timetable();
        let err = table.add(CourseRecord::new("3", "월1B,2A")).unwrap_err();
        assert_eq!(
            err,
            TimetableError::Conflict {
                course_id: "3".to_string(),
                conflicting_course_id: "1".to_string(),
                day: Day::Mon,
            }
        );
        assert!(err.is_conflict());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_add_duplicate_and_missing_id() {
        let mut table = timetable();
        assert_eq!(
            table.add(CourseRecord::new("1", "금1A")),
            Err(TimetableError::DuplicateCourse {
                course_id: "1".to_string()
            })
        );

        let mut anonymous = CourseRecord::new("x", "금1A");
        anonymous.id = None;
        assert_eq!(table.add(anonymous), Err(TimetableError::MissingId));
    }

    #[test]
    fn test_unverifiable_needs_explicit_add() {
        let mut table = timetable();
        let err = table.add(CourseRecord::new("9", "시간 미정")).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(table.len(), 2);

        table.add_unverified(CourseRecord::new("9", "시간 미정")).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.unparsable_courses().len(), 1);
    }

    #[test]
    fn test_add_unverified_still_checks_readable_schedules() {
        let mut table = timetable();
        let err = table
            .add_unverified(CourseRecord::new("3", "월1A"))
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_remove() {
        let mut table = timetable();
        let removed = table.remove("1").unwrap();
        assert_eq!(removed.id.as_deref(), Some("1"));
        assert!(table.remove("1").is_none());
        assert!(table.add(CourseRecord::new("3", "월1B")).is_ok());
    }

    #[test]
    fn test_occupancy() {
        let table = timetable();
        assert_eq!(
            table.occupancy_at(Day::Mon, 9 * 60 + 30),
            Occupancy::InClass {
                course_id: "1".to_string(),
                until_minute: 600,
            }
        );
        // course 1 ends exactly when course 2 starts
        assert_eq!(
            table.occupancy_at(Day::Mon, 600),
            Occupancy::InClass {
                course_id: "2".to_string(),
                until_minute: 660,
            }
        );
        assert_eq!(table.occupancy_at(Day::Mon, 660), Occupancy::Free);
        assert_eq!(table.occupancy_at(Day::Tue, 560), Occupancy::Free);
    }

    #[test]
    fn test_occupancy_at_datetime() {
        let table = timetable();
        // 2024-03-04 is a Monday
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        assert!(table.occupancy_at_datetime(monday).is_in_class());

        let saturday = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        assert_eq!(table.occupancy_at_datetime(saturday), Occupancy::Free);
    }

    #[test]
    fn test_view() {
        let table = timetable();
        let view = table.view(&GridLayoutEngine::default(), 540.0, 40.0, 60.0);
        assert_eq!(view.hours.len(), 10);
        assert_eq!(view.rects.len(), 2);

        let unmeasured = table.view(&GridLayoutEngine::default(), 0.0, 40.0, 60.0);
        assert_eq!(unmeasured.hours.len(), 10);
        assert!(unmeasured.rects.is_empty());
    }
}
