use campus_timetable::period_engine::{periods, Conflict};
use campus_timetable::{
    building_name, color_of, find_all_conflicts, find_conflict, parse_course, parse_courses,
    records_from_json, render_grid, ConflictResult, Day, GridLayoutEngine, Timetable,
    TimetableConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

const STORE_RESPONSE: &str = r#"[
    {"id": "1", "name": "자료구조", "professor": "김교수", "location": "공학관 301호 (서울캠퍼스)", "time": "월1A,1B"},
    {"number": 2, "name": "운영체제", "professor": "이교수", "location": "정보관 B104", "schedule": "월2A,2B"}
]"#;

#[test]
fn test_candidate_overlapping_two_courses() {
    init_tracing();
    let records = records_from_json(STORE_RESPONSE).unwrap();
    let existing = parse_courses(&records);
    assert_eq!(existing.len(), 2);

    let candidate = records_from_json(r#"[{"id": "3", "time": "월1B,2A"}]"#).unwrap();
    let candidate = parse_course(&candidate[0]);
    assert_eq!(candidate.len(), 1);

    let first = find_conflict(&existing, &candidate);
    assert_eq!(first.conflicting_course(), Some("1"));

    let all = find_all_conflicts(&existing, &candidate);
    let a1b = periods::lookup("1B").unwrap();
    let a2a = periods::lookup("2A").unwrap();
    assert_eq!(
        all,
        vec![
            Conflict {
                course_id: "1".to_string(),
                day: Day::Mon,
                overlap_start: a1b,
                overlap_end: a2a,
            },
            Conflict {
                course_id: "2".to_string(),
                day: Day::Mon,
                overlap_start: a2a,
                overlap_end: a2a + 30,
            },
        ]
    );
}

#[test]
fn test_timetable_round_trip_through_store_shapes() {
    init_tracing();
    let mut table = Timetable::from_records(records_from_json(STORE_RESPONSE).unwrap());
    let candidate = records_from_json(r#"[{"number": 3, "time": "월1B,2A"}]"#).unwrap();
    let err = table.add(candidate[0].clone()).unwrap_err();
    assert!(err.is_conflict());

    table.remove("1");
    table.remove("2");
    table.add(candidate[0].clone()).unwrap();
    assert!(table.check(&candidate[0]).is_conflict());
}

#[test]
fn test_render_pipeline_is_repeatable() {
    init_tracing();
    let records = records_from_json(STORE_RESPONSE).unwrap();
    let engine = GridLayoutEngine::new(TimetableConfig::default()).unwrap();

    let first = render_grid(&engine, &records, 375.0, 30.0, 52.0);
    let second = render_grid(&engine, &records, 375.0, 30.0, 52.0);
    assert_eq!(first, second);
    assert_eq!(first.hours, (9..=18).collect::<Vec<_>>());
    assert_eq!(first.rects.len(), 2);
    assert_eq!(first.rects[0].color, color_of("1"));
    assert_eq!(first.rects[1].color, color_of("2"));
    assert!(first.rects[0].top < first.rects[1].top);
}

#[test]
fn test_detail_labels() {
    let records = records_from_json(STORE_RESPONSE).unwrap();
    let buildings: Vec<String> = records.iter().map(|r| building_name(&r.location)).collect();
    assert_eq!(buildings, vec!["공학관", "정보관"]);
}

#[test]
fn test_unreadable_schedule_is_not_silently_clear() {
    let records = records_from_json(r#"[{"id": "1", "time": "월1A"}, {"id": "9", "time": "월1A,99Z"}]"#)
        .unwrap();
    let existing = parse_course(&records[0]);
    let candidate = parse_course(&records[1]);
    assert_eq!(find_conflict(&existing, &candidate), ConflictResult::Unverifiable);
}
