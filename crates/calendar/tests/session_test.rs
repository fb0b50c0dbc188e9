use chrono::NaiveDate;
use guardias_calendar::{mock::MockShiftSource, session::CalendarSession};
use guardias_core::models::shift::ShiftRecord;
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn shift(id: i64, day: NaiveDate, start: &str, end: &str) -> ShiftRecord {
    ShiftRecord {
        id,
        date: day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        area_name: "Central".to_string(),
        shift_type: "guardia".to_string(),
        agent_id: id * 10,
        schedule_id: None,
    }
}

#[test]
fn test_new_session_is_empty() {
    let session = CalendarSession::new();

    assert!(session.shifts().is_empty());
    assert!(session.day_groups().is_empty());
    assert!(session.groups_on(date(2025, 11, 20)).is_empty());
}

#[test]
fn test_replace_shifts_recomputes_groups() {
    let mut session = CalendarSession::new();
    session.replace_shifts(vec![shift(1, date(2025, 11, 20), "22:00", "06:00")]);

    assert_eq!(session.groups_on(date(2025, 11, 21)).len(), 1);

    session.replace_shifts(vec![shift(2, date(2025, 11, 20), "08:00", "16:00")]);

    assert!(session.groups_on(date(2025, 11, 21)).is_empty());
    assert_eq!(session.groups_on(date(2025, 11, 20))[0].agents[0].id, 2);
}

#[test]
fn test_shifts_on_includes_overnight_coverage() {
    let mut session = CalendarSession::new();
    session.replace_shifts(vec![
        shift(1, date(2025, 11, 19), "20:00", "08:00"),
        shift(2, date(2025, 11, 20), "08:00", "20:00"),
        shift(3, date(2025, 11, 21), "08:00", "20:00"),
    ]);

    let ids: Vec<i64> = session
        .shifts_on(date(2025, 11, 20))
        .iter()
        .map(|shift| shift.id)
        .collect();

    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_refresh_replaces_state() {
    let mut source = MockShiftSource::new();
    source
        .expect_all_shifts()
        .times(1)
        .returning(|| Ok(vec![shift(5, date(2025, 11, 20), "08:00", "16:00")]));

    let mut session = CalendarSession::new();
    tokio_test::block_on(session.refresh(&source)).expect("refresh should succeed");

    assert_eq!(session.shifts().len(), 1);
    assert_eq!(session.day_groups().len(), 1);
}

#[test]
fn test_refresh_failure_keeps_previous_state() {
    let mut source = MockShiftSource::new();
    source
        .expect_all_shifts()
        .times(1)
        .returning(|| Err(eyre::eyre!("backend unavailable")));

    let mut session = CalendarSession::new();
    session.replace_shifts(vec![shift(1, date(2025, 11, 20), "08:00", "16:00")]);

    let result = tokio_test::block_on(session.refresh(&source));

    assert!(result.is_err());
    assert_eq!(session.shifts().len(), 1);
    assert_eq!(session.groups_on(date(2025, 11, 20)).len(), 1);
}
