use chrono::{Local, NaiveDate};
use guardias_calendar::config::{parse_date, parse_log_level, CalendarConfig};
use rstest::rstest;
use tracing::Level;

fn config(reference_date: Option<NaiveDate>) -> CalendarConfig {
    CalendarConfig {
        shifts_file: "shifts.json".into(),
        schedule_id: None,
        target_date: None,
        reference_date,
        log_level: Level::INFO,
    }
}

#[test]
fn test_reference_date_configured() {
    let day = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();

    assert_eq!(config(Some(day)).reference_date_or_today(), day);
}

#[test]
fn test_reference_date_defaults_to_today() {
    let today = Local::now().date_naive();
    let reference = config(None).reference_date_or_today();

    // Allow for the test running across midnight.
    assert!(reference == today || reference == today.succ_opt().unwrap());
}

#[rstest]
#[case("2025-11-20", true)]
#[case(" 2025-11-20 ", true)]
#[case("20/11/2025", false)]
#[case("2025-02-30", false)]
fn test_parse_date(#[case] value: &str, #[case] valid: bool) {
    assert_eq!(parse_date(value).is_ok(), valid);
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}
