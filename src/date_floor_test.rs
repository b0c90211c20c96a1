use super::*;
use crate::dom::testing::RecordingElement;

#[test]
fn calendar_date_from_full_timestamp() {
    assert_eq!(iso_calendar_date("2026-10-16T08:30:00.000Z"), Some("2026-10-16"));
}

#[test]
fn calendar_date_from_bare_date() {
    assert_eq!(iso_calendar_date("1999-12-31"), Some("1999-12-31"));
}

#[test]
fn calendar_date_rejects_expanded_years() {
    assert_eq!(iso_calendar_date("+275760-09-13T00:00:00.000Z"), None);
    assert_eq!(iso_calendar_date("-000001-01-01T00:00:00.000Z"), None);
}

#[test]
fn calendar_date_rejects_malformed_input() {
    assert_eq!(iso_calendar_date(""), None);
    assert_eq!(iso_calendar_date("Invalid Date"), None);
    assert_eq!(iso_calendar_date("2026/10/16T00:00:00Z"), None);
    assert_eq!(iso_calendar_date("2026-1-16T00:00:00Z"), None);
    assert_eq!(iso_calendar_date("2026-13-01T00:00:00Z"), None);
    assert_eq!(iso_calendar_date("2026-00-10T00:00:00Z"), None);
    assert_eq!(iso_calendar_date("2026-10-32T00:00:00Z"), None);
    assert_eq!(iso_calendar_date("2026-10-00T00:00:00Z"), None);
}

#[test]
fn present_input_gets_min_set_to_today() {
    let input = RecordingElement::new();
    let outcome = apply_date_floor(Some(&input), || "2026-10-16T23:59:59.999Z".to_owned())
        .expect("apply should succeed");
    assert_eq!(outcome, DateFloor::Applied("2026-10-16".to_owned()));
    assert_eq!(input.attribute("min").as_deref(), Some("2026-10-16"));
    assert_eq!(input.write_count(), 1);
}

#[test]
fn absent_input_is_skipped_without_reading_clock() {
    let mut clock_read = false;
    let outcome = apply_date_floor::<RecordingElement>(None, || {
        clock_read = true;
        String::new()
    })
    .expect("absent input is not an error");
    assert_eq!(outcome, DateFloor::Skipped);
    assert!(!clock_read);
}

#[test]
fn unusable_clock_value_is_reported_and_nothing_written() {
    let input = RecordingElement::new();
    let err = apply_date_floor(Some(&input), || "Invalid Date".to_owned()).unwrap_err();
    assert!(matches!(err, FxError::Clock(ref v) if v == "Invalid Date"));
    assert_eq!(input.write_count(), 0);
}

#[test]
fn rejected_attribute_write_is_propagated() {
    let input = RecordingElement::failing("read-only");
    let err = apply_date_floor(Some(&input), || "2026-10-16T00:00:00.000Z".to_owned()).unwrap_err();
    assert!(matches!(err, FxError::Dom(ref m) if m == "read-only"));
}

#[test]
fn reapplying_overwrites_with_new_day() {
    let input = RecordingElement::new();
    apply_date_floor(Some(&input), || "2026-10-16T00:00:00.000Z".to_owned()).expect("first apply");
    apply_date_floor(Some(&input), || "2026-10-17T00:00:00.000Z".to_owned()).expect("second apply");
    assert_eq!(input.attribute("min").as_deref(), Some("2026-10-17"));
}
