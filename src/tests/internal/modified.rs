use chrono::{DateTime, TimeZone, Utc};

use crate::format::{MODIFIED_PLACEHOLDER, format_modified};

#[test]
fn strips_fraction_and_zone() {
    // 2024-01-02T03:04:05.678Z
    let t = DateTime::from_timestamp_millis(1_704_164_645_678).unwrap();
    assert_eq!(format_modified(Some(&t)).as_deref(), Some("2024-01-02 03:04:05"));
}

#[test]
fn whole_seconds() {
    let t = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(format_modified(Some(&t)).as_deref(), Some("1999-12-31 23:59:59"));
}

#[test]
fn missing_time_uses_placeholder() {
    assert_eq!(format_modified(None), None);
    assert_eq!(MODIFIED_PLACEHOLDER, "&nbsp;&nbsp;-&nbsp;&nbsp;");
}

#[test]
fn out_of_range_year_uses_placeholder() {
    let t = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(format_modified(Some(&t)), None);

    let t = Utc.with_ymd_and_hms(-1, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(format_modified(Some(&t)), None);
}
