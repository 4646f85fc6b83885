//! Bucket Examples - fixed inputs with known bucket bounds
//!
//! All text is read and written in UTC so results do not depend on the host zone.

use timeline_core::{
    diff_time_with, get_begin_time_of_time_line, get_end_time_of_time_line, is_available_scale,
    BucketZone, FnParser, TextCodec, Timeline, ONE_HOUR, ONE_MINUTE, ONE_SECOND,
};

fn codec() -> TextCodec {
    TextCodec::new(BucketZone::Utc)
}

fn begin(time: &str, scale: i64) -> String {
    Timeline::new(BucketZone::Utc)
        .begin_time(&time.to_string(), scale, &codec())
        .unwrap()
}

fn end(time: &str, scale: i64) -> String {
    Timeline::new(BucketZone::Utc)
        .end_time(&time.to_string(), scale, &codec())
        .unwrap()
}

#[test]
fn test_diff_of_same_time_is_zero() {
    let t = "2020-01-01 00:00:00.000".to_string();
    assert_eq!(diff_time_with(&t, &t, &codec()).unwrap(), 0);
}

#[test]
fn test_diff_time() {
    let start = "2020-01-01 00:00:00.000".to_string();
    let end = "2020-01-01 00:00:10.000".to_string();
    assert_eq!(diff_time_with(&start, &end, &codec()).unwrap(), 10 * ONE_SECOND);
}

#[test]
fn test_diff_time_with_custom_parser() {
    let start = "2020-01-01 00:00:00.000".to_string();
    let end = "2020-01-01 00:00:10.000".to_string();
    let constant = FnParser::new(|_: &String| Ok(1));
    assert_eq!(diff_time_with(&start, &end, &constant).unwrap(), 0);
}

#[test]
fn test_is_available_scale() {
    assert!(!is_available_scale(-1));
    assert!(!is_available_scale(0));
    assert!(is_available_scale(1));
    assert!(is_available_scale(ONE_SECOND));
    assert!(!is_available_scale(7 * ONE_SECOND));
    assert!(is_available_scale(ONE_MINUTE));
    assert!(is_available_scale(ONE_HOUR));
    assert!(!is_available_scale(5 * ONE_HOUR));
    assert!(is_available_scale(24 * ONE_HOUR));
    assert!(!is_available_scale(2 * 24 * ONE_HOUR));
}

#[test]
fn test_begin_millisecond() {
    let t = "2020-01-01 00:00:00.000";
    assert_eq!(begin(t, 1), t);
    assert_eq!(begin(t, 2), t);
    assert_eq!(begin("2020-01-01 00:00:00.457", 250), "2020-01-01 00:00:00.250");
}

#[test]
fn test_begin_second() {
    let t = "2020-01-01 00:00:10.000";
    assert_eq!(begin(t, ONE_SECOND), t);
    assert_eq!(begin(t, 3 * ONE_SECOND), "2020-01-01 00:00:09.000");
    assert_eq!(begin(t, 6 * ONE_SECOND), "2020-01-01 00:00:06.000");
}

#[test]
fn test_begin_minute() {
    let t = "2020-01-01 00:05:10.000";
    assert_eq!(begin(t, ONE_MINUTE), "2020-01-01 00:05:00.000");
    assert_eq!(begin(t, 3 * ONE_MINUTE), "2020-01-01 00:03:00.000");
    assert_eq!(begin(t, 6 * ONE_MINUTE), "2020-01-01 00:00:00.000");
}

#[test]
fn test_begin_hour() {
    let t = "2020-01-01 05:05:10.000";
    assert_eq!(begin(t, ONE_HOUR), "2020-01-01 05:00:00.000");
    assert_eq!(begin(t, 3 * ONE_HOUR), "2020-01-01 03:00:00.000");
    assert_eq!(begin(t, 6 * ONE_HOUR), "2020-01-01 00:00:00.000");
}

#[test]
fn test_begin_invalid_scale() {
    let err = Timeline::new(BucketZone::Utc)
        .begin_time(&"2020-01-01 05:05:10.000".to_string(), 5 * ONE_HOUR, &codec())
        .unwrap_err();
    assert!(err.is_invalid_scale());
}

#[test]
fn test_end_millisecond() {
    let t = "2020-01-01 00:00:00.000";
    assert_eq!(end(t, 1), "2020-01-01 00:00:00.001");
    assert_eq!(end(t, 2), "2020-01-01 00:00:00.002");
}

#[test]
fn test_end_second() {
    let t = "2020-01-01 00:00:10.000";
    assert_eq!(end(t, ONE_SECOND), "2020-01-01 00:00:11.000");
    assert_eq!(end(t, 3 * ONE_SECOND), "2020-01-01 00:00:12.000");
    assert_eq!(end("2020-01-01 00:00:56.000", 6 * ONE_SECOND), "2020-01-01 00:01:00.000");
}

#[test]
fn test_end_minute() {
    let t = "2020-01-01 00:05:10.000";
    assert_eq!(end(t, ONE_MINUTE), "2020-01-01 00:06:00.000");
    assert_eq!(end(t, 3 * ONE_MINUTE), "2020-01-01 00:06:00.000");
    assert_eq!(end("2020-01-01 00:55:10.000", 6 * ONE_MINUTE), "2020-01-01 01:00:00.000");
}

#[test]
fn test_end_hour() {
    let t = "2020-01-01 05:05:10.000";
    assert_eq!(end(t, ONE_HOUR), "2020-01-01 06:00:00.000");
    assert_eq!(end(t, 3 * ONE_HOUR), "2020-01-01 06:00:00.000");
    assert_eq!(end(t, 24 * ONE_HOUR), "2020-01-02 00:00:00.000");
}

#[test]
fn test_end_invalid_scale() {
    let err = Timeline::new(BucketZone::Utc)
        .end_time(&"2020-01-01 05:05:10.000".to_string(), 5 * ONE_HOUR, &codec())
        .unwrap_err();
    assert!(err.is_invalid_scale());
}

#[test]
fn test_tier_edges() {
    let t = "2020-01-01 13:47:39.871";
    // last millisecond-tier width / first second-tier width
    assert_eq!(begin(t, 500), "2020-01-01 13:47:39.500");
    assert_eq!(begin(t, ONE_SECOND), "2020-01-01 13:47:39.000");
    // last second-tier width / first minute-tier width
    assert_eq!(begin(t, 30 * ONE_SECOND), "2020-01-01 13:47:30.000");
    assert_eq!(begin(t, ONE_MINUTE), "2020-01-01 13:47:00.000");
    // last minute-tier width / first hour-tier width
    assert_eq!(begin(t, 30 * ONE_MINUTE), "2020-01-01 13:30:00.000");
    assert_eq!(begin(t, ONE_HOUR), "2020-01-01 13:00:00.000");
    // a full day is floored by the hour tier
    assert_eq!(begin(t, 24 * ONE_HOUR), "2020-01-01 00:00:00.000");
    assert_eq!(end(t, 24 * ONE_HOUR), "2020-01-02 00:00:00.000");
}

#[test]
fn test_fractional_unit_scale_truncates() {
    // 1.5 s buckets: 5 s -> 3 buckets of 1.5 s -> 4.5 s -> truncated to 4 s
    assert_eq!(begin("2020-01-01 00:00:05.999", 1_500), "2020-01-01 00:00:04.000");
    assert_eq!(end("2020-01-01 00:00:05.999", 1_500), "2020-01-01 00:00:05.500");
}

#[test]
fn test_native_datetime_defaults() {
    use chrono::{TimeZone, Utc};

    let t = Utc.with_ymd_and_hms(2020, 1, 1, 0, 5, 10).unwrap();
    let b = get_begin_time_of_time_line(&t, 3 * ONE_MINUTE).unwrap();
    let e = get_end_time_of_time_line(&t, 3 * ONE_MINUTE).unwrap();
    assert_eq!(b, Utc.with_ymd_and_hms(2020, 1, 1, 0, 3, 0).unwrap());
    assert_eq!(e, Utc.with_ymd_and_hms(2020, 1, 1, 0, 6, 0).unwrap());
}

#[test]
fn test_bucket_json() {
    let bucket = Timeline::new(BucketZone::Utc)
        .bucket(&"1970-01-01 01:30:00.000".to_string(), ONE_HOUR, &codec())
        .unwrap();
    let json = serde_json::to_value(bucket).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"begin": 3_600_000, "end": 7_200_000, "scale": 3_600_000})
    );
}
