use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use fmtkit::{format, format_with_options, DateFormatOptions, Locale, TimeBase};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn test_format_date_ymd() {
    let result = format(at(2023, 1, 15, 9, 5, 3), Some("yyyy-MM-dd")).unwrap();
    assert_eq!(result.date, "2023-01-15");
}

#[test]
fn test_format_time() {
    let result = format(at(2023, 1, 15, 9, 5, 3), Some("HH:mm:ss")).unwrap();
    assert_eq!(result.date, "09:05:03");
}

#[test]
fn test_format_sunday_name() {
    let result = format(at(2023, 1, 15, 0, 0, 0), Some("w")).unwrap();
    assert_eq!(result.date, "星期日");
}

#[test]
fn test_format_every_weekday() {
    let expected = ["星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日"];
    for (offset, name) in expected.iter().enumerate() {
        // 2023-01-16 is a Monday
        let dt = at(2023, 1, 16 + offset as u32, 12, 0, 0);
        assert_eq!(format(dt, Some("w")).unwrap().date, *name);
    }
}

#[test]
fn test_format_default_pattern() {
    let result = format(at(2023, 12, 31, 23, 59, 59), None).unwrap();
    assert_eq!(result.date, "2023 12 31 23:59:59 星期日");
}

#[test]
fn test_format_chinese_literals() {
    let result = format(at(2023, 3, 8, 7, 0, 0), Some("yyyy年MM月dd日 HH时")).unwrap();
    assert_eq!(result.date, "2023年03月08日 07时");
}

#[test]
fn test_format_compact_pattern() {
    let result = format(at(2023, 3, 8, 7, 4, 9), Some("yyyyMMddHHmm")).unwrap();
    assert_eq!(result.date, "202303080704");
}

#[test]
fn test_format_quoted_literal() {
    let result = format(at(2023, 3, 8, 7, 4, 9), Some("dd 'of' MM")).unwrap();
    assert_eq!(result.date, "08 of 03");
}

#[test]
fn test_format_english_locale() {
    let opts = DateFormatOptions::default().with_locale(Locale::en_us());
    let result = format_with_options(at(2023, 1, 15, 0, 0, 0), Some("w, dd"), &opts).unwrap();
    assert_eq!(result.date, "Sunday, 15");
}

#[test]
fn test_format_epoch_millis() {
    let opts = DateFormatOptions::default().with_time_base(TimeBase::Utc);
    // 2023-01-15T09:05:03Z
    let millis = Utc
        .with_ymd_and_hms(2023, 1, 15, 9, 5, 3)
        .unwrap()
        .timestamp_millis();
    let result = format_with_options(millis, Some("yyyy-MM-dd HH:mm:ss w"), &opts).unwrap();
    assert_eq!(result.date, "2023-01-15 09:05:03 星期日");
}

#[test]
fn test_format_negative_epoch_millis() {
    let opts = DateFormatOptions::default().with_time_base(TimeBase::Utc);
    let result = format_with_options(-1_000_i64, Some("yyyy-MM-dd HH:mm:ss"), &opts).unwrap();
    assert_eq!(result.date, "1969-12-31 23:59:59");
}

#[test]
fn test_format_datetime_with_zone_uses_its_fields() {
    let dt = Utc.with_ymd_and_hms(2024, 7, 4, 18, 30, 0).unwrap();
    assert_eq!(format(dt, Some("MM/dd HH:mm")).unwrap().date, "07/04 18:30");
}

#[test]
fn test_format_naive_date_is_midnight() {
    let d = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
    assert_eq!(format(d, Some("dd HH:mm:ss")).unwrap().date, "04 00:00:00");
}

#[test]
fn test_format_is_idempotent() {
    let dt = at(2020, 2, 29, 12, 34, 56);
    let first = format(dt, None).unwrap();
    let second = format(dt, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_pattern_directly() {
    let pattern = fmtkit::DatePattern::parse("yyyy/MM/dd");
    let dt = Utc.with_ymd_and_hms(1999, 12, 31, 0, 0, 0).unwrap();
    let opts = DateFormatOptions::default();
    assert_eq!(pattern.render(&dt, &opts).unwrap(), "1999/12/31");
}
