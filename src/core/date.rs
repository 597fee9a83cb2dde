//! `YYYYMMDD` date normalization.
//!
//! Parsing never fails loudly: anything that is not an 8-digit string naming
//! a real calendar day becomes `None`.

use chrono::NaiveDate;
use serde_json::Value;

const COMPACT_DATE_LEN: usize = 8;

/// Parse a compact `YYYYMMDD` string.
pub fn parse_compact_date(text: &str) -> Option<NaiveDate> {
    if text.len() != COMPACT_DATE_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = text[0..4].parse().ok()?;
    let month: u32 = text[4..6].parse().ok()?;
    let day: u32 = text[6..8].parse().ok()?;

    // 年份 0000 不是有效的西元日期
    if year < 1 {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a raw JSON value; non-strings are treated as absent.
pub fn parse_date_value(value: &Value) -> Option<NaiveDate> {
    value.as_str().and_then(parse_compact_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_valid_compact_dates() {
        assert_eq!(parse_compact_date("20200101"), ymd(2020, 1, 1));
        assert_eq!(parse_compact_date("19991231"), ymd(1999, 12, 31));
        assert_eq!(parse_compact_date("20240229"), ymd(2024, 2, 29));
    }

    #[test]
    fn test_invalid_calendar_values_are_absent() {
        assert_eq!(parse_compact_date("20201301"), None);
        assert_eq!(parse_compact_date("20200230"), None);
        assert_eq!(parse_compact_date("20230229"), None);
        assert_eq!(parse_compact_date("20200100"), None);
        assert_eq!(parse_compact_date("00000101"), None);
    }

    #[test]
    fn test_wrong_shapes_are_absent() {
        assert_eq!(parse_compact_date(""), None);
        assert_eq!(parse_compact_date("2020011"), None);
        assert_eq!(parse_compact_date("202001011"), None);
        assert_eq!(parse_compact_date("2020-01-01"), None);
        assert_eq!(parse_compact_date("2020O101"), None);
        assert_eq!(parse_compact_date("이천이십년일월일"), None);
    }

    #[test]
    fn test_non_string_values_are_absent() {
        assert_eq!(parse_date_value(&json!(20200101)), None);
        assert_eq!(parse_date_value(&json!(null)), None);
        assert_eq!(parse_date_value(&json!(true)), None);
        assert_eq!(parse_date_value(&json!(["20200101"])), None);
        assert_eq!(parse_date_value(&json!("20200101")), ymd(2020, 1, 1));
    }
}
