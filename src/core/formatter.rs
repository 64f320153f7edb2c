use chrono::{DateTime, Datelike, FixedOffset, Offset, TimeDelta, TimeZone, Timelike};

use crate::utils::error::{DateError, Result};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// 0 到 9 之間的數字補一個前導零，其他值原樣輸出
pub fn padded_number_string(number: i64) -> String {
    if (0..=9).contains(&number) {
        format!("0{}", number)
    } else {
        number.to_string()
    }
}

/// 例如: 2017-07-29
pub fn formatted_date_short<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!(
        "{}-{}-{}",
        date.year(),
        padded_number_string(i64::from(date.month())),
        padded_number_string(i64::from(date.day()))
    )
}

/// 例如: 2017-07-29T16:01:02+12:00
pub fn formatted_date_long<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    // 符號取自秒數，避免不足一分鐘的負偏移變成 +00:00
    let offset_seconds = date.offset().fix().local_minus_utc();

    format!(
        "{}T{}:{}:{}{}",
        formatted_date_short(date),
        padded_number_string(i64::from(date.hour())),
        padded_number_string(i64::from(date.minute())),
        padded_number_string(i64::from(date.second())),
        offset_string(offset_seconds < 0, offset_seconds.unsigned_abs() / 60)
    )
}

/// `±hh:mm`，正值代表在 UTC 之前（東邊）
///
/// 符號只決定一次，時與分都取絕對值再補零，所以 -30 分鐘會是 `-00:30`。
pub fn formatted_utc_offset(offset_minutes: i32) -> String {
    offset_string(offset_minutes < 0, offset_minutes.unsigned_abs())
}

fn offset_string(negative: bool, magnitude: u32) -> String {
    let sign = if negative { '-' } else { '+' };

    format!(
        "{}{}:{}",
        sign,
        padded_number_string(i64::from(magnitude / 60)),
        padded_number_string(i64::from(magnitude % 60))
    )
}

/// 以 `days * 86_400_000` 毫秒平移日期，回傳新的值，不修改輸入
///
/// 小數與負數天數都可以。偏移先加到毫秒時間戳上再向零截斷（截斷的是結果，
/// 不是偏移量），所以 `0.7 * 86_400_000 = 60479999.99999999` 仍落在整毫秒上。
/// 輸入不足一毫秒的部分原樣保留。
/// 非有限值或超出可表示範圍時回傳 [`DateError::InvalidDayOffset`]。
pub fn add_days_to_date<Tz: TimeZone>(date: &DateTime<Tz>, days: f64) -> Result<DateTime<Tz>> {
    let invalid = || DateError::InvalidDayOffset { days };

    let offset = days * MILLIS_PER_DAY;
    if !offset.is_finite() {
        return Err(invalid());
    }

    let base = date.timestamp_millis();
    let target = (base as f64 + offset).trunc();
    if target.abs() >= i64::MAX as f64 {
        return Err(invalid());
    }

    let delta_millis = (target as i64).checked_sub(base).ok_or_else(invalid)?;
    let delta = TimeDelta::try_milliseconds(delta_millis).ok_or_else(invalid)?;
    date.clone().checked_add_signed(delta).ok_or_else(invalid)
}

/// 解析 `+12:00`、`-05:30` 這類 UTC 偏移
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset> {
    value
        .trim()
        .parse::<FixedOffset>()
        .map_err(|_| DateError::InvalidUtcOffset {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn auckland_winter() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(12 * 3600)
            .unwrap()
            .with_ymd_and_hms(2017, 7, 29, 16, 1, 2)
            .unwrap()
    }

    #[test]
    fn test_padded_number_string() {
        assert_eq!(padded_number_string(5), "05");
        assert_eq!(padded_number_string(15), "15");
        assert_eq!(padded_number_string(0), "00");
        assert_eq!(padded_number_string(9), "09");
        assert_eq!(padded_number_string(10), "10");
        assert_eq!(padded_number_string(123), "123");
        assert_eq!(padded_number_string(-5), "-5");
    }

    #[test]
    fn test_formatted_date_short() {
        assert_eq!(formatted_date_short(&auckland_winter()), "2017-07-29");

        let new_year = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(formatted_date_short(&new_year), "2020-01-01");
    }

    #[test]
    fn test_formatted_date_long() {
        assert_eq!(
            formatted_date_long(&auckland_winter()),
            "2017-07-29T16:01:02+12:00"
        );

        let utc = Utc.with_ymd_and_hms(2017, 12, 3, 4, 5, 6).unwrap();
        assert_eq!(formatted_date_long(&utc), "2017-12-03T04:05:06+00:00");
    }

    #[test]
    fn test_formatted_date_long_negative_offset() {
        let newfoundland = FixedOffset::west_opt(3 * 3600 + 30 * 60)
            .unwrap()
            .with_ymd_and_hms(2017, 7, 29, 9, 0, 0)
            .unwrap();
        assert_eq!(
            formatted_date_long(&newfoundland),
            "2017-07-29T09:00:00-03:30"
        );
    }

    #[test]
    fn test_formatted_utc_offset() {
        assert_eq!(formatted_utc_offset(720), "+12:00");
        assert_eq!(formatted_utc_offset(0), "+00:00");
        assert_eq!(formatted_utc_offset(-30), "-00:30");
        assert_eq!(formatted_utc_offset(-330), "-05:30");
        assert_eq!(formatted_utc_offset(345), "+05:45");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let date = auckland_winter();
        assert_eq!(formatted_date_short(&date), formatted_date_short(&date));
        assert_eq!(formatted_date_long(&date), formatted_date_long(&date));
    }

    #[test]
    fn test_add_days_to_date() {
        let date = auckland_winter();

        let tomorrow = add_days_to_date(&date, 1.0).unwrap();
        assert_eq!(
            tomorrow.timestamp_millis() - date.timestamp_millis(),
            86_400_000
        );
        assert_eq!(formatted_date_long(&tomorrow), "2017-07-30T16:01:02+12:00");

        let yesterday = add_days_to_date(&date, -1.0).unwrap();
        assert_eq!(
            date.timestamp_millis() - yesterday.timestamp_millis(),
            86_400_000
        );

        assert_eq!(add_days_to_date(&date, 0.0).unwrap(), date);
    }

    #[test]
    fn test_add_fractional_days() {
        let date = auckland_winter();

        let later = add_days_to_date(&date, 0.5).unwrap();
        assert_eq!(formatted_date_long(&later), "2017-07-30T04:01:02+12:00");

        let earlier = add_days_to_date(&date, -0.25).unwrap();
        assert_eq!(formatted_date_long(&earlier), "2017-07-29T10:01:02+12:00");
    }

    #[test]
    fn test_add_fractional_days_lands_on_whole_milliseconds() {
        let date = auckland_winter();

        let cases = [
            (0.7, 60_480_000, "2017-07-30T08:49:02+12:00"),
            (-0.7, -60_480_000, "2017-07-28T23:13:02+12:00"),
            (1.4, 120_960_000, "2017-07-31T01:37:02+12:00"),
            (2.3, 198_720_000, "2017-07-31T23:13:02+12:00"),
        ];

        for (days, millis, expected) in cases {
            let shifted = add_days_to_date(&date, days).unwrap();
            assert_eq!(
                shifted.timestamp_millis() - date.timestamp_millis(),
                millis,
                "days = {}",
                days
            );
            assert_eq!(formatted_date_long(&shifted), expected);
        }
    }

    #[test]
    fn test_add_days_keeps_sub_millisecond_part() {
        let date = auckland_winter() + TimeDelta::nanoseconds(250_000);
        let shifted = add_days_to_date(&date, 0.7).unwrap();

        assert_eq!(shifted.timestamp_subsec_nanos(), 250_000);
        assert_eq!(
            shifted.timestamp_millis() - date.timestamp_millis(),
            60_480_000
        );
    }

    #[test]
    fn test_sub_minute_negative_offset_keeps_sign() {
        let date = FixedOffset::west_opt(30)
            .unwrap()
            .with_ymd_and_hms(2017, 7, 29, 16, 1, 2)
            .unwrap();
        assert!(formatted_date_long(&date).ends_with("-00:00"));

        let east = FixedOffset::east_opt(30)
            .unwrap()
            .with_ymd_and_hms(2017, 7, 29, 16, 1, 2)
            .unwrap();
        assert!(formatted_date_long(&east).ends_with("+00:00"));
    }

    #[test]
    fn test_add_days_rejects_invalid_offsets() {
        let date = auckland_winter();
        assert!(add_days_to_date(&date, f64::NAN).is_err());
        assert!(add_days_to_date(&date, f64::INFINITY).is_err());
        assert!(add_days_to_date(&date, 1e300).is_err());
        assert!(add_days_to_date(&date, 1e12).is_err());
    }

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(
            parse_utc_offset("+12:00").unwrap(),
            FixedOffset::east_opt(12 * 3600).unwrap()
        );
        assert_eq!(
            parse_utc_offset("-05:30").unwrap(),
            FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap()
        );
        assert!(parse_utc_offset("nonsense").is_err());
        assert!(parse_utc_offset("").is_err());
    }
}
