//! Formatting rules applied to snapshot values before they are shown.
//!
//! All functions are pure. Malformed inputs never fail; they produce the
//! same artifacts a browser would show (`Invalid Date`, `NaN%`).

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Shown for timestamps that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// 12-hour clock with seconds, e.g. `3:04:05 PM`.
const TIME_OF_DAY: &str = "%-I:%M:%S %p";

/// Timestamp layouts without an offset. These are read as local wall-clock time.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Render a timestamp string as a local time of day.
pub fn format_time_of_day(raw: &str) -> String {
    format_time_of_day_in(raw, &Local)
}

/// Render a timestamp string as a time of day in `tz`.
pub fn format_time_of_day_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw, tz) {
        Some(dt) => dt.format(TIME_OF_DAY).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Parse the timestamp forms a snapshot may carry.
///
/// RFC 3339 values are converted into `tz`. Naive date-times are taken as
/// wall-clock time in `tz`. A bare date is midnight UTC.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

// ---------------------------------------------------------------------------
// Quota
// ---------------------------------------------------------------------------

/// Consumed quota in thousands, floored: `42500` → `42k`.
pub fn format_token_count(current_usage: i64) -> String {
    format!("{}k", current_usage.div_euclid(1000))
}

/// CSS width for the quota bar. The percentage is passed through unclamped.
pub fn progress_width(percentage: f64) -> String {
    format!("{}%", format_number(percentage))
}

pub fn format_percentage(percentage: f64) -> String {
    format_number(percentage)
}

/// Compact rendering of the daily limit: `1000000` → `1M`, `250000` → `250k`.
///
/// The unit is picked after rounding, so `999950` is `1M` rather than `1000k`.
pub fn format_quota_limit(daily_limit: i64) -> String {
    if daily_limit.unsigned_abs() < 1_000 {
        return daily_limit.to_string();
    }
    let value = daily_limit as f64;
    let thousands = round_one_decimal(value / 1_000.0);
    if thousands.abs() < 1_000.0 {
        format!("{}k", format_number(thousands))
    } else {
        format!("{}M", format_number(round_one_decimal(value / 1_000_000.0)))
    }
}

/// Shortest decimal rendering of a number, spelled the way a browser would.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        // Covers -0.0.
        "0".to_string()
    } else {
        format!("{value}")
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn token_count_floors_to_thousands() {
        assert_eq!(format_token_count(42_500), "42k");
        assert_eq!(format_token_count(999), "0k");
        assert_eq!(format_token_count(1_000), "1k");
        assert_eq!(format_token_count(0), "0k");
        assert_eq!(format_token_count(-1), "-1k");
    }

    #[test]
    fn progress_width_is_not_clamped() {
        assert_eq!(progress_width(37.0), "37%");
        assert_eq!(progress_width(37.5), "37.5%");
        assert_eq!(progress_width(150.0), "150%");
        assert_eq!(progress_width(-5.0), "-5%");
        assert_eq!(progress_width(f64::NAN), "NaN%");
        assert_eq!(progress_width(f64::INFINITY), "Infinity%");
        assert_eq!(progress_width(-0.0), "0%");
    }

    #[test]
    fn quota_limit_compacts() {
        assert_eq!(format_quota_limit(1_000_000), "1M");
        assert_eq!(format_quota_limit(1_500_000), "1.5M");
        assert_eq!(format_quota_limit(250_000), "250k");
        assert_eq!(format_quota_limit(500), "500");
        assert_eq!(format_quota_limit(0), "0");
    }

    #[test]
    fn quota_limit_picks_unit_after_rounding() {
        assert_eq!(format_quota_limit(999_950), "1M");
        assert_eq!(format_quota_limit(999_949), "999.9k");
        assert_eq!(format_quota_limit(999), "999");
        assert_eq!(format_quota_limit(-1_250_000), "-1.3M");
    }

    #[test]
    fn rfc3339_converts_into_target_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_time_of_day_in("2025-01-02T13:04:05Z", &tz), "3:04:05 PM");
        assert_eq!(format_time_of_day_in("2025-01-02T00:30:00Z", &Utc), "12:30:00 AM");
    }

    #[test]
    fn naive_timestamps_are_wall_clock() {
        assert_eq!(format_time_of_day_in("2025-01-02T09:15:00", &Utc), "9:15:00 AM");
        assert_eq!(format_time_of_day_in("2025-01-02 21:15:07.250", &Utc), "9:15:07 PM");
    }

    #[test]
    fn naive_timestamps_without_seconds() {
        assert_eq!(format_time_of_day_in("2025-01-02T10:00", &Utc), "10:00:00 AM");
        assert_eq!(format_time_of_day_in("2025-01-02 18:45", &Utc), "6:45:00 PM");
    }

    #[test]
    fn bare_date_is_utc_midnight() {
        assert_eq!(format_time_of_day_in("2025-01-02", &Utc), "12:00:00 AM");
    }

    #[test]
    fn garbage_is_invalid_date() {
        assert_eq!(format_time_of_day_in("", &Utc), INVALID_DATE);
        assert_eq!(format_time_of_day_in("yesterday", &Utc), INVALID_DATE);
        assert_eq!(format_time_of_day("not a time"), INVALID_DATE);
    }
}
