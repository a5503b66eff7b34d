//! Display helpers for weather values, Vietnamese locale.

use chrono::{DateTime, Datelike, NaiveDateTime};

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Short weekday labels, Sunday first.
const WEEKDAYS: [&str; 7] = ["CN", "T2", "T3", "T4", "T5", "T6", "T7"];

/// High-resolution icon for an OpenWeather icon code like "10d".
pub fn icon_url(icon_code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon_code}@4x.png")
}

/// `HH:MM` at the city's local time.
///
/// `timezone` is the city's UTC offset in seconds.
pub fn format_time(timestamp: i64, timezone: i64) -> String {
    DateTime::from_timestamp(timestamp + timezone, 0)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

fn parse_dt_txt(dt_txt: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(dt_txt, DT_TXT_FORMAT).ok()
}

/// Weekday label ("CN", "T2".."T7") for a forecast `dt_txt`.
pub fn day_of_week(dt_txt: &str) -> Option<&'static str> {
    let dt = parse_dt_txt(dt_txt)?;
    Some(WEEKDAYS[dt.weekday().num_days_from_sunday() as usize])
}

/// Short date such as "T2, 15 thg 1".
pub fn format_date(dt_txt: &str) -> Option<String> {
    let dt = parse_dt_txt(dt_txt)?;
    let weekday = WEEKDAYS[dt.weekday().num_days_from_sunday() as usize];
    Some(format!("{weekday}, {} thg {}", dt.day(), dt.month()))
}

/// Uppercase the first character, leave the rest alone.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Round a reading for display. Halves round up, so -2.5 shows as -2.
pub fn round_temp(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
