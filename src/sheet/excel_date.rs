// src/sheet/excel_date.rs

use chrono::{Duration, NaiveDate, NaiveTime};

/// Day zero of the 1900 date system as Excel counts it (leap-year bug included).
fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

/// Interpreta un seriale Excel come data (la parte oraria viene scartata).
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }

    excel_epoch().checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Interpreta la parte frazionaria di un seriale Excel come orario.
pub fn serial_to_time(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    // arrotonda al secondo: 0.3541666... deve dare 08:30:00
    let secs = (serial.fract() * 86_400.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs % 86_400, 0)
}

/// Convert a NaiveDate to its Excel serial day number.
pub fn date_to_serial(d: &NaiveDate) -> f64 {
    (*d - excel_epoch()).num_days() as f64
}
