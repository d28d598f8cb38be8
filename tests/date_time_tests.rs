use autotimesheet::errors::AppError;
use autotimesheet::utils::date::{
    DATE_FORMATS, MonthBounds, format_date, parse_date, parse_weekdays, working_dates,
};
use autotimesheet::utils::path::completed_file_name;
use autotimesheet::utils::time::{
    format_hours, format_time, hours_between, parse_time, parse_time_range,
};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use std::path::{Path, PathBuf};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn march_2024() -> MonthBounds {
    MonthBounds::new(d(2024, 3, 1), d(2024, 3, 31)).unwrap()
}

#[test]
fn test_every_accepted_date_spelling_reformats_to_the_same_day() {
    let target = d(2024, 3, 4);

    for input in [
        "04/03/2024",
        "04/03/24",
        "4/3/2024",
        "04/Mar/2024",
        "04/March/24",
        "04-03-2024",
        "04-mar-2024",
        "04-March-2024",
        "04.03.2024",
        "04.Mar.24",
        "04.MARCH.2024",
        "  04/03/2024 ",
    ] {
        let parsed = parse_date(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        assert_eq!(parsed, target, "input {input}");
        assert_eq!(format_date(&parsed), "04/03/2024");
    }
}

#[test]
fn test_two_digit_year_is_not_year_24() {
    assert_eq!(parse_date("31/12/99").unwrap().year(), 1999);
    assert_eq!(parse_date("01/01/24").unwrap().year(), 2024);
}

#[test]
fn test_date_format_list_is_explicit_and_complete() {
    assert_eq!(DATE_FORMATS.len(), 18);
    assert_eq!(DATE_FORMATS[0], "%d/%m/%y");
    assert!(DATE_FORMATS.iter().all(|f| f.starts_with("%d")));
}

#[test]
fn test_unparseable_date_is_an_explicit_error() {
    for input in ["", "2024-03-04", "04/03", "32/03/2024", "04 03 2024", "04/03-2024"] {
        match parse_date(input) {
            Err(AppError::InvalidDate(_)) => {}
            other => panic!("{input:?} gave {other:?}"),
        }
    }
}

#[test]
fn test_time_spellings() {
    assert_eq!(parse_time("08:30").unwrap(), t(8, 30));
    assert_eq!(parse_time("8:30").unwrap(), t(8, 30));
    assert_eq!(parse_time("08.30").unwrap(), t(8, 30));
    assert_eq!(parse_time("01:30PM").unwrap(), t(13, 30));
    assert_eq!(parse_time("1.30pm").unwrap(), t(13, 30));
    assert_eq!(parse_time("11:00AM").unwrap(), t(11, 0));
    assert_eq!(parse_time("16:00:00").unwrap(), t(16, 0));
    assert_eq!(format_time(&t(9, 5)), "09:05");

    assert!(matches!(parse_time("25:00"), Err(AppError::InvalidTime(_))));
    assert!(matches!(parse_time("noon"), Err(AppError::InvalidTime(_))));
}

#[test]
fn test_hours_are_end_minus_start_in_fractional_hours() {
    assert_eq!(hours_between(t(8, 30), t(11, 0)), 2.5);
    assert_eq!(hours_between(t(13, 30), t(16, 0)), 2.5);
    assert_eq!(hours_between(t(9, 0), t(9, 45)), 0.75);
    assert_eq!(hours_between(t(7, 10), t(8, 0)), 50.0 / 60.0);

    // i secondi contano
    let start = parse_time("08:30:30").unwrap();
    let end = parse_time("09:00:00").unwrap();
    assert_eq!(hours_between(start, end), 1770.0 / 3600.0);

    assert_eq!(format_hours(2.5), "2.5");
    assert_eq!(format_hours(3.0), "3");
    assert_eq!(format_hours(50.0 / 60.0), "0.83");
}

#[test]
fn test_time_range_must_move_forward() {
    assert_eq!(parse_time_range("08:30-11:00").unwrap(), (t(8, 30), t(11, 0)));
    assert!(parse_time_range("11:00-08:30").is_err());
    assert!(parse_time_range("11:00").is_err());
}

#[test]
fn test_month_bounds_clamp_and_contains() {
    let month = march_2024();

    assert!(month.contains(&d(2024, 3, 1)));
    assert!(month.contains(&d(2024, 3, 31)));
    assert!(!month.contains(&d(2024, 4, 1)));
    assert!(!month.contains(&d(2024, 2, 29)));

    assert_eq!(
        month.clamp(d(2024, 2, 20), d(2024, 3, 10)),
        Some((d(2024, 3, 1), d(2024, 3, 10)))
    );
    assert_eq!(
        month.clamp(d(2024, 3, 20), d(2024, 5, 1)),
        Some((d(2024, 3, 20), d(2024, 3, 31)))
    );
    assert_eq!(month.clamp(d(2024, 4, 2), d(2024, 4, 20)), None);

    assert!(MonthBounds::new(d(2024, 3, 31), d(2024, 3, 1)).is_err());
}

#[test]
fn test_working_dates_match_weekdays_and_miss_nothing() {
    let month = march_2024();
    let days = [Weekday::Tue, Weekday::Sat];

    for (from, to) in [
        (d(2024, 2, 1), d(2024, 4, 30)),
        (d(2024, 3, 5), d(2024, 3, 5)),
        (d(2024, 3, 6), d(2024, 3, 8)),
        (d(2024, 3, 10), d(2024, 3, 23)),
    ] {
        let Some((first, last)) = month.clamp(from, to) else {
            panic!("range {from}..{to} should overlap March");
        };
        let dates = working_dates(first, last, &days);

        // (a) dentro range e mese, (b) giorno giusto
        for date in &dates {
            assert!(*date >= from && *date <= to);
            assert!(month.contains(date));
            assert!(days.contains(&date.weekday()));
        }

        // nessuna data omessa
        let expected = first
            .iter_days()
            .take_while(|x| *x <= last)
            .filter(|x| days.contains(&x.weekday()))
            .count();
        assert_eq!(dates.len(), expected);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_working_dates_include_both_ends() {
    // 4 and 15 March 2024 are a Monday and a Friday
    let dates = working_dates(d(2024, 3, 4), d(2024, 3, 15), &[Weekday::Mon, Weekday::Fri]);
    assert_eq!(
        dates,
        vec![d(2024, 3, 4), d(2024, 3, 8), d(2024, 3, 11), d(2024, 3, 15)]
    );
}

#[test]
fn test_weekday_names_commas_spaces_and_abbreviations() {
    let parsed = parse_weekdays("Monday, wed ,FRI");
    assert_eq!(parsed.days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    assert!(parsed.unknown.is_empty());

    let parsed = parse_weekdays("tue  thursday tue");
    assert_eq!(parsed.days, vec![Weekday::Tue, Weekday::Thu]);

    let parsed = parse_weekdays("Monday, Funday,");
    assert_eq!(parsed.days, vec![Weekday::Mon]);
    assert_eq!(parsed.unknown, vec!["Funday".to_string()]);

    assert!(parse_weekdays("   ").days.is_empty());
}

#[test]
fn test_completed_file_name_inserts_tag_before_extension() {
    assert_eq!(
        completed_file_name(Path::new("march.xlsx"), "[COMPLETED]"),
        PathBuf::from("march[COMPLETED].xlsx")
    );
    assert_eq!(
        completed_file_name(Path::new("/tmp/sheets/timesheet.v2.xlsx"), "[DONE]"),
        PathBuf::from("/tmp/sheets/timesheet.v2[DONE].xlsx")
    );
    assert_eq!(
        completed_file_name(Path::new("timesheet"), "[COMPLETED]"),
        PathBuf::from("timesheet[COMPLETED]")
    );
}
