use autotimesheet::core::{AddLogic, DeleteLogic, NewClass, Recurrence};
use autotimesheet::errors::AppError;
use autotimesheet::models::ClassEntry;
use autotimesheet::utils::date::MonthBounds;
use chrono::{NaiveDate, NaiveTime, Weekday};
use std::collections::BTreeSet;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn march_2024() -> MonthBounds {
    MonthBounds::new(d(2024, 3, 1), d(2024, 3, 31)).unwrap()
}

fn once(name: &str, date: NaiveDate) -> NewClass {
    NewClass {
        name: name.to_string(),
        start: t(8, 30),
        end: t(11, 0),
        recurrence: Recurrence::Once(date),
    }
}

fn entry(name: &str, day: u32) -> ClassEntry {
    ClassEntry::new(name, d(2024, 3, day), t(13, 30), t(16, 0))
}

fn positions(p: &[usize]) -> BTreeSet<usize> {
    p.iter().copied().collect()
}

#[test]
fn test_once_off_inside_month_adds_one_row() {
    let rows = AddLogic::build(&once("Piano", d(2024, 3, 12)), &march_2024());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Piano");
    assert_eq!(rows[0].date, d(2024, 3, 12));
    assert_eq!(rows[0].hours, 2.5);
}

#[test]
fn test_once_off_on_month_edges_is_accepted() {
    let month = march_2024();
    assert_eq!(AddLogic::build(&once("A", d(2024, 3, 1)), &month).len(), 1);
    assert_eq!(AddLogic::build(&once("B", d(2024, 3, 31)), &month).len(), 1);
}

#[test]
fn test_once_off_outside_month_adds_nothing() {
    let month = march_2024();
    let mut entries = vec![entry("Chess", 5)];

    let added = AddLogic::apply(&mut entries, &once("Piano", d(2024, 4, 2)), &month);
    assert_eq!(added, 0);
    assert_eq!(entries.len(), 1);

    let added = AddLogic::apply(&mut entries, &once("Piano", d(2024, 2, 29)), &month);
    assert_eq!(added, 0);
    assert_eq!(entries, vec![entry("Chess", 5)]);
}

#[test]
fn test_repeating_class_is_clamped_to_the_month() {
    let class = NewClass {
        name: "Swim".to_string(),
        start: t(17, 0),
        end: t(18, 15),
        recurrence: Recurrence::Repeating {
            from: d(2024, 2, 15),
            to: d(2024, 4, 15),
            days: vec![Weekday::Sun],
        },
    };

    let rows = AddLogic::build(&class, &march_2024());
    let dates: Vec<u32> = rows.iter().map(|r| chrono::Datelike::day(&r.date)).collect();

    assert_eq!(dates, vec![3, 10, 17, 24, 31]);
    assert!(rows.iter().all(|r| r.hours == 1.25 && r.name == "Swim"));
}

#[test]
fn test_repeating_class_outside_month_adds_nothing() {
    let class = NewClass {
        name: "Swim".to_string(),
        start: t(17, 0),
        end: t(18, 0),
        recurrence: Recurrence::Repeating {
            from: d(2024, 4, 1),
            to: d(2024, 4, 30),
            days: vec![Weekday::Mon],
        },
    };

    assert!(AddLogic::build(&class, &march_2024()).is_empty());
}

#[test]
fn test_parse_selection_commas_spaces_and_duplicates() {
    assert_eq!(DeleteLogic::parse_selection("2", 3).unwrap(), positions(&[1]));
    assert_eq!(DeleteLogic::parse_selection("1, 3", 3).unwrap(), positions(&[0, 2]));
    assert_eq!(DeleteLogic::parse_selection("3 1 3", 3).unwrap(), positions(&[0, 2]));
    assert_eq!(DeleteLogic::parse_selection("1,,2,", 3).unwrap(), positions(&[0, 1]));
}

#[test]
fn test_parse_selection_rejects_bad_numbers() {
    for input in ["0", "4", "two", "", " , ", "-1", "1.5"] {
        match DeleteLogic::parse_selection(input, 3) {
            Err(AppError::InvalidSelection(_)) => {}
            other => panic!("{input:?} gave {other:?}"),
        }
    }
}

#[test]
fn test_removing_one_row_keeps_its_duplicate() {
    let mut entries = vec![entry("Yoga", 4), entry("Yoga", 4), entry("Chess", 6)];

    let removed = DeleteLogic::apply(&mut entries, &positions(&[0]));

    assert_eq!(removed, vec![entry("Yoga", 4)]);
    assert_eq!(entries, vec![entry("Yoga", 4), entry("Chess", 6)]);
}

#[test]
fn test_removing_several_rows_is_positional() {
    let mut entries = vec![
        entry("Yoga", 4),
        entry("Piano", 5),
        entry("Yoga", 4),
        entry("Chess", 6),
        entry("Piano", 5),
    ];

    // rimuove la prima Yoga e il primo Piano: i duplicati restano
    let removed = DeleteLogic::apply(&mut entries, &positions(&[0, 1]));

    assert_eq!(removed.len(), 2);
    assert_eq!(
        entries,
        vec![entry("Yoga", 4), entry("Chess", 6), entry("Piano", 5)]
    );
}

#[test]
fn test_removing_every_row() {
    let mut entries = vec![entry("Yoga", 4), entry("Piano", 5)];
    DeleteLogic::apply(&mut entries, &positions(&[0, 1]));
    assert!(entries.is_empty());
}
