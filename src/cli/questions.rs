//! The questions asked during a session.
//!
//! Each function turns free-form answers into typed values, re-asking until
//! the answer is acceptable.

use crate::core::del::DeleteLogic;
use crate::core::{NewClass, Recurrence};
use crate::errors::{AppError, AppResult};
use crate::models::{ClassEntry, TimeSlot};
use crate::ui::messages::warning;
use crate::ui::prompt::{Prompter, ask_parsed};
use crate::utils::date::{self, parse_weekdays};
use crate::utils::table::Table;
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveTime, Weekday};
use std::collections::BTreeSet;

pub const ADD_CLASS: &str = "Add a new class";
pub const REMOVE_CLASS: &str = "Remove a class";
pub const ONCE_OFF: &str = "Once off";
pub const REPEATING: &str = "Repeating";
pub const CUSTOM_TIME: &str = "Custom time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
}

pub fn ask_sheet<P: Prompter + ?Sized>(prompter: &mut P, names: &[String]) -> AppResult<String> {
    let choice = prompter.select(
        "Multiple sheets detected in excel document.\nPlease choose the sheet you want to work with",
        names,
    )?;

    names
        .get(choice)
        .cloned()
        .ok_or_else(|| AppError::InvalidSelection(format!("sheet #{}", choice + 1)))
}

pub fn ask_action<P: Prompter + ?Sized>(prompter: &mut P) -> AppResult<Action> {
    let items = [ADD_CLASS.to_string(), REMOVE_CLASS.to_string()];
    let choice = prompter.select("What would you like to do?", &items)?;
    Ok(if choice == 0 { Action::Add } else { Action::Remove })
}

/// Full description of the class to add: kind, name, date(s), time, days.
pub fn ask_new_class<P: Prompter + ?Sized>(
    prompter: &mut P,
    slots: &[TimeSlot],
) -> AppResult<NewClass> {
    let items = [ONCE_OFF.to_string(), REPEATING.to_string()];
    let repeating = prompter.select("What type of class would you like to add?", &items)? == 1;

    let name = ask_class_name(prompter)?;

    if repeating {
        let (from, to) = ask_from_to_dates(prompter)?;
        let (start, end) = ask_class_time(prompter, slots)?;
        let days = ask_working_days(prompter)?;

        Ok(NewClass {
            name,
            start,
            end,
            recurrence: Recurrence::Repeating { from, to, days },
        })
    } else {
        let day = ask_date(prompter, "Please enter class date")?;
        let (start, end) = ask_class_time(prompter, slots)?;

        Ok(NewClass {
            name,
            start,
            end,
            recurrence: Recurrence::Once(day),
        })
    }
}

pub fn ask_class_name<P: Prompter + ?Sized>(prompter: &mut P) -> AppResult<String> {
    ask_parsed(prompter, "Please enter class name", |s| {
        let name = s.trim();
        if name.is_empty() {
            Err(AppError::InvalidSelection("the class name cannot be empty".into()))
        } else {
            Ok(name.to_string())
        }
    })
}

pub fn ask_date<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> AppResult<NaiveDate> {
    ask_parsed(prompter, prompt, date::parse_date)
}

/// Starting and ending date; the end may not precede the start.
pub fn ask_from_to_dates<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> AppResult<(NaiveDate, NaiveDate)> {
    let from = ask_date(prompter, "Please enter class starting date")?;
    let to = ask_parsed(prompter, "Please enter class ending date", |s| {
        let d = date::parse_date(s)?;
        if d < from {
            Err(AppError::InvalidDate(format!(
                "{} is before the starting date {}",
                date::format_date(&d),
                date::format_date(&from)
            )))
        } else {
            Ok(d)
        }
    })?;
    Ok((from, to))
}

/// One of the preset slots, or a custom start/end pair.
pub fn ask_class_time<P: Prompter + ?Sized>(
    prompter: &mut P,
    slots: &[TimeSlot],
) -> AppResult<(NaiveTime, NaiveTime)> {
    let mut items: Vec<String> = slots.iter().map(TimeSlot::menu_label).collect();
    items.push(CUSTOM_TIME.to_string());

    let choice = prompter.select("Please choose class time", &items)?;

    if let Some(slot) = slots.get(choice) {
        return Ok((slot.start, slot.end));
    }

    let start = ask_parsed(prompter, "Please input start time", parse_time)?;
    let end = ask_parsed(prompter, "Please input end time", |s| {
        let t = parse_time(s)?;
        if t <= start {
            Err(AppError::InvalidTime(format!(
                "{} is not after the start time",
                s.trim()
            )))
        } else {
            Ok(t)
        }
    })?;

    Ok((start, end))
}

pub fn ask_working_days<P: Prompter + ?Sized>(prompter: &mut P) -> AppResult<Vec<Weekday>> {
    ask_parsed(
        prompter,
        "Please enter the name of the days you'll be working",
        |s| {
            let parsed = parse_weekdays(s);
            if !parsed.unknown.is_empty() {
                warning(format!("Ignoring unknown day(s): {}", parsed.unknown.join(", ")));
            }
            if parsed.days.is_empty() {
                Err(AppError::InvalidSelection(
                    "no valid day name (e.g. Monday, Tue)".into(),
                ))
            } else {
                Ok(parsed.days)
            }
        },
    )
}

/// Numbered listing of the rows, as shown before asking what to remove.
pub fn render_rows(entries: &[ClassEntry]) -> String {
    let mut table = Table::new(&["#", "Class", "Date", "Start", "End", "Hours"]);

    for (i, entry) in entries.iter().enumerate() {
        let mut row = vec![(i + 1).to_string()];
        row.extend(entry.to_row());
        table.add_row(row);
    }

    table.render()
}

pub fn ask_rows_to_remove<P: Prompter + ?Sized>(
    prompter: &mut P,
    entries: &[ClassEntry],
) -> AppResult<BTreeSet<usize>> {
    println!("{}", render_rows(entries));

    ask_parsed(
        prompter,
        "Enter the number(s) of the classes you want to remove",
        |s| DeleteLogic::parse_selection(s, entries.len()),
    )
}

pub fn ask_more_changes<P: Prompter + ?Sized>(prompter: &mut P) -> AppResult<bool> {
    prompter.confirm("Would you like to make additional changes to the excel?")
}
