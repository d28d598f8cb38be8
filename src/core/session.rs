//! The edit loop: choose sheet, read rows, add or remove, write back, repeat;
//! then append totals and save the completed copy.

use crate::cli::questions::{self, Action};
use crate::config::Config;
use crate::core::add::{AddLogic, Recurrence};
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::models::{ClassEntry, TimeSlot};
use crate::sheet::finalize::append_total;
use crate::sheet::reader::{read_entries, rows_outside_month};
use crate::sheet::writer::write_entries;
use crate::sheet::{SheetLayout, Workbook};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::Prompter;
use crate::utils::date::{format_date, weekday_name};
use crate::utils::path::completed_file_name;
use crate::utils::time::format_hours;
use std::path::PathBuf;
use tracing::{debug, info as log_info, warn};

/// What a finished session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub output: PathBuf,
    /// Sheet name and total hours, in the order sheets were first edited
    pub totals: Vec<(String, f64)>,
}

pub struct Session<'a, P: Prompter> {
    workbook: Workbook,
    cfg: &'a Config,
    prompter: P,
    slots: Vec<TimeSlot>,
    edited: Vec<String>,
}

impl<'a, P: Prompter> Session<'a, P> {
    pub fn new(workbook: Workbook, cfg: &'a Config, prompter: P) -> AppResult<Self> {
        let slots = cfg.time_slots()?;

        Ok(Self {
            workbook,
            cfg,
            prompter,
            slots,
            edited: Vec::new(),
        })
    }

    /// Run cycles until the user is done, then finalize and save.
    pub fn run(mut self) -> AppResult<SessionReport> {
        loop {
            self.edit_cycle()?;

            if !questions::ask_more_changes(&mut self.prompter)? {
                break;
            }
        }

        self.finish()
    }

    /// One pass: sheet -> layout -> rows -> add/remove -> reconcile.
    pub fn edit_cycle(&mut self) -> AppResult<()> {
        let sheet_name = self.choose_sheet()?;

        let ws = self.workbook.sheet(&sheet_name)?;
        let layout = SheetLayout::locate(ws)?;
        let mut entries = read_entries(ws, &layout)?;

        for (row, date) in rows_outside_month(&entries, &layout) {
            warn!(row, %date, "row outside month bounds");
            warning(format!(
                "Row {} ({}) is outside the month shown in the sheet.",
                row,
                format_date(&date)
            ));
        }

        match questions::ask_action(&mut self.prompter)? {
            Action::Add => self.add_class(&layout, &mut entries)?,
            Action::Remove => self.remove_classes(&mut entries)?,
        }

        info("Updating Excel...");
        let ws = self.workbook.sheet_mut(&sheet_name)?;
        write_entries(ws, &layout, &mut entries);

        if !self.edited.contains(&sheet_name) {
            self.edited.push(sheet_name);
        }

        Ok(())
    }

    fn choose_sheet(&mut self) -> AppResult<String> {
        if let Some(name) = &self.cfg.sheet {
            // fallisce subito se il foglio non esiste
            self.workbook.sheet(name)?;
            return Ok(name.clone());
        }

        let names = self.workbook.sheet_names();
        if names.len() > 1 {
            questions::ask_sheet(&mut self.prompter, &names)
        } else {
            Ok(self.workbook.active_sheet_name())
        }
    }

    fn add_class(
        &mut self,
        layout: &SheetLayout,
        entries: &mut Vec<ClassEntry>,
    ) -> AppResult<()> {
        let class = questions::ask_new_class(&mut self.prompter, &self.slots)?;
        debug!(?class, "new class");

        let added = AddLogic::apply(entries, &class, &layout.bounds);

        if added == 0 {
            let bounds = format!(
                "{} - {}",
                format_date(&layout.bounds.start),
                format_date(&layout.bounds.end)
            );
            match &class.recurrence {
                Recurrence::Once(d) => warning(format!(
                    "{} is outside the month shown in the sheet ({}): nothing added.",
                    format_date(d),
                    bounds
                )),
                Recurrence::Repeating { days, .. } => warning(format!(
                    "No {} within the month shown in the sheet ({}): nothing added.",
                    days.iter()
                        .map(|d| weekday_name(*d))
                        .collect::<Vec<_>>()
                        .join("/"),
                    bounds
                )),
            }
        } else {
            success(format!("Added {} row(s) for '{}'.", added, class.name));
        }

        Ok(())
    }

    fn remove_classes(&mut self, entries: &mut Vec<ClassEntry>) -> AppResult<()> {
        if entries.is_empty() {
            warning("There are no classes to remove.");
            return Ok(());
        }

        let positions = questions::ask_rows_to_remove(&mut self.prompter, entries)?;
        let removed = DeleteLogic::apply(entries, &positions);

        success(format!("Removed {} row(s).", removed.len()));
        Ok(())
    }

    /// Append a total to every edited sheet and save under the completed name.
    pub fn finish(mut self) -> AppResult<SessionReport> {
        let mut totals = Vec::new();

        for name in &self.edited {
            let ws = self.workbook.sheet(name)?;
            let layout = SheetLayout::locate(ws)?;
            let total: f64 = read_entries(ws, &layout)?.iter().map(|e| e.hours).sum();

            let ws = self.workbook.sheet_mut(name)?;
            append_total(ws, &layout, &self.cfg.total_label);

            log_info!(sheet = %name, total, "total hours");
            info(format!("{}: {} hours in total.", name, format_hours(total)));
            totals.push((name.clone(), total));
        }

        let output = completed_file_name(self.workbook.path(), &self.cfg.completed_tag);
        self.workbook.save_as(&output)?;

        success(format!("Excel Updated: {}", output.display()));

        Ok(SessionReport { output, totals })
    }
}
