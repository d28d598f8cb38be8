//! AutoTimeSheet library root.
//! Exposes the CLI parser, the high-level run() function and the modules the
//! session is built from.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::DiagnosticLog;
use crate::core::{Session, SessionReport};
use crate::errors::AppResult;
use crate::sheet::Workbook;
use crate::ui::messages::header;
use crate::ui::prompt::{Prompter, TerminalPrompter};
use clap::Parser;
use std::path::Path;

/// Open `path`, run an interactive session on it and save the completed copy.
pub fn edit_workbook<P: Prompter>(path: &Path, cfg: &Config, prompter: P) -> AppResult<SessionReport> {
    let workbook = Workbook::open(path)?;
    Session::new(workbook, cfg, prompter)?.run()
}

/// Apply command line overrides on top of the loaded configuration
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    // --test: file di configurazione ignorato, solo default
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(tag) = &cli.tag {
        cfg.completed_tag = tag.clone();
    }
    if let Some(log_file) = &cli.log_file {
        cfg.log_file = log_file.clone();
    }
    cfg.sheet = cli.sheet.clone();

    cfg.validate()?;
    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = resolve_config(&cli)?;

    // 3️⃣ debug log, alive until the end of run()
    let log = DiagnosticLog::open(&cfg)?;
    tracing::debug!(file = %cli.file.display(), log = %log.path().display(), ?cfg, "starting");

    header("Welcome to AutoTimeSheet");
    let report = edit_workbook(&cli.file, &cfg, TerminalPrompter)?;
    tracing::debug!(?report, "session completed");

    log.close();
    Ok(())
}
