use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for AutoTimeSheet
/// Interactive editor for a monthly class timesheet kept in Excel
#[derive(Parser, Debug)]
#[command(
    name = "autotimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Add or remove classes in an Excel timesheet, keep it sorted and total the hours",
    long_about = None
)]
pub struct Cli {
    /// Workbook (.xlsx) to edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Always edit this sheet instead of asking
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Tag inserted before the extension of the completed file
    #[arg(long = "tag", help = "Tag inserted in the output file name (default: [COMPLETED])")]
    pub tag: Option<String>,

    /// Override the debug log path
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Run in test mode (configuration file ignored)
    #[arg(long = "test", hide = true)]
    pub test: bool,
}
