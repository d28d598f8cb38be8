//! AutoTimeSheet main entrypoint.

use autotimesheet::run;
use autotimesheet::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
