//! shifttrack main entrypoint.

use shifttrack::run;
use shifttrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
