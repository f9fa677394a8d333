use crate::cli::commands::open_manager;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::header;
use crate::utils::format_hours;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { week } = cmd {
        let manager = open_manager(cfg)?;

        let entries: Vec<&TimeEntry> = if *week {
            header(format!("Week {}", manager.current_week_range_label()));
            manager.current_week_entries()
        } else {
            manager.entries().iter().collect()
        };

        if entries.is_empty() {
            println!("No time entries yet");
            return Ok(());
        }

        let mut table = Table::new(&["ID", "DATE", "START", "END", "HOURS"]).min_width(4, 9);
        for e in &entries {
            table.add_row(entry_row(e));
        }
        print!("{}", table.render());

        let total: f64 = entries.iter().map(|e| e.hours()).sum();
        println!("\n{} shifts, {} hrs", entries.len(), format_hours(total));
    }

    Ok(())
}

fn entry_row(e: &TimeEntry) -> Vec<String> {
    let start = e.local_start();
    let end = e.local_end();

    // shifts past midnight show the end day too
    let end_str = if end.date_naive() != start.date_naive() {
        end.format("%m-%d %H:%M").to_string()
    } else {
        end.format("%H:%M").to_string()
    };

    vec![
        e.short_id(),
        start.format("%a %Y-%m-%d").to_string(),
        start.format("%H:%M").to_string(),
        end_str,
        format!("{} hrs", format_hours(e.hours())),
    ]
}
