use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::widget::{SummaryProvider, WidgetSnapshot};
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::utils::formatting::{bold, progress_bar};
use crate::utils::{format_hours, format_money};

fn render(snapshot: &WidgetSnapshot, currency: &str) {
    println!("{}", bold("ShiftTrack"));
    if !snapshot.week.is_empty() {
        println!("{}", snapshot.week);
    }
    println!(
        "Hours    {}  ({} left)",
        format_hours(snapshot.hours_worked),
        format_hours(snapshot.hours_remaining)
    );
    println!(
        "Earnings {}  (after tax)",
        format_money(currency, snapshot.net_earnings)
    );
    println!("{}", progress_bar(snapshot.progress, 20));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Widget {
        json,
        watch,
        placeholder,
    } = cmd
    {
        // the widget only reads what the main app persisted
        let store = SqliteStore::open_read_only(cfg.database_path(), &cfg.group)?;
        let provider = SummaryProvider::new(store).refresh_every(cfg.widget_refresh_minutes);

        loop {
            let snapshot = if *placeholder {
                provider.placeholder()
            } else {
                provider.snapshot()
            };

            if *json {
                println!("{}", serde_json::to_string(&snapshot)?);
            } else {
                render(&snapshot, &cfg.currency_symbol);
            }

            if !*watch {
                break;
            }

            tracing::debug!(next = %snapshot.next_refresh, "widget sleeping");
            std::thread::sleep(provider.refresh_interval());
            if !*json {
                println!();
            }
        }
    }

    Ok(())
}
