use crate::cli::commands::open_manager;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::ui::messages::{field, success, warning};
use crate::utils::format_money;

fn print_settings(settings: &Settings, currency: &str) {
    field("Wage", format!("{}/h", format_money(currency, settings.hourly_wage)));
    field("Tax", format!("{:.2}%", settings.tax_rate * 100.0));
    field(
        "Week start",
        format!(
            "{} ({})",
            settings.week_start_day,
            settings.week_start_day.number()
        ),
    );
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        wage,
        tax,
        week_start,
    } = cmd
    {
        let mut manager = open_manager(cfg)?;

        if wage.is_none() && tax.is_none() && week_start.is_none() {
            print_settings(manager.settings(), &cfg.currency_symbol);
            return Ok(());
        }

        let outcome = manager.update_settings_from_input(
            wage.as_deref(),
            tax.as_deref(),
            week_start.as_deref(),
        )?;

        for (name, text) in &outcome.rejected {
            warning(format!("Invalid {name} '{text}', keeping the previous value."));
        }

        let s = outcome.settings;
        ttlog_quiet(
            manager.store().conn(),
            "settings",
            "",
            &format!(
                "wage={} tax={} week_start={}",
                s.hourly_wage,
                s.tax_rate,
                s.week_start_day.number()
            ),
        );

        success("Settings saved.");
        print_settings(&s, &cfg.currency_symbol);
    }

    Ok(())
}
