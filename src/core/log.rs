use crate::db::log::{LogRow, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 40;

/// ANSI color per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "settings" => Colour::Yellow,
        "reset" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::Cyan,
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to `MAX_OP_WIDTH` visible characters.
fn op_target(row: &LogRow) -> String {
    let raw = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    if raw.chars().count() > MAX_OP_WIDTH {
        let mut s: String = raw.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        raw
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let rows = load_log(conn)?;

        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = rows.iter().map(op_target).collect();

        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, label) in rows.iter().zip(labels) {
            let color = color_for_operation(&row.operation);
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));

            // only the operation word is colored
            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                row.date,
                colored,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
