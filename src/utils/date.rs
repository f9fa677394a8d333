use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// "Sep 1" style label used by week range headers.
pub fn short_label(d: NaiveDate) -> String {
    d.format("%b %-d").to_string()
}

/// `YYYY-MM-DD`, `today` or `yesterday`.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => Some(today()),
        "yesterday" => today().pred_opt(),
        other => parse_date(other),
    }
}
