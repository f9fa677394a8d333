use crate::errors::{AppError, AppResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_HOURLY_WAGE: f64 = 20.0;
pub const DEFAULT_TAX_RATE: f64 = 0.12;

/// First day of the tracking week, 1 = Monday .. 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStartDay(u8);

impl WeekStartDay {
    pub const MONDAY: WeekStartDay = WeekStartDay(1);

    pub fn new(day: u8) -> Option<Self> {
        (1..=7).contains(&day).then_some(Self(day))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        match self.0 {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    pub fn from_weekday(w: Weekday) -> Self {
        Self(w.number_from_monday() as u8)
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Sunday",
        }
    }

    /// Accepts `1`..`7` or an English weekday name (`mon`, `Monday`, ...).
    pub fn parse(input: &str) -> AppResult<Self> {
        let s = input.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::new(n).ok_or_else(|| AppError::InvalidWeekday(s.to_string()));
        }
        s.parse::<Weekday>()
            .map(Self::from_weekday)
            .map_err(|_| AppError::InvalidWeekday(s.to_string()))
    }
}

impl Default for WeekStartDay {
    fn default() -> Self {
        Self::MONDAY
    }
}

impl TryFrom<u8> for WeekStartDay {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("week start day out of range: {value}"))
    }
}

impl From<WeekStartDay> for u8 {
    fn from(value: WeekStartDay) -> Self {
        value.0
    }
}

impl fmt::Display for WeekStartDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Settings {
    pub hourly_wage: f64,
    /// Fraction in `[0, 1)`.
    pub tax_rate: f64,
    pub week_start_day: WeekStartDay,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hourly_wage: DEFAULT_HOURLY_WAGE,
            tax_rate: DEFAULT_TAX_RATE,
            week_start_day: WeekStartDay::default(),
        }
    }
}

impl Settings {
    pub fn is_valid_wage(wage: f64) -> bool {
        wage.is_finite() && wage >= 0.0
    }

    pub fn is_valid_tax_rate(rate: f64) -> bool {
        rate.is_finite() && (0.0..1.0).contains(&rate)
    }
}
