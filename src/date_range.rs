//! Inclusive range of local calendar dates.

use anyhow::{Result, bail};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub until: NaiveDate,
}

impl DateRange {
    /// Parse `--start`/`--until`. A missing start means `today`.
    pub fn from_args(start: Option<&str>, until: &str, today: NaiveDate) -> Result<Self> {
        let start = match start {
            Some(s) => parse_date(s)?,
            None => today,
        };
        let until = parse_date(until)?;

        if until < start {
            bail!("until must be on or after start ({until} < {start})");
        }

        Ok(DateRange { start, until })
    }

    /// Every date from `start` to `until`, both included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let until = self.until;
        self.start.iter_days().take_while(move |d| *d <= until)
    }

    pub fn day_count(&self) -> usize {
        (self.until - self.start).num_days() as usize + 1
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!("Invalid date format '{s}'. Expected YYYY-MM-DD"),
    }
}
