use anyhow::{Context, Result};
use chrono::{NaiveDate, SecondsFormat};
use owo_colors::OwoColorize;
use serde::Serialize;
use sunsetrise_core::{DailyWindow, WindowKind};

use crate::plan::Request;
use crate::sun::SolarCalculator;

#[derive(Debug, Serialize)]
struct WindowRecord {
    uid: String,
    date: NaiveDate,
    kind: WindowKind,
    timezone: String,
    start: String,
    end: String,
}

impl From<&DailyWindow> for WindowRecord {
    fn from(window: &DailyWindow) -> Self {
        WindowRecord {
            uid: window.uid(),
            date: window.date(),
            kind: window.kind(),
            timezone: window.timezone().name().to_string(),
            start: window.start().to_rfc3339_opts(SecondsFormat::Secs, false),
            end: window.end().to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

pub fn run(request: &Request, json: bool) -> Result<()> {
    let sun = SolarCalculator::new(request.zone);
    let windows = request.windows(&sun);

    if json {
        println!("{}", render_json(&windows)?);
        return Ok(());
    }

    if windows.is_empty() {
        println!("{}", "No windows in range".dimmed());
        return Ok(());
    }

    for window in &windows {
        println!("{}", line(window));
    }

    Ok(())
}

/// `date | kind | start -> end (zone)`
fn line(window: &DailyWindow) -> String {
    let record = WindowRecord::from(window);
    format!(
        "{} | {} | {} -> {} ({})",
        record.date, record.kind, record.start, record.end, record.timezone
    )
}

fn render_json(windows: &[DailyWindow]) -> Result<String> {
    let records: Vec<WindowRecord> = windows.iter().map(WindowRecord::from).collect();
    serde_json::to_string_pretty(&records).context("Failed to serialize windows")
}
