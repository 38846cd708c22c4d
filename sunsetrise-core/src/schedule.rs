//! Human-readable schedule of a day's light segments.
//!
//! The table lists twilight bands, golden hours and the sunrise, noon and
//! sunset points in chronological order, grouped by blank spacer rows into
//! morning, midday and evening blocks. It is rendered both as plain text (for
//! DESCRIPTION and CSV) and as an HTML table (for X-ALT-DESC).

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;

use crate::anchors::{AnchorSet, SunTimes};
use crate::i18n::Lang;
use crate::window::DailyWindow;

const TABLE_OPEN: &str = r#"<table border="0" cellpadding="2" cellspacing="0">"#;
const TABLE_CLOSE: &str = "</table>";
const SPACER_HTML: &str = r#"<tr><td colspan="3">&nbsp;</td></tr>"#;

/// Rendered description of a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub text: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleRow {
    Row {
        label: String,
        time_text: String,
        duration_text: Option<String>,
        emphasized: bool,
    },
    Spacer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Astronomical,
    Nautical,
    Civil,
    Sunrise,
    Golden,
    Noon,
    Sunset,
}

impl Segment {
    fn label(self, lang: Lang) -> &'static str {
        let labels = &lang.labels().segments;
        match self {
            Segment::Astronomical => labels.astronomical,
            Segment::Nautical => labels.nautical,
            Segment::Civil => labels.civil,
            Segment::Sunrise => labels.sunrise,
            Segment::Golden => labels.golden,
            Segment::Noon => labels.noon,
            Segment::Sunset => labels.sunset,
        }
    }
}

enum Span {
    Range(Option<DateTime<Utc>>, Option<DateTime<Utc>>),
    Point(Option<DateTime<Utc>>),
}

/// Describe the full day of `window`.
///
/// Falls back to a three-line summary of the window itself when it has no
/// coordinates or the provider cannot evaluate its date. Never fails.
pub fn describe<S>(window: &DailyWindow, lang: Lang, sun_times: &S) -> Description
where
    S: SunTimes + ?Sized,
{
    let anchors = window.coordinates().and_then(|(latitude, longitude)| {
        sun_times.sun_times(window.date(), latitude, longitude).ok()
    });

    match anchors {
        Some(anchors) => render(&schedule_rows(&anchors, window.timezone(), lang)),
        None => fallback(window, lang),
    }
}

/// Build the ordered rows for one day's anchors.
///
/// A range needs both endpoints with the end strictly after the start; a
/// point needs its instant. Spacers follow the first golden-hour range and the
/// solar-noon point.
pub fn schedule_rows(anchors: &AnchorSet, zone: Tz, lang: Lang) -> Vec<ScheduleRow> {
    let candidates = [
        (Segment::Astronomical, Span::Range(anchors.night_end, anchors.nautical_dawn)),
        (Segment::Nautical, Span::Range(anchors.nautical_dawn, anchors.civil_dawn)),
        (Segment::Civil, Span::Range(anchors.civil_dawn, anchors.sunrise)),
        (Segment::Sunrise, Span::Point(anchors.sunrise)),
        (Segment::Golden, Span::Range(anchors.sunrise, anchors.golden_hour_end)),
        (Segment::Noon, Span::Point(anchors.solar_noon)),
        (Segment::Golden, Span::Range(anchors.golden_hour_start, anchors.sunset)),
        (Segment::Sunset, Span::Point(anchors.sunset)),
        (Segment::Civil, Span::Range(anchors.sunset, anchors.civil_dusk)),
        (Segment::Nautical, Span::Range(anchors.civil_dusk, anchors.nautical_dusk)),
        (Segment::Astronomical, Span::Range(anchors.nautical_dusk, anchors.night)),
    ];

    let mut rows = Vec::new();
    let mut golden_spacer_added = false;

    for (segment, span) in candidates {
        let label = segment.label(lang).to_string();
        match span {
            Span::Range(from, to) => {
                let (Some(from), Some(to)) = (from, to) else {
                    continue;
                };
                if to <= from {
                    continue;
                }

                let minutes = ((to - from).num_milliseconds() as f64 / 60_000.0).round() as i64;
                rows.push(ScheduleRow::Row {
                    label,
                    time_text: format!("{} - {}", hhmm(from, zone), hhmm(to, zone)),
                    duration_text: (minutes != 0).then(|| format!("{minutes} min.")),
                    emphasized: false,
                });

                if segment == Segment::Golden && !golden_spacer_added {
                    golden_spacer_added = true;
                    rows.push(ScheduleRow::Spacer);
                }
            }
            Span::Point(at) => {
                let Some(at) = at else {
                    continue;
                };

                rows.push(ScheduleRow::Row {
                    label,
                    time_text: hhmm(at, zone),
                    duration_text: None,
                    emphasized: matches!(segment, Segment::Sunrise | Segment::Sunset),
                });

                if segment == Segment::Noon {
                    rows.push(ScheduleRow::Spacer);
                }
            }
        }
    }

    rows
}

/// Render rows as `"time  duration  label"` lines and as an HTML table.
pub fn render(rows: &[ScheduleRow]) -> Description {
    let mut lines = Vec::with_capacity(rows.len());
    let mut html = String::from(TABLE_OPEN);

    for row in rows {
        match row {
            ScheduleRow::Spacer => {
                lines.push(String::new());
                html.push_str(SPACER_HTML);
            }
            ScheduleRow::Row {
                label,
                time_text,
                duration_text,
                emphasized,
            } => {
                let mut parts = vec![time_text.as_str()];
                if let Some(duration) = duration_text {
                    parts.push(duration);
                }
                parts.push(label);
                lines.push(parts.join("  "));

                let safe_label = escape_html(label);
                let label_cell = if *emphasized {
                    format!("<b>{safe_label}</b>")
                } else {
                    safe_label
                };
                html.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(time_text),
                    escape_html(duration_text.as_deref().unwrap_or_default()),
                    label_cell
                ));
            }
        }
    }

    html.push_str(TABLE_CLOSE);

    Description {
        text: lines.join("\n"),
        html,
    }
}

fn fallback(window: &DailyWindow, lang: Lang) -> Description {
    let lines = [
        format!("{}: {}", lang.labels().window, window.kind()),
        format!("Start: {}", iso(window.start())),
        format!("End: {}", iso(window.end())),
    ];

    let mut html = String::from(TABLE_OPEN);
    for line in &lines {
        html.push_str(&format!(r#"<tr><td colspan="3">{}</td></tr>"#, escape_html(line)));
    }
    html.push_str(TABLE_CLOSE);

    Description {
        text: lines.join("\n"),
        html,
    }
}

/// ISO 8601 to the second. The fixed UTC zone prints `Z`, named zones
/// always print their offset.
fn iso(at: DateTime<Tz>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, at.timezone() == Tz::UTC)
}

fn hhmm(at: DateTime<Utc>, zone: Tz) -> String {
    at.with_timezone(&zone).format("%H:%M").to_string()
}

/// Escape `&`, `<` and `>` for HTML text content.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
