//! ICS stream generation.
//!
//! The stream is written line by line rather than through a calendar builder:
//! property order, escaping and folding are part of the output contract.

use chrono::{DateTime, Utc};

use super::text::{escape_text, fold_line};
use crate::anchors::SunTimes;
use crate::i18n::Lang;
use crate::schedule::describe;
use crate::window::{DailyWindow, WindowKind};

pub const PRODID: &str = "-//sunsetrise//EN";
pub const CALENDAR_NAME: &str = "Golden/Blue Windows";

const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Minimal UTC timezone definition, emitted once per stream.
const VTIMEZONE_UTC: [&str; 10] = [
    "BEGIN:VTIMEZONE",
    "TZID:UTC",
    "X-LIC-LOCATION:UTC",
    "BEGIN:STANDARD",
    "TZOFFSETFROM:+0000",
    "TZOFFSETTO:+0000",
    "TZNAME:UTC",
    "DTSTART:19700101T000000",
    "END:STANDARD",
    "END:VTIMEZONE",
];

/// Generate the ICS stream for `windows`, stamped with the current time.
pub fn generate_ics<S>(windows: &[DailyWindow], lang: Lang, sun_times: &S) -> String
where
    S: SunTimes + ?Sized,
{
    generate_ics_at(windows, lang, sun_times, Utc::now())
}

/// Generate the ICS stream with a fixed DTSTAMP.
///
/// Events appear in the order of `windows`. Every line ends with CRLF,
/// including the last one.
pub fn generate_ics_at<S>(
    windows: &[DailyWindow],
    lang: Lang,
    sun_times: &S,
    dtstamp: DateTime<Utc>,
) -> String
where
    S: SunTimes + ?Sized,
{
    let dtstamp = dtstamp.format(UTC_FORMAT).to_string();
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".into(),
        format!("PRODID:{PRODID}"),
        "VERSION:2.0".into(),
        "CALSCALE:GREGORIAN".into(),
        "METHOD:PUBLISH".into(),
        format!("X-WR-CALNAME:{CALENDAR_NAME}"),
        "X-WR-TIMEZONE:UTC".into(),
    ];
    lines.extend(VTIMEZONE_UTC.iter().map(|l| l.to_string()));

    for window in windows {
        push_event(&mut lines, window, lang, sun_times, &dtstamp);
    }

    lines.push("END:VCALENDAR".into());

    let mut output = lines.join("\r\n");
    output.push_str("\r\n");
    output
}

fn push_event<S>(
    lines: &mut Vec<String>,
    window: &DailyWindow,
    lang: Lang,
    sun_times: &S,
    dtstamp: &str,
) where
    S: SunTimes + ?Sized,
{
    let title = lang.title(window.kind());
    let summary = match window.defining_anchor() {
        Some(at) => format!("{} {}", at.with_timezone(&window.timezone()).format("%H:%M"), title),
        None => title.to_string(),
    };
    let description = describe(window, lang, sun_times);
    let (alarm_text, trigger) = alarm(window.kind());

    let properties = [
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", escape_text(&window.uid())),
        format!("DTSTAMP:{dtstamp}"),
        format!("DTSTART:{}", utc(window.start())),
        format!("DTEND:{}", utc(window.end())),
        format!("SUMMARY:{}", escape_text(&summary)),
        format!("DESCRIPTION:{}", escape_text(&description.text)),
        // Markup must reach the client as-is so it renders.
        format!("X-ALT-DESC;FMTTYPE=text/html:{}", description.html),
        format!("CATEGORIES:{}", escape_text(title)),
        "STATUS:CONFIRMED".to_string(),
        "TRANSP:OPAQUE".to_string(),
        "BEGIN:VALARM".to_string(),
        "ACTION:DISPLAY".to_string(),
        format!("DESCRIPTION:{alarm_text}"),
        format!("TRIGGER:{trigger}"),
        "END:VALARM".to_string(),
        "END:VEVENT".to_string(),
    ];

    lines.extend(properties.iter().map(|line| fold_line(line)));
}

/// Alarm text and trigger: at start for sunrise, 15 minutes early for sunset.
fn alarm(kind: WindowKind) -> (&'static str, &'static str) {
    match kind {
        WindowKind::Morning => ("Sunrise", "PT0M"),
        WindowKind::Evening => ("Sunset", "-PT15M"),
    }
}

fn utc<Tz: chrono::TimeZone>(at: DateTime<Tz>) -> String {
    at.with_timezone(&Utc).format(UTC_FORMAT).to_string()
}
