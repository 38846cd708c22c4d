//! Daily blue/golden hour windows.
//!
//! A morning window runs from civil dawn to the end of the morning golden
//! hour; an evening window runs from the start of the evening golden hour to
//! civil dusk. A half-day whose anchors are missing or out of order simply has
//! no window.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::anchors::AnchorSet;

/// Domain used in every event UID.
pub const UID_DOMAIN: &str = "sunsetrise";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    Morning,
    Evening,
}

impl WindowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowKind::Morning => "morning",
            WindowKind::Evening => "evening",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The anchors a window carries for display, in the window's zone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowAnchors {
    pub civil_dawn: Option<DateTime<Tz>>,
    pub sunrise: Option<DateTime<Tz>>,
    pub golden_hour_end: Option<DateTime<Tz>>,
    pub golden_hour_start: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub civil_dusk: Option<DateTime<Tz>>,
}

impl WindowAnchors {
    pub fn from_anchor_set(anchors: &AnchorSet, zone: Tz) -> Self {
        let local = |dt: Option<DateTime<Utc>>| dt.map(|dt| dt.with_timezone(&zone));
        WindowAnchors {
            civil_dawn: local(anchors.civil_dawn),
            sunrise: local(anchors.sunrise),
            golden_hour_end: local(anchors.golden_hour_end),
            golden_hour_start: local(anchors.golden_hour_start),
            sunset: local(anchors.sunset),
            civil_dusk: local(anchors.civil_dusk),
        }
    }
}

/// One blue/golden hour window.
///
/// `start < end` holds for every value of this type: the only constructor
/// refuses empty or inverted ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWindow {
    date: NaiveDate,
    timezone: Tz,
    kind: WindowKind,
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    anchors: WindowAnchors,
}

impl DailyWindow {
    /// Returns `None` unless `start < end`.
    pub(crate) fn new(
        date: NaiveDate,
        timezone: Tz,
        kind: WindowKind,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Option<Self> {
        if start >= end {
            return None;
        }

        Some(DailyWindow {
            date,
            timezone,
            kind,
            start: start.with_timezone(&timezone),
            end: end.with_timezone(&timezone),
            latitude: None,
            longitude: None,
            anchors: WindowAnchors::default(),
        })
    }

    pub fn with_coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_anchors(mut self, anchors: WindowAnchors) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn start(&self) -> DateTime<Tz> {
        self.start
    }

    pub fn end(&self) -> DateTime<Tz> {
        self.end
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Both coordinates, if the window has them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    pub fn anchors(&self) -> &WindowAnchors {
        &self.anchors
    }

    /// The anchor that names the event: sunrise for morning windows, sunset
    /// for evening windows.
    pub fn defining_anchor(&self) -> Option<DateTime<Tz>> {
        match self.kind {
            WindowKind::Morning => self.anchors.sunrise,
            WindowKind::Evening => self.anchors.sunset,
        }
    }

    /// Stable identifier for create-or-update by calendar sync.
    pub fn uid(&self) -> String {
        format!(
            "sunlight:{}:{}@{}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            UID_DOMAIN
        )
    }
}

/// Select the morning and evening windows of one date.
///
/// Returns zero, one or two windows, morning first.
pub fn select(
    date: NaiveDate,
    anchors: &AnchorSet,
    latitude: Option<f64>,
    longitude: Option<f64>,
    zone: Tz,
) -> Vec<DailyWindow> {
    let display = WindowAnchors::from_anchor_set(anchors, zone);
    let halves = [
        (WindowKind::Morning, anchors.civil_dawn, anchors.golden_hour_end),
        (WindowKind::Evening, anchors.golden_hour_start, anchors.civil_dusk),
    ];

    halves
        .into_iter()
        .filter_map(|(kind, start, end)| {
            let (start, end) = (start?, end?);
            DailyWindow::new(
                date,
                zone,
                kind,
                start.with_timezone(&zone),
                end.with_timezone(&zone),
            )
        })
        .map(|window| {
            window
                .with_coordinates(latitude, longitude)
                .with_anchors(display)
        })
        .collect()
}
