//! Literal anchor fixtures shared by the unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::America::New_York;

use crate::anchors::{AnchorSet, SunTimes};
use crate::error::{SunsetriseError, SunsetriseResult};
use crate::window::{DailyWindow, WindowAnchors, WindowKind};

pub(crate) fn utc_june_15(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, h, m, 0).unwrap()
}

fn utc_june_16(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 16, h, m, 0).unwrap()
}

/// New York, 2025-06-15 (EDT, UTC-4).
pub(crate) fn new_york_june() -> AnchorSet {
    AnchorSet {
        night_end: Some(utc_june_15(7, 34)),
        nautical_dawn: Some(utc_june_15(8, 16)),
        civil_dawn: Some(utc_june_15(8, 52)),
        sunrise: Some(utc_june_15(9, 24)),
        golden_hour_end: Some(utc_june_15(10, 6)),
        solar_noon: Some(utc_june_15(16, 57)),
        golden_hour_start: Some(utc_june_15(23, 48)),
        sunset: Some(utc_june_16(0, 30)),
        civil_dusk: Some(utc_june_16(1, 3)),
        nautical_dusk: Some(utc_june_16(1, 38)),
        night: Some(utc_june_16(2, 21)),
    }
}

/// Always answers with the same anchors.
pub(crate) struct FixedSunTimes(pub AnchorSet);

impl SunTimes for FixedSunTimes {
    fn sun_times(&self, _: NaiveDate, _: f64, _: f64) -> SunsetriseResult<AnchorSet> {
        Ok(self.0)
    }
}

/// Never able to evaluate a day.
pub(crate) struct FailingSunTimes;

impl SunTimes for FailingSunTimes {
    fn sun_times(&self, date: NaiveDate, _: f64, _: f64) -> SunsetriseResult<AnchorSet> {
        Err(SunsetriseError::Ephemeris(format!("cannot evaluate {date}")))
    }
}

/// New York, 2025-03-01 (EST): morning 06:30-07:45 with sunrise at 06:30,
/// evening 17:45-18:20 with sunset at 17:45. No coordinates.
pub(crate) fn march_windows() -> Vec<DailyWindow> {
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let local = |h, m| New_York.with_ymd_and_hms(2025, 3, 1, h, m, 0).unwrap();

    let morning = DailyWindow::new(date, New_York, WindowKind::Morning, local(6, 30), local(7, 45))
        .unwrap()
        .with_anchors(WindowAnchors {
            sunrise: Some(local(6, 30)),
            ..WindowAnchors::default()
        });
    let evening =
        DailyWindow::new(date, New_York, WindowKind::Evening, local(17, 45), local(18, 20))
            .unwrap()
            .with_anchors(WindowAnchors {
                sunset: Some(local(17, 45)),
                ..WindowAnchors::default()
            });

    vec![morning, evening]
}
