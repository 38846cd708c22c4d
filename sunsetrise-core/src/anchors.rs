//! Astronomical anchors for a single calendar day.
//!
//! The core never computes solar positions itself. A [`SunTimes`] provider
//! supplies an [`AnchorSet`] per date, and everything downstream (window
//! selection, schedule tables, encoders) works from those instants.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::SunsetriseResult;

/// The named instants of one day, in canonical order.
///
/// When all are present they are non-decreasing. Any of them may be absent
/// (polar day or night) independently of the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorSet {
    /// End of astronomical night (sun at -18° rising)
    pub night_end: Option<DateTime<Utc>>,
    pub nautical_dawn: Option<DateTime<Utc>>,
    pub civil_dawn: Option<DateTime<Utc>>,
    pub sunrise: Option<DateTime<Utc>>,
    pub golden_hour_end: Option<DateTime<Utc>>,
    pub solar_noon: Option<DateTime<Utc>>,
    pub golden_hour_start: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub civil_dusk: Option<DateTime<Utc>>,
    pub nautical_dusk: Option<DateTime<Utc>>,
    /// Start of astronomical night (sun at -18° setting)
    pub night: Option<DateTime<Utc>>,
}

/// Capability that yields the anchors for a date and a coordinate.
///
/// Implementations are responsible for validating coordinates; an `Err`
/// means the day could not be evaluated at all.
pub trait SunTimes {
    fn sun_times(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
    ) -> SunsetriseResult<AnchorSet>;
}

impl<F> SunTimes for F
where
    F: Fn(NaiveDate, f64, f64) -> SunsetriseResult<AnchorSet>,
{
    fn sun_times(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
    ) -> SunsetriseResult<AnchorSet> {
        self(date, latitude, longitude)
    }
}
