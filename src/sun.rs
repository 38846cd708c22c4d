//! Sun times from the NREL Solar Position Algorithm.
//!
//! The algorithm answers per UTC day, with every crossing folded into that
//! day. A local day straddles two UTC days, so the provider evaluates the
//! UTC days around local noon and keeps the crossings within half a day of
//! that date's solar transit.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use solar_positioning::{Horizon, SunriseResult, spa};
use sunsetrise_core::{AnchorSet, SunTimes, SunsetriseError, SunsetriseResult};

/// ΔT (TT - UT1) in seconds, close enough for minute-level output this decade.
const DELTA_T_SECONDS: f64 = 69.0;

/// Sun elevation that bounds golden hour.
const GOLDEN_HOUR_ELEVATION: f64 = 6.0;

/// Deepest first. Rising crossings of these map onto the morning anchors in
/// order, setting crossings onto the evening anchors in reverse.
const HORIZONS: [Horizon; 5] = [
    Horizon::AstronomicalTwilight,
    Horizon::NauticalTwilight,
    Horizon::CivilTwilight,
    Horizon::SunriseSunset,
    Horizon::Custom(GOLDEN_HOUR_ELEVATION),
];

#[derive(Debug, Clone, Copy)]
pub struct SolarCalculator {
    zone: Tz,
}

/// Crossings gathered from several UTC days.
#[derive(Default)]
struct Candidates {
    transits: Vec<DateTime<Utc>>,
    rising: [Vec<DateTime<Utc>>; HORIZONS.len()],
    setting: [Vec<DateTime<Utc>>; HORIZONS.len()],
}

impl SolarCalculator {
    /// Dates are interpreted as calendar days in `zone`.
    pub fn new(zone: Tz) -> Self {
        SolarCalculator { zone }
    }

    /// Local noon of `date`, as an absolute instant.
    fn local_noon(&self, date: NaiveDate) -> DateTime<Utc> {
        date.and_hms_opt(12, 0, 0)
            .and_then(|noon| self.zone.from_local_datetime(&noon).earliest())
            .map(|noon| noon.with_timezone(&Utc))
            .unwrap_or_else(|| date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(12))
    }
}

impl SunTimes for SolarCalculator {
    fn sun_times(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
    ) -> SunsetriseResult<AnchorSet> {
        validate(latitude, longitude)?;

        let seed = self.local_noon(date);
        let mut candidates = Candidates::default();
        for offset in -1..=1 {
            let day = seed + Duration::days(offset);
            let results =
                spa::sunrise_sunset_multiple(day, latitude, longitude, DELTA_T_SECONDS, HORIZONS);

            for (i, result) in results.enumerate() {
                let (_, result) = result.map_err(|e| SunsetriseError::Ephemeris(e.to_string()))?;
                match result {
                    SunriseResult::RegularDay {
                        sunrise,
                        transit,
                        sunset,
                    } => {
                        candidates.transits.push(transit);
                        candidates.rising[i].push(sunrise);
                        candidates.setting[i].push(sunset);
                    }
                    SunriseResult::AllDay { transit } | SunriseResult::AllNight { transit } => {
                        candidates.transits.push(transit);
                    }
                }
            }
        }

        let noon = candidates
            .transits
            .iter()
            .copied()
            .min_by_key(|t| (*t - seed).num_seconds().abs())
            .ok_or_else(|| SunsetriseError::Ephemeris(format!("no solar transit on {date}")))?;

        let half_day = Duration::hours(12);
        let rising = |i: usize| {
            candidates.rising[i]
                .iter()
                .copied()
                .find(|t| *t <= noon && noon - *t < half_day)
        };
        let setting = |i: usize| {
            candidates.setting[i]
                .iter()
                .copied()
                .find(|t| *t >= noon && *t - noon < half_day)
        };

        Ok(AnchorSet {
            night_end: rising(0),
            nautical_dawn: rising(1),
            civil_dawn: rising(2),
            sunrise: rising(3),
            golden_hour_end: rising(4),
            solar_noon: Some(noon),
            golden_hour_start: setting(4),
            sunset: setting(3),
            civil_dusk: setting(2),
            nautical_dusk: setting(1),
            night: setting(0),
        })
    }
}

fn validate(latitude: f64, longitude: f64) -> SunsetriseResult<()> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(SunsetriseError::Ephemeris(format!(
            "latitude {latitude} is outside -90..=90"
        )));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(SunsetriseError::Ephemeris(format!(
            "longitude {longitude} is outside -180..=180"
        )));
    }
    Ok(())
}
