//! Resolve a request from flags and settings, then collect its windows.

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use chrono_tz::Tz;
use sunsetrise_core::{DailyWindow, SunTimes, select};
use tracing::{debug, info, trace, warn};

use crate::config::Settings;
use crate::date_range::DateRange;

/// A location, a zone and the dates to cover.
#[derive(Debug, Clone)]
pub struct Request {
    pub latitude: f64,
    pub longitude: f64,
    pub zone: Tz,
    pub range: DateRange,
}

impl Request {
    /// Flags win over settings. The zone falls back to the system zone, then UTC.
    pub fn resolve(
        settings: &Settings,
        lat: Option<f64>,
        lon: Option<f64>,
        tz: Option<&str>,
        start: Option<&str>,
        until: &str,
    ) -> Result<Self> {
        let latitude = lat
            .or(settings.latitude)
            .context("No latitude given. Pass --lat or set `latitude` in the config")?;
        let longitude = lon
            .or(settings.longitude)
            .context("No longitude given. Pass --lon or set `longitude` in the config")?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(anyhow!("Latitude {latitude} is outside -90..=90"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(anyhow!("Longitude {longitude} is outside -180..=180"));
        }

        let zone = match tz.or(settings.timezone.as_deref()) {
            Some(name) => parse_zone(name)?,
            None => system_zone(),
        };

        let today = Utc::now().with_timezone(&zone).date_naive();
        let range = DateRange::from_args(start, until, today)?;

        Ok(Request {
            latitude,
            longitude,
            zone,
            range,
        })
    }

    /// Every window in the range, in date order, morning before evening.
    ///
    /// A date the provider cannot evaluate is logged and skipped.
    pub fn windows<S>(&self, sun_times: &S) -> Vec<DailyWindow>
    where
        S: SunTimes + ?Sized,
    {
        info!(
            start = %self.range.start,
            until = %self.range.until,
            days = self.range.day_count(),
            zone = %self.zone,
            "Computing windows"
        );

        let mut windows = Vec::new();
        for date in self.range.days() {
            let anchors = match sun_times.sun_times(date, self.latitude, self.longitude) {
                Ok(anchors) => anchors,
                Err(e) => {
                    warn!(%date, error = %e, "Skipping date");
                    continue;
                }
            };

            let day = select(
                date,
                &anchors,
                Some(self.latitude),
                Some(self.longitude),
                self.zone,
            );
            debug!(%date, count = day.len(), "Selected windows");
            if day.len() < 2 {
                trace!(%date, missing = 2 - day.len(), "Half-days without a window");
            }
            windows.extend(day);
        }

        windows
    }
}

fn parse_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow!("Unknown timezone '{name}': {e}"))
}

fn system_zone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => name.parse().unwrap_or_else(|_| {
            warn!(zone = %name, "System timezone not recognized, using UTC");
            Tz::UTC
        }),
        Err(e) => {
            warn!(error = %e, "Could not determine system timezone, using UTC");
            Tz::UTC
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use std::path::PathBuf;
    use sunsetrise_core::{AnchorSet, SunsetriseError, SunsetriseResult, WindowKind};

    use crate::sun::SolarCalculator;

    fn settings() -> Settings {
        Settings {
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
            timezone: Some("America/New_York".to_string()),
            language: Default::default(),
            calendar_dir: PathBuf::from("/tmp"),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_settings_fill_missing_flags() {
        let request =
            Request::resolve(&settings(), None, None, None, Some("2025-06-15"), "2025-06-16").unwrap();

        assert_eq!(request.latitude, 40.7128);
        assert_eq!(request.longitude, -74.0060);
        assert_eq!(request.zone, chrono_tz::America::New_York);
        assert_eq!(request.range.start, date(2025, 6, 15));
    }

    #[test]
    fn test_flags_override_settings() {
        let request = Request::resolve(
            &settings(),
            Some(40.4168),
            Some(-3.7038),
            Some("Europe/Madrid"),
            Some("2025-06-15"),
            "2025-06-15",
        )
        .unwrap();

        assert_eq!(request.latitude, 40.4168);
        assert_eq!(request.zone, chrono_tz::Europe::Madrid);
    }

    #[test]
    fn test_missing_location_is_an_error() {
        let mut settings = settings();
        settings.latitude = None;

        let err = Request::resolve(&settings, None, Some(0.0), None, Some("2025-06-15"), "2025-06-15")
            .unwrap_err();
        assert!(err.to_string().contains("--lat"));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let s = settings();
        assert!(Request::resolve(&s, Some(95.0), None, None, Some("2025-06-15"), "2025-06-15").is_err());
        assert!(Request::resolve(&s, None, Some(-190.0), None, Some("2025-06-15"), "2025-06-15").is_err());
        assert!(Request::resolve(&s, None, None, Some("Mars/Olympus"), Some("2025-06-15"), "2025-06-15").is_err());
        assert!(Request::resolve(&s, None, None, None, Some("2025-06-15"), "2025-06-01").is_err());
    }

    #[test]
    fn test_windows_over_range() {
        let request =
            Request::resolve(&settings(), None, None, None, Some("2025-06-14"), "2025-06-16").unwrap();
        let windows = request.windows(&SolarCalculator::new(request.zone));

        assert_eq!(windows.len(), 6);
        let kinds: Vec<_> = windows.iter().map(|w| w.kind()).collect();
        assert_eq!(
            kinds,
            [WindowKind::Morning, WindowKind::Evening].repeat(3)
        );
        assert!(windows.windows(2).all(|pair| pair[0].start() < pair[1].start()));
        assert_eq!(windows[0].date(), date(2025, 6, 14));
        assert_eq!(windows[5].date(), date(2025, 6, 16));
        assert!(windows.iter().all(|w| w.coordinates() == Some((40.7128, -74.0060))));
    }

    #[test]
    fn test_failing_dates_are_skipped() {
        let request =
            Request::resolve(&settings(), None, None, None, Some("2025-06-14"), "2025-06-16").unwrap();
        let sun = SolarCalculator::new(request.zone);
        let skip_middle = |day: NaiveDate, lat: f64, lon: f64| -> SunsetriseResult<AnchorSet> {
            if day == date(2025, 6, 15) {
                return Err(SunsetriseError::Ephemeris("unavailable".into()));
            }
            sun.sun_times(day, lat, lon)
        };

        let windows = request.windows(&skip_middle);

        assert_eq!(windows.len(), 4);
        assert!(windows.iter().all(|w| w.date() != date(2025, 6, 15)));
    }

    #[test]
    fn test_today_is_taken_in_the_requested_zone() {
        let far_future = (Utc::now() + Duration::days(3)).format("%Y-%m-%d").to_string();
        let request =
            Request::resolve(&settings(), None, None, Some("Pacific/Kiritimati"), None, &far_future)
                .unwrap();

        let zone: Tz = "Pacific/Kiritimati".parse().unwrap();
        assert_eq!(request.range.start, Utc::now().with_timezone(&zone).date_naive());
    }
}
