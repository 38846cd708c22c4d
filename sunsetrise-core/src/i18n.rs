//! Localized labels.
//!
//! One immutable [`Labels`] table per language. Adding a language means adding
//! a `Lang` variant and its table; nothing in the schedule builder changes.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SunsetriseError;
use crate::window::WindowKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
}

/// Segment labels used in schedule rows.
#[derive(Debug)]
pub struct SegmentLabels {
    pub astronomical: &'static str,
    pub nautical: &'static str,
    pub civil: &'static str,
    pub sunrise: &'static str,
    pub golden: &'static str,
    pub noon: &'static str,
    pub sunset: &'static str,
}

#[derive(Debug)]
pub struct Labels {
    pub segments: SegmentLabels,
    /// Event title for morning windows
    pub sunrise_title: &'static str,
    /// Event title for evening windows
    pub sunset_title: &'static str,
    /// Heading of the fallback description
    pub window: &'static str,
}

static EN: Labels = Labels {
    segments: SegmentLabels {
        astronomical: "Astronomical twilight",
        nautical: "Nautical twilight",
        civil: "Civil twilight",
        sunrise: "Sunrise",
        golden: "Golden hour",
        noon: "Solar noon",
        sunset: "Sunset",
    },
    sunrise_title: "Sunrise",
    sunset_title: "Sunset",
    window: "Window",
};

static ES: Labels = Labels {
    segments: SegmentLabels {
        astronomical: "Crepúsculo astronómico",
        nautical: "Crepúsculo náutico",
        civil: "Crepúsculo civil",
        sunrise: "Amanecer",
        golden: "La hora dorada",
        noon: "Cenit",
        sunset: "Atardecer",
    },
    sunrise_title: "Amanecer",
    sunset_title: "Atardecer",
    window: "Ventana",
};

impl Lang {
    pub fn labels(self) -> &'static Labels {
        match self {
            Lang::En => &EN,
            Lang::Es => &ES,
        }
    }

    /// Localized event title: the sunrise label for morning windows, the
    /// sunset label for evening windows.
    pub fn title(self, kind: WindowKind) -> &'static str {
        let labels = self.labels();
        match kind {
            WindowKind::Morning => labels.sunrise_title,
            WindowKind::Evening => labels.sunset_title,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }
}

impl FromStr for Lang {
    type Err = SunsetriseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "es" => Ok(Lang::Es),
            _ => Err(SunsetriseError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
