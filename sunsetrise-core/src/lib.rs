//! Core of sunsetrise: blue/golden hour windows and their calendar artifacts.
//!
//! - `anchors`: per-day astronomical instants and the `SunTimes` capability
//! - `window`: selection of morning/evening windows
//! - `schedule`: localized text/HTML schedule of a day
//! - `ics` and `csv`: RFC 5545 and Google Calendar CSV encoders

pub mod anchors;
pub mod csv;
pub mod error;
pub mod i18n;
pub mod ics;
pub mod schedule;
pub mod window;

#[cfg(test)]
mod testing;

pub use anchors::{AnchorSet, SunTimes};
pub use error::{SunsetriseError, SunsetriseResult};
pub use i18n::Lang;
pub use schedule::{Description, ScheduleRow, describe};
pub use window::{DailyWindow, WindowAnchors, WindowKind, select};
