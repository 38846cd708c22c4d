use anyhow::Result;
use owo_colors::OwoColorize;
use sunsetrise_core::Lang;
use sunsetrise_core::ics::generate_ics;
use tracing::info;

use crate::output::Target;
use crate::plan::Request;
use crate::sun::SolarCalculator;

pub fn run(request: &Request, lang: Lang, target: &Target) -> Result<()> {
    let sun = SolarCalculator::new(request.zone);
    let windows = request.windows(&sun);
    let ics = generate_ics(&windows, lang, &sun);
    info!(events = windows.len(), %lang, "Generated calendar");

    target.write(&ics)?;

    if let Target::File(path) = target {
        eprintln!(
            "{}",
            format!("ICS written to {} ({} events)", path.display(), windows.len()).green()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::config::Settings;

    fn request() -> Request {
        let settings = Settings {
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
            timezone: Some("America/New_York".to_string()),
            language: Lang::En,
            calendar_dir: PathBuf::from("/tmp"),
        };
        Request::resolve(&settings, None, None, None, Some("2025-06-15"), "2025-06-16").unwrap()
    }

    #[test]
    fn test_writes_calendar_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("sunsetrise.ics");

        run(&request(), Lang::Es, &Target::File(path.clone())).unwrap();

        let ics = std::fs::read_to_string(&path).unwrap();
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 4);
        assert!(ics.contains("UID:sunlight:2025-06-16:evening@sunsetrise\r\n"));
        assert!(
            ics.lines()
                .any(|l| l.starts_with("SUMMARY:") && l.ends_with(" Amanecer"))
        );
    }
}
