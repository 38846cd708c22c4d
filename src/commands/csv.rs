use anyhow::Result;
use owo_colors::OwoColorize;
use sunsetrise_core::csv::generate_csv;
use tracing::info;

use crate::output::Target;
use crate::plan::Request;
use crate::sun::SolarCalculator;

pub fn run(request: &Request, target: &Target) -> Result<()> {
    let sun = SolarCalculator::new(request.zone);
    let windows = request.windows(&sun);
    let csv = generate_csv(&windows, &sun)?;
    info!(rows = windows.len(), "Generated CSV");

    target.write(&csv)?;

    if let Target::File(path) = target {
        eprintln!("{}", format!("CSV written to {}", path.display()).green());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use sunsetrise_core::Lang;

    use crate::config::Settings;

    #[test]
    fn test_writes_csv_file() {
        let settings = Settings {
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
            timezone: Some("America/New_York".to_string()),
            language: Lang::Es,
            calendar_dir: PathBuf::from("/tmp"),
        };
        let request =
            Request::resolve(&settings, None, None, None, Some("2025-03-01"), "2025-03-01").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sunsetrise.csv");

        run(&request, &Target::File(path.clone())).unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Subject,Start Date,Start Time,End Date,End Time,All Day Event,Description,Location,Private")
        );
        assert!(csv.contains("Blue → Golden hour (AM),03/01/2025,"));
        assert!(csv.contains("Golden → Blue hour (PM),03/01/2025,"));
        // Descriptions stay English whatever the configured language.
        assert!(csv.contains("  Sunrise\n"));
        assert!(csv.ends_with(",,True\n"));
    }
}
