//! Google Calendar CSV export.
//!
//! Column set and the literal `False`/`True` values are what Google
//! Calendar's importer expects. Dates are `MM/DD/YYYY` and times 24-hour, in
//! each window's own zone.

use ::csv::{Terminator, WriterBuilder};

use crate::anchors::SunTimes;
use crate::error::{SunsetriseError, SunsetriseResult};
use crate::i18n::Lang;
use crate::schedule::describe;
use crate::window::{DailyWindow, WindowKind};

pub const CSV_HEADER: [&str; 9] = [
    "Subject",
    "Start Date",
    "Start Time",
    "End Date",
    "End Time",
    "All Day Event",
    "Description",
    "Location",
    "Private",
];

/// Event subject for a window kind.
pub fn subject(kind: WindowKind) -> &'static str {
    match kind {
        WindowKind::Morning => "Blue → Golden hour (AM)",
        WindowKind::Evening => "Golden → Blue hour (PM)",
    }
}

/// Generate the CSV: a header row, then one row per window in input order.
/// Rows end with `\n`, the last one included.
pub fn generate_csv<S>(windows: &[DailyWindow], sun_times: &S) -> SunsetriseResult<String>
where
    S: SunTimes + ?Sized,
{
    let rows = windows.iter().map(|window| {
        let start = window.start();
        let end = window.end();
        let description = describe(window, Lang::En, sun_times).text;

        vec![
            subject(window.kind()).to_string(),
            start.format("%m/%d/%Y").to_string(),
            start.format("%H:%M").to_string(),
            end.format("%m/%d/%Y").to_string(),
            end.format("%H:%M").to_string(),
            "False".to_string(),
            description,
            String::new(),
            "True".to_string(),
        ]
    });

    write_rows(rows)
}

/// Write the header and `rows`, quoting only fields that contain a quote,
/// a comma or a line break.
fn write_rows<I>(rows: I) -> SunsetriseResult<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)
        .map_err(|e| SunsetriseError::CsvGenerate(e.to_string()))?;
    for row in rows {
        wtr.write_record(&row)
            .map_err(|e| SunsetriseError::CsvGenerate(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SunsetriseError::CsvGenerate(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SunsetriseError::CsvGenerate(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedSunTimes, march_windows, new_york_june};
    use crate::window::select;
    use chrono::NaiveDate;

    const HEADER: &str =
        "Subject,Start Date,Start Time,End Date,End Time,All Day Event,Description,Location,Private";

    #[test]
    fn test_march_rows_are_exact() {
        let csv = generate_csv(&march_windows(), &FixedSunTimes(Default::default())).unwrap();

        let expected = format!(
            "{HEADER}\n\
             Blue → Golden hour (AM),03/01/2025,06:30,03/01/2025,07:45,False,\
             \"Window: morning\nStart: 2025-03-01T06:30:00-05:00\nEnd: 2025-03-01T07:45:00-05:00\",,True\n\
             Golden → Blue hour (PM),03/01/2025,17:45,03/01/2025,18:20,False,\
             \"Window: evening\nStart: 2025-03-01T17:45:00-05:00\nEnd: 2025-03-01T18:20:00-05:00\",,True\n"
        );
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_empty_input_has_header_only() {
        let csv = generate_csv(&[], &FixedSunTimes(Default::default())).unwrap();
        assert_eq!(csv, format!("{HEADER}\n"));
    }

    #[test]
    fn test_full_schedule_description_is_english() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let windows = select(
            date,
            &new_york_june(),
            Some(40.7128),
            Some(-74.0060),
            chrono_tz::America::New_York,
        );
        let csv = generate_csv(&windows, &FixedSunTimes(new_york_june())).unwrap();

        assert!(csv.contains("Blue → Golden hour (AM),06/15/2025,04:52,06/15/2025,06:06,False,\""));
        assert!(csv.contains("Golden → Blue hour (PM),06/15/2025,19:48,06/15/2025,21:03,False,\""));
        assert!(csv.contains("05:24  Sunrise\n"));
        assert!(csv.ends_with("\",,True\n"));
    }

    #[test]
    fn test_quoting_only_when_needed() {
        let row = vec![
            "plain".to_string(),
            "with, comma".to_string(),
            "say \"hi\"".to_string(),
            "two\nlines".to_string(),
            "semi;colon".to_string(),
            String::new(),
            "tab\there".to_string(),
            "a'b".to_string(),
            "→".to_string(),
        ];
        let csv = write_rows([row]).unwrap();
        let body = csv.strip_prefix(&format!("{HEADER}\n")).unwrap();

        assert_eq!(
            body,
            "plain,\"with, comma\",\"say \"\"hi\"\"\",\"two\nlines\",semi;colon,,tab\there,a'b,→\n"
        );
    }
}
