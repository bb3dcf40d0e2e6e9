/// Daily reading record.
///
/// Each cycle's readings are written to `<reports_dir>/Sensors <YYYY-MM-DD>.csv`,
/// one row per sensor, no header:
///
/// ```text
/// date,name,flow,min,max,highwater,flood,high_percent,flood_percent
/// ```
///
/// A second run on the same day replaces that day's file. The reports
/// directory is provisioned by the operator and never created here.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::model::{Reading, StorageError};

/// Record file name for `date`, e.g. `Sensors 2026-10-16.csv`.
pub fn record_file_name(date: NaiveDate) -> String {
    format!("Sensors {}.csv", date.format("%Y-%m-%d"))
}

/// Writes `readings` to the dated record file under `reports_dir`,
/// returning the file's path.
///
/// # Errors
/// - `StorageError::MissingDirectory` if `reports_dir` is not a directory.
/// - `StorageError::Write` if the file cannot be created or written.
pub fn record_sensor_readings(
    reports_dir: &Path,
    readings: &[Reading],
    date: NaiveDate,
) -> Result<PathBuf, StorageError> {
    if !reports_dir.is_dir() {
        return Err(StorageError::MissingDirectory(reports_dir.to_path_buf()));
    }

    let path = reports_dir.join(record_file_name(date));
    let write_error = |source| StorageError::Write { path: path.clone(), source };

    let mut out = BufWriter::new(File::create(&path).map_err(write_error)?);
    for reading in readings {
        out.write_all(csv_row(date, reading).as_bytes()).map_err(write_error)?;
    }
    out.flush().map_err(write_error)?;

    tracing::info!(path = %path.display(), rows = readings.len(), "sensor readings recorded");
    Ok(path)
}

/// `record_sensor_readings` for today's date.
pub fn record_today(reports_dir: &Path, readings: &[Reading]) -> Result<PathBuf, StorageError> {
    record_sensor_readings(reports_dir, readings, Local::now().date_naive())
}

fn csv_row(date: NaiveDate, reading: &Reading) -> String {
    let fields = [
        Cow::Owned(date.format("%Y-%m-%d").to_string()),
        csv_field(&reading.name),
        Cow::Owned(format!("{:?}", reading.flow)),
        Cow::Owned(format!("{:?}", reading.min)),
        Cow::Owned(format!("{:?}", reading.max)),
        Cow::Owned(format!("{:?}", reading.highwater)),
        Cow::Owned(format!("{:?}", reading.flood)),
        Cow::Owned(format!("{:?}", reading.high_percent)),
        Cow::Owned(format!("{:?}", reading.flood_percent)),
    ];
    let mut row = fields.join(",");
    row.push_str("\r\n");
    row
}

/// Quotes a field containing a delimiter, quote, or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn two_readings() -> Vec<Reading> {
        vec![
            Reading::new("Test Creek", 5.0, 1.0, 10.0, 10.0, 4.0),
            Reading::new("Jordan River Surplus Canal", 150.75, 98.1, 210.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_file_name_uses_iso_date() {
        assert_eq!(record_file_name(record_date()), "Sensors 2026-10-16.csv");
    }

    #[test]
    fn test_two_readings_write_two_rows_of_nine_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = record_sensor_readings(dir.path(), &two_readings(), record_date())
            .expect("record should be written");

        assert_eq!(path, dir.path().join("Sensors 2026-10-16.csv"));
        let contents = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows.len(), 2, "no header, one row per reading");

        assert_eq!(rows[0], "2026-10-16,Test Creek,5.0,1.0,10.0,10.0,4.0,50.0,125.0");
        assert_eq!(
            rows[1],
            "2026-10-16,Jordan River Surplus Canal,150.75,98.1,210.0,0.0,0.0,0.0,0.0"
        );
        for row in rows {
            assert_eq!(row.split(',').count(), 9);
        }
    }

    #[test]
    fn test_rows_end_with_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = record_sensor_readings(dir.path(), &two_readings(), record_date()).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.matches("\r\n").count(), 2);
        assert!(contents.ends_with("\r\n"));
    }

    #[test]
    fn test_same_day_run_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        record_sensor_readings(dir.path(), &two_readings(), record_date()).unwrap();
        let path = record_sensor_readings(dir.path(), &two_readings()[..1], record_date()).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_empty_cycle_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = record_sensor_readings(dir.path(), &[], record_date()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_missing_directory_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Reports");

        let result = record_sensor_readings(&missing, &two_readings(), record_date());
        match result {
            Err(StorageError::MissingDirectory(path)) => assert_eq!(path, missing),
            other => panic!("expected MissingDirectory, got {:?}", other),
        }
        assert!(!missing.exists(), "recorder must not create the reports directory");
    }

    #[test]
    fn test_names_with_delimiters_are_quoted() {
        assert_eq!(csv_field("Mill Creek @ 460 West"), "Mill Creek @ 460 West");
        assert_eq!(csv_field("Creek, North Fork"), "\"Creek, North Fork\"");
        assert_eq!(csv_field("The \"Big\" Ditch"), "\"The \"\"Big\"\" Ditch\"");
    }
}
