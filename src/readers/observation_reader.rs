use crate::error::{DashboardError, Result};
use crate::models::RawObservation;
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, REQUIRED_COLUMNS};
use crate::utils::progress::ProgressReporter;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

const PROGRESS_STEP: usize = 10_000;

/// Reads the city temperature CSV into raw rows
pub struct ObservationReader;

impl ObservationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every row of the file at `path`.
    ///
    /// Any failure (missing file, unreadable bytes, missing columns, a row
    /// that does not parse) is reported as `DataUnavailable`.
    pub fn read_observations(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<RawObservation>> {
        info!(path = %path.display(), "Loading temperature data");

        let file = File::open(path).map_err(|e| DashboardError::data_unavailable(path, e))?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let rows = self
            .read_from(reader, progress)
            .map_err(|e| match e {
                DashboardError::DataUnavailable { reason, .. } => {
                    DashboardError::data_unavailable(path, reason)
                }
                other => DashboardError::data_unavailable(path, other),
            })?;

        info!(rows = rows.len(), "Loaded temperature data");
        Ok(rows)
    }

    /// Read rows from any CSV source; used by `read_observations` and tests
    pub fn read_from<R: Read>(
        &self,
        source: R,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<RawObservation>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = csv_reader.headers()?.clone();
        debug!(columns = ?headers.iter().collect::<Vec<_>>(), "Read CSV header");
        self.check_required_columns(&headers)?;

        let mut rows = Vec::new();
        for (index, record) in csv_reader.deserialize::<RawObservation>().enumerate() {
            let row = record.map_err(|e| {
                DashboardError::data_unavailable(
                    "<input>",
                    format!("row {}: {}", index + 2, e),
                )
            })?;
            rows.push(row);

            if (index + 1) % PROGRESS_STEP == 0 {
                if let Some(p) = progress {
                    p.increment(PROGRESS_STEP as u64);
                }
            }
        }

        if let Some(p) = progress {
            p.finish_with_message(&format!("Loaded {} rows", rows.len()));
        }

        Ok(rows)
    }

    fn check_required_columns(&self, headers: &csv::StringRecord) -> Result<()> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::data_unavailable(
                "<input>",
                format!("missing required columns: {}", missing.join(", ")),
            ))
        }
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "dt,AverageTemperature,AverageTemperatureUncertainty,City,Country,Latitude,Longitude";

    #[test]
    fn test_read_observations_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "1849-01-01,26.704,1.435,Abidjan,Côte D'Ivoire,5.63N,3.23W")?;
        writeln!(temp_file, "1849-02-01,,,Abidjan,Côte D'Ivoire,5.63N,3.23W")?;
        writeln!(temp_file, "1850-01-01,3.1,0.5,Paris,France,49.03N,2.45E")?;

        let reader = ObservationReader::new();
        let rows = reader.read_observations(temp_file.path(), None)?;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(1849, 1, 1).unwrap());
        assert_eq!(rows[0].average_temperature, Some(26.704));
        assert_eq!(rows[0].city, "Abidjan");
        assert_eq!(rows[0].latitude.as_deref(), Some("5.63N"));
        assert_eq!(rows[1].average_temperature, None);
        assert_eq!(rows[1].average_temperature_uncertainty, None);
        assert_eq!(rows[2].country.as_deref(), Some("France"));

        Ok(())
    }

    #[test]
    fn test_extra_columns_are_ignored() -> Result<()> {
        let csv = format!("{},Station\n2000-01-01,10.0,0.2,Paris,France,49.03N,2.45E,ORLY\n", HEADER);
        let rows = ObservationReader::new().read_from(csv.as_bytes(), None)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city, "Paris");
        Ok(())
    }

    #[test]
    fn test_blank_coordinates_are_missing() -> Result<()> {
        let csv = format!("{}\n2000-01-01,10.0,0.2,Paris,France,,\n", HEADER);
        let rows = ObservationReader::new().read_from(csv.as_bytes(), None)?;
        assert_eq!(rows[0].latitude, None);
        assert_eq!(rows[0].longitude, None);
        Ok(())
    }

    #[test]
    fn test_missing_value_markers_are_missing() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "2000-01-01,10.0,0.3,Paris,France,49.03N,2.45E")?;
        writeln!(temp_file, "2001-01-01,NaN,NaN,Paris,France,49.03N,2.45E")?;
        writeln!(temp_file, "2002-01-01,NA,N/A,Paris,France,49.03N,2.45E")?;
        writeln!(temp_file, "2003-01-01,null,nan,Paris,France,49.03N,2.45E")?;

        let rows = ObservationReader::new().read_observations(temp_file.path(), None)?;

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].average_temperature, Some(10.0));
        for row in &rows[1..] {
            assert_eq!(row.average_temperature, None);
            assert_eq!(row.average_temperature_uncertainty, None);
        }

        let table = crate::processors::normalize(&rows);
        assert_eq!(
            crate::analyzers::mean_temperature(&table),
            crate::analyzers::MeanTemperature::Value(10.0)
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let reader = ObservationReader::new();
        let result = reader.read_observations(Path::new("does/not/exist.csv"), None);

        match result {
            Err(DashboardError::DataUnavailable { path, .. }) => {
                assert_eq!(path, Path::new("does/not/exist.csv"));
            }
            other => panic!("expected DataUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_is_data_unavailable() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "dt,AverageTemperature,City")?;
        writeln!(temp_file, "2000-01-01,10.0,Paris")?;

        let err = ObservationReader::new()
            .read_observations(temp_file.path(), None)
            .unwrap_err();

        match err {
            DashboardError::DataUnavailable { path, reason } => {
                assert_eq!(path, temp_file.path());
                assert!(reason.contains("AverageTemperatureUncertainty"));
                assert!(reason.contains("Latitude"));
            }
            other => panic!("expected DataUnavailable, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_malformed_row_is_data_unavailable() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "2000-01-01,warm,0.2,Paris,France,49.03N,2.45E")?;

        let err = ObservationReader::new()
            .read_observations(temp_file.path(), None)
            .unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable { .. }));
        assert!(err.to_string().contains("row 2"));

        let csv = format!("{}\nnot-a-date,10.0,0.2,Paris,France,49.03N,2.45E\n", HEADER);
        let err = ObservationReader::new()
            .read_from(csv.as_bytes(), None)
            .unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable { .. }));

        Ok(())
    }
}
