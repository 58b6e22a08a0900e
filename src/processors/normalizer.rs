use crate::models::{ObservationTable, RawObservation, TemperatureObservation};
use crate::utils::constants::{
    COL_CITY, COL_TEMPERATURE, COL_UNCERTAINTY, DISPLAY_REGION, DISPLAY_TEMPERATURE,
    DISPLAY_UNCERTAINTY,
};
use chrono::Datelike;
use tracing::debug;

/// Rows that can be brought into normalized form
pub trait ToObservation {
    fn to_observation(&self) -> TemperatureObservation;
}

impl ToObservation for RawObservation {
    fn to_observation(&self) -> TemperatureObservation {
        TemperatureObservation {
            date: self.date,
            year: self.date.year(),
            region: self.city.clone(),
            temperature: self.average_temperature,
            uncertainty: self.average_temperature_uncertainty,
            country: self.country.clone(),
            latitude_raw: self.latitude.clone(),
            longitude_raw: self.longitude.clone(),
        }
    }
}

// Already normalized rows only get their year re-derived
impl ToObservation for TemperatureObservation {
    fn to_observation(&self) -> TemperatureObservation {
        TemperatureObservation {
            year: self.date.year(),
            ..self.clone()
        }
    }
}

/// Derive `year` and apply display names. No rows are dropped and missing
/// values stay missing.
pub fn normalize<T: ToObservation>(rows: &[T]) -> ObservationTable {
    let table: ObservationTable = rows.iter().map(|row| row.to_observation()).collect();
    debug!(rows = table.len(), "Normalized observations");
    table
}

/// Display name for a source column; unrenamed columns keep their name
pub fn column_display_name(source: &str) -> &str {
    match source {
        COL_TEMPERATURE => DISPLAY_TEMPERATURE,
        COL_UNCERTAINTY => DISPLAY_UNCERTAINTY,
        COL_CITY => DISPLAY_REGION,
        other => other,
    }
}
