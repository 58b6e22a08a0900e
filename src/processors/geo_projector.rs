use crate::error::Result;
use crate::models::{GeoPoint, ObservationTable, TemperatureObservation};
use crate::utils::coordinates::{parse_hemisphere_coordinate, validate_axis_bounds, Axis};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use validator::Validate;

/// Parsed map markers plus a count of rows that could not be placed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoProjection {
    pub points: Vec<GeoPoint>,
    pub skipped: usize,
}

impl GeoProjection {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct years in ascending order, one per animation frame
    pub fn frames(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.points.iter().map(|p| p.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

/// Place a single row on the map.
///
/// Returns `Ok(None)` for rows lacking coordinates or temperature; those are
/// excluded before any parsing is attempted.
pub fn project_row(row: &TemperatureObservation) -> Result<Option<GeoPoint>> {
    let (Some(lat_raw), Some(lon_raw), Some(temperature)) =
        (&row.latitude_raw, &row.longitude_raw, row.measured_temperature())
    else {
        return Ok(None);
    };

    let latitude = parse_hemisphere_coordinate(lat_raw, Axis::Latitude)?;
    let longitude = parse_hemisphere_coordinate(lon_raw, Axis::Longitude)?;
    validate_axis_bounds(latitude, Axis::Latitude)?;
    validate_axis_bounds(longitude, Axis::Longitude)?;

    let point = GeoPoint::new(
        latitude,
        longitude,
        temperature,
        row.region.clone(),
        row.year,
        row.date,
    );
    point.validate()?;

    Ok(Some(point))
}

/// Build the map table. Rows with malformed coordinates are logged and
/// skipped; they stay in every other view of the data.
pub fn project_geo(table: &ObservationTable) -> GeoProjection {
    let mut projection = GeoProjection::default();
    let mut incomplete = 0usize;

    for row in table {
        match project_row(row) {
            Ok(Some(point)) => projection.points.push(point),
            Ok(None) => incomplete += 1,
            Err(e) => {
                warn!(region = %row.region, date = %row.date, error = %e, "Skipping row on map");
                projection.skipped += 1;
            }
        }
    }

    debug!(
        points = projection.points.len(),
        skipped = projection.skipped,
        incomplete,
        "Projected observations onto map"
    );

    projection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use chrono::NaiveDate;

    fn located(region: &str, year: i32, temp: Option<f64>, lat: &str, lon: &str) -> TemperatureObservation {
        let date = NaiveDate::from_ymd_opt(year, 6, 1).unwrap();
        TemperatureObservation::new(date, region, temp).with_coordinates(lat, lon)
    }

    #[test]
    fn test_project_row() {
        let row = located("Rio De Janeiro", 1900, Some(24.1), "23.31S", "42.82W");
        let point = project_row(&row).unwrap().unwrap();

        assert_eq!(point.latitude, -23.31);
        assert_eq!(point.longitude, -42.82);
        assert_eq!(point.temperature, 24.1);
        assert_eq!(point.region, "Rio De Janeiro");
        assert_eq!(point.year, 1900);
    }

    #[test]
    fn test_missing_values_are_excluded_before_parsing() {
        // The bogus coordinates would fail to parse if they were looked at
        let no_temp = located("Paris", 2000, None, "bogus", "bogus");
        assert!(project_row(&no_temp).unwrap().is_none());

        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let no_coords = TemperatureObservation::new(date, "Paris", Some(10.0));
        assert!(project_row(&no_coords).unwrap().is_none());
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let row = located("Atlantis", 2000, Some(10.0), "10.0Z", "2.45E");
        assert!(matches!(
            project_row(&row),
            Err(DashboardError::MalformedCoordinate(_))
        ));

        let row = located("Atlantis", 2000, Some(10.0), "95.0N", "2.45E");
        assert!(project_row(&row).is_err());
    }

    #[test]
    fn test_project_geo_skips_and_continues() {
        let table = ObservationTable::new(vec![
            located("Paris", 2000, Some(10.0), "49.03N", "2.45E"),
            located("Atlantis", 2000, Some(15.0), "10.0Z", "2.45E"),
            located("London", 2001, None, "52.24N", "0.00W"),
            located("London", 2001, Some(8.0), "52.24N", "0.00W"),
        ]);

        let projection = project_geo(&table);

        assert_eq!(projection.len(), 2);
        assert_eq!(projection.skipped, 1);
        assert_eq!(projection.points[0].region, "Paris");
        assert_eq!(projection.points[1].region, "London");
        assert!(projection.points[1].longitude.is_sign_negative());
        assert_eq!(projection.frames(), vec![2000, 2001]);
    }
}
