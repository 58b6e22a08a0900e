use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::TemperatureObservation;

/// Immutable, row-oriented view over normalized observations.
///
/// Every downstream stage (filtering, aggregation, projection) derives a new
/// table or value from this one; rows are never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationTable {
    rows: Vec<TemperatureObservation>,
}

impl ObservationTable {
    pub fn new(rows: Vec<TemperatureObservation>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TemperatureObservation] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemperatureObservation> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct regions in order of first appearance
    pub fn regions(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.region.as_str()))
            .map(|row| row.region.clone())
            .collect()
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.rows.iter().any(|row| row.region == region)
    }

    /// Smallest and largest year present, `None` for an empty table
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|row| row.year).min()?;
        let max = self.rows.iter().map(|row| row.year).max()?;
        Some((min, max))
    }

    /// Present, finite temperatures in row order
    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(|row| row.measured_temperature())
    }
}

impl FromIterator<TemperatureObservation> for ObservationTable {
    fn from_iter<I: IntoIterator<Item = TemperatureObservation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ObservationTable {
    type Item = &'a TemperatureObservation;
    type IntoIter = std::slice::Iter<'a, TemperatureObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(region: &str, year: i32, temp: Option<f64>) -> TemperatureObservation {
        let date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        TemperatureObservation::new(date, region, temp)
    }

    #[test]
    fn test_regions_first_seen_order() {
        let table = ObservationTable::new(vec![
            obs("Paris", 2000, Some(10.0)),
            obs("London", 2000, Some(8.0)),
            obs("Paris", 2001, Some(12.0)),
            obs("Abidjan", 1900, None),
        ]);

        assert_eq!(table.regions(), vec!["Paris", "London", "Abidjan"]);
        assert!(table.has_region("London"));
        assert!(!table.has_region("paris"));
    }

    #[test]
    fn test_year_bounds() {
        let table = ObservationTable::new(vec![
            obs("Paris", 2001, Some(12.0)),
            obs("London", 1850, None),
            obs("Paris", 2013, Some(9.0)),
        ]);
        assert_eq!(table.year_bounds(), Some((1850, 2013)));
        assert_eq!(ObservationTable::default().year_bounds(), None);
    }

    #[test]
    fn test_temperatures_skip_missing() {
        let table: ObservationTable = vec![
            obs("Paris", 2000, Some(10.0)),
            obs("Paris", 2001, None),
            obs("Paris", 2002, Some(12.0)),
            obs("Paris", 2003, Some(f64::NAN)),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.temperatures().collect::<Vec<_>>(), vec![10.0, 12.0]);
    }
}
