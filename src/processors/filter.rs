use crate::error::{DashboardError, Result};
use crate::models::{ObservationTable, TemperatureObservation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A user's choice of city and inclusive year range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub region: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl Selection {
    pub fn new(region: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            region: region.into(),
            start_year,
            end_year,
        }
    }

    /// Selection spanning every year present in `table`, or `None` when the
    /// table is empty
    pub fn full_range(table: &ObservationTable, region: impl Into<String>) -> Option<Self> {
        let (start_year, end_year) = table.year_bounds()?;
        Some(Self::new(region, start_year, end_year))
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_year > self.end_year {
            return Err(DashboardError::InvalidSelection(format!(
                "start year {} is after end year {}",
                self.start_year, self.end_year
            )));
        }

        Ok(())
    }

    /// Region match is exact and case-sensitive; year bounds are inclusive
    pub fn matches(&self, row: &TemperatureObservation) -> bool {
        row.region == self.region && (self.start_year..=self.end_year).contains(&row.year)
    }
}

/// Rows of `table` matching `selection`, in source order
pub fn filter(table: &ObservationTable, selection: &Selection) -> ObservationTable {
    let filtered: ObservationTable = table
        .iter()
        .filter(|row| selection.matches(row))
        .cloned()
        .collect();

    debug!(
        region = %selection.region,
        start_year = selection.start_year,
        end_year = selection.end_year,
        matched = filtered.len(),
        "Filtered observations"
    );

    filtered
}
