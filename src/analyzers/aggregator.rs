use crate::error::{DashboardError, Result};
use crate::models::ObservationTable;
use crate::utils::constants::CHART_Y_PADDING;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean temperature of a selection, or an explicit "no data" state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeanTemperature {
    Value(f64),
    NoData,
}

impl MeanTemperature {
    pub fn value(&self) -> Option<f64> {
        match self {
            MeanTemperature::Value(v) => Some(*v),
            MeanTemperature::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, MeanTemperature::NoData)
    }
}

impl fmt::Display for MeanTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeanTemperature::Value(v) => write!(f, "Average Temperature: {:.2} °C", v),
            MeanTemperature::NoData => write!(f, "No data available for the selected range."),
        }
    }
}

/// One position of the rolling-average series, aligned to a filtered row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingPoint {
    pub year: i32,
    pub date: NaiveDate,
    pub temperature: Option<f64>,
    /// `None` until a full window of present values is available
    pub value: Option<f64>,
}

/// Arithmetic mean of the non-missing temperatures
pub fn mean_temperature(table: &ObservationTable) -> MeanTemperature {
    let (sum, count) = table
        .temperatures()
        .fold((0.0f64, 0usize), |(sum, count), t| (sum + t, count + 1));

    if count == 0 {
        MeanTemperature::NoData
    } else {
        MeanTemperature::Value(sum / count as f64)
    }
}

/// Trailing mean over `window` samples, rows ordered by year.
///
/// Rows sharing a year keep their source order. A position is defined only
/// when it has `window - 1` predecessors and every value in the window is
/// present.
pub fn rolling_average(table: &ObservationTable, window: usize) -> Result<Vec<RollingPoint>> {
    if window == 0 {
        return Err(DashboardError::InvalidSelection(
            "rolling window must be at least 1".to_string(),
        ));
    }

    let mut rows: Vec<_> = table.iter().collect();
    rows.sort_by_key(|row| row.year);

    let temperatures: Vec<Option<f64>> = rows.iter().map(|row| row.measured_temperature()).collect();

    let series = rows
        .iter()
        .enumerate()
        .map(|(k, row)| {
            let value = if k + 1 >= window {
                temperatures[k + 1 - window..=k]
                    .iter()
                    .copied()
                    .sum::<Option<f64>>()
                    .map(|sum| sum / window as f64)
            } else {
                None
            };

            RollingPoint {
                year: row.year,
                date: row.date,
                temperature: row.measured_temperature(),
                value,
            }
        })
        .collect();

    Ok(series)
}

/// Lowest and highest non-missing temperature
pub fn temperature_extent(table: &ObservationTable) -> Option<(f64, f64)> {
    table.temperatures().fold(None, |extent, t| match extent {
        None => Some((t, t)),
        Some((min, max)) => Some((min.min(t), max.max(t))),
    })
}

/// Y-axis range for the line chart: the extent padded on both sides
pub fn chart_y_range(table: &ObservationTable) -> Option<(f64, f64)> {
    temperature_extent(table).map(|(min, max)| (min - CHART_Y_PADDING, max + CHART_Y_PADDING))
}
