use crate::analyzers::{chart_y_range, mean_temperature, rolling_average, MeanTemperature, RollingPoint};
use crate::error::Result;
use crate::models::ObservationTable;
use crate::processors::{
    column_display_name, filter, normalize, project_geo, GeoProjection, Selection,
};
use crate::readers::ObservationReader;
use crate::settings::DashboardConfig;
use crate::utils::constants::COL_TEMPERATURE;
use crate::utils::progress::ProgressReporter;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Parameters produced by the interactive controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub selection: Selection,
    pub show_map: bool,
}

impl DashboardRequest {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            show_map: false,
        }
    }

    pub fn with_map(mut self, show_map: bool) -> Self {
        self.show_map = show_map;
        self
    }
}

/// Everything the presentation layer draws for one interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub selection: Selection,
    pub rows: ObservationTable,
    pub mean: MeanTemperature,
    pub rolling: Vec<RollingPoint>,
    pub y_range: Option<(f64, f64)>,
    pub map: Option<GeoProjection>,
}

impl DashboardView {
    pub fn report(&self) -> String {
        let mut out = format!(
            "Temperature Trends for {} ({}-{})\n",
            self.selection.region, self.selection.start_year, self.selection.end_year
        );
        out.push_str(&format!("Rows: {}\n", self.rows.len()));
        out.push_str(&format!("{}\n", self.mean));

        if let Some((low, high)) = self.y_range {
            out.push_str(&format!("Chart range: {:.2} °C to {:.2} °C\n", low, high));
        }

        if !self.rows.is_empty() {
            out.push_str(&format!(
                "\n{:<5} {:<10}  {:>11}  {:>11}\n",
                "Year",
                "Date",
                column_display_name(COL_TEMPERATURE),
                "Rolling Avg"
            ));
            for point in &self.rolling {
                out.push_str(&format!(
                    "{:<5} {}  {:>11}  {:>11}\n",
                    point.year,
                    point.date,
                    format_cell(point.temperature),
                    format_cell(point.value)
                ));
            }
        }

        if let Some(map) = &self.map {
            out.push_str(&format!(
                "\nMap: {} points across {} frames ({} rows skipped)\n",
                map.len(),
                map.frames().len(),
                map.skipped
            ));
        }

        out
    }
}

fn format_cell(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "-".to_string())
}

/// Load → normalize → filter → aggregate → project, re-run per request
pub struct DashboardPipeline {
    config: DashboardConfig,
}

impl DashboardPipeline {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Read and normalize the dataset
    pub fn load_table(&self, quiet: bool) -> Result<ObservationTable> {
        let progress = if quiet || !self.config.show_progress {
            ProgressReporter::silent()
        } else {
            ProgressReporter::new_spinner("Loading temperature data...", false)
        };

        let raw = ObservationReader::new().read_observations(&self.config.data_path, Some(&progress))?;
        Ok(normalize(&raw))
    }

    /// Derive the view for `request` from an already loaded table
    pub fn build_view(
        &self,
        table: &ObservationTable,
        request: &DashboardRequest,
    ) -> Result<DashboardView> {
        request.selection.validate()?;

        let rows = filter(table, &request.selection);
        let mean = mean_temperature(&rows);
        let rolling = rolling_average(&rows, self.config.rolling_window)?;
        let y_range = chart_y_range(&rows);

        // The map animates every city over time, so it is built from the
        // whole table rather than the selection.
        let map = request.show_map.then(|| project_geo(table));

        info!(
            region = %request.selection.region,
            rows = rows.len(),
            mean = ?mean.value(),
            map_points = map.as_ref().map(|m| m.len()),
            "Built dashboard view"
        );

        Ok(DashboardView {
            selection: request.selection.clone(),
            rows,
            mean,
            rolling,
            y_range,
            map,
        })
    }

    pub fn run(&self, request: &DashboardRequest, quiet: bool) -> Result<DashboardView> {
        let table = self.load_table(quiet)?;
        self.build_view(&table, request)
    }
}
