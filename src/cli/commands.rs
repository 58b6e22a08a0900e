use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::error::{DashboardError, Result};
use crate::models::ObservationTable;
use crate::pipeline::{DashboardPipeline, DashboardRequest};
use crate::processors::{project_geo, GeoProjection, Selection};
use crate::settings::DashboardConfig;
use crate::utils::coordinates::{format_hemisphere_coordinate, Axis};
use tracing::{debug, info};

pub fn run(cli: Cli) -> Result<()> {
    let config = DashboardConfig::load(cli.config.as_deref())?.with_data_path(cli.data);
    debug!(data_path = %config.data_path.display(), "Using dataset");

    let pipeline = DashboardPipeline::new(config);

    match cli.command {
        Commands::Regions => {
            let table = pipeline.load_table(cli.quiet)?;
            let regions = table.regions();

            match table.year_bounds() {
                Some((first, last)) => println!(
                    "{} cities, {} observations, {}-{}",
                    regions.len(),
                    table.len(),
                    first,
                    last
                ),
                None => println!("No observations in dataset"),
            }
            for region in regions {
                println!("{}", region);
            }
        }

        Commands::Summary {
            region,
            start_year,
            end_year,
            show_map,
            format,
        } => {
            let table = pipeline.load_table(cli.quiet)?;
            let selection = resolve_selection(&table, region, start_year, end_year)?;
            let request = DashboardRequest::new(selection).with_map(show_map);

            let view = pipeline.build_view(&table, &request)?;

            match format {
                OutputFormat::Text => print!("{}", view.report()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }
        }

        Commands::Map { format, year } => {
            let table = pipeline.load_table(cli.quiet)?;
            let projection = map_projection(&table, year);
            info!(points = projection.len(), skipped = projection.skipped, "Built map table");

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projection)?),
                OutputFormat::Text => {
                    println!("Global Temperature Map ({} points, {} skipped)", projection.len(), projection.skipped);
                    for point in &projection.points {
                        println!(
                            "{} {:<20} {:>8} {:>8} {:>7.3} °C",
                            point.date,
                            point.region,
                            format_hemisphere_coordinate(point.latitude, Axis::Latitude),
                            format_hemisphere_coordinate(point.longitude, Axis::Longitude),
                            point.temperature
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

/// Fill unset years from the dataset bounds and check the city exists
pub fn resolve_selection(
    table: &ObservationTable,
    region: String,
    start_year: Option<i32>,
    end_year: Option<i32>,
) -> Result<Selection> {
    if !table.has_region(&region) {
        return Err(DashboardError::InvalidSelection(format!(
            "unknown city '{}' (run `landtemp regions` to list cities)",
            region
        )));
    }

    let mut selection = Selection::full_range(table, region).ok_or_else(|| {
        DashboardError::InvalidSelection("dataset contains no observations".to_string())
    })?;
    if let Some(y) = start_year {
        selection.start_year = y;
    }
    if let Some(y) = end_year {
        selection.end_year = y;
    }

    selection.validate()?;
    Ok(selection)
}

/// Map table for one animation frame, or for every year when `year` is unset.
/// Rows are narrowed before projecting so `skipped` only counts that frame.
pub fn map_projection(table: &ObservationTable, year: Option<i32>) -> GeoProjection {
    match year {
        Some(y) => {
            let frame: ObservationTable = table.iter().filter(|row| row.year == y).cloned().collect();
            project_geo(&frame)
        }
        None => project_geo(table),
    }
}
