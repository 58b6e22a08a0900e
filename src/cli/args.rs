use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "landtemp")]
#[command(about = "Explore historical land temperatures by major city")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Temperature CSV file [default: ./data/GlobalLandTemperaturesByMajorCity.csv]")]
    pub data: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Configuration file [default: ./landtemp.toml if present]")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, conflicts_with = "verbose", help = "Only log warnings and errors; hide progress")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the cities in the dataset and the years it covers
    Regions,

    /// Filter by city and year range, then report mean and rolling average
    Summary {
        #[arg(short, long, help = "City name (case-sensitive)")]
        region: String,

        #[arg(short, long, help = "First year, inclusive [default: earliest year in the data]")]
        start_year: Option<i32>,

        #[arg(short, long, help = "Last year, inclusive [default: latest year in the data]")]
        end_year: Option<i32>,

        #[arg(long, default_value = "false", help = "Also build the animated map table")]
        show_map: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print every city observation placed on the map
    Map {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(long, help = "Only include this year")]
        year: Option<i32>,
    },
}
