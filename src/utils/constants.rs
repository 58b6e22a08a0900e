/// Default dataset location, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "./data/GlobalLandTemperaturesByMajorCity.csv";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "landtemp.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LANDTEMP";

/// Source column names
pub const COL_DATE: &str = "dt";
pub const COL_TEMPERATURE: &str = "AverageTemperature";
pub const COL_UNCERTAINTY: &str = "AverageTemperatureUncertainty";
pub const COL_CITY: &str = "City";
pub const COL_COUNTRY: &str = "Country";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";

/// Columns the loader refuses to run without
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_DATE,
    COL_TEMPERATURE,
    COL_UNCERTAINTY,
    COL_CITY,
    COL_LATITUDE,
    COL_LONGITUDE,
];

/// Cell contents read as a missing numeric value
pub const MISSING_VALUE_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Display names given by the normalizer
pub const DISPLAY_TEMPERATURE: &str = "Temperature";
pub const DISPLAY_UNCERTAINTY: &str = "Uncertainty";
pub const DISPLAY_REGION: &str = "Region";

/// Trailing window of the rolling average
pub const ROLLING_WINDOW: usize = 10;

/// Padding applied around the temperature extent of the line chart (°C)
pub const CHART_Y_PADDING: f64 = 0.5;

/// Geographic bounds
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
