use crate::utils::constants::MISSING_VALUE_MARKERS;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// One CSV row, keyed by the source file's column names
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawObservation {
    #[serde(rename = "dt", deserialize_with = "deserialize_observation_date")]
    pub date: NaiveDate,

    #[serde(rename = "AverageTemperature", deserialize_with = "deserialize_optional_measurement")]
    pub average_temperature: Option<f64>,

    #[serde(
        rename = "AverageTemperatureUncertainty",
        deserialize_with = "deserialize_optional_measurement"
    )]
    pub average_temperature_uncertainty: Option<f64>,

    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "Country", default)]
    pub country: Option<String>,

    #[serde(rename = "Latitude", default, deserialize_with = "deserialize_optional_text")]
    pub latitude: Option<String>,

    #[serde(rename = "Longitude", default, deserialize_with = "deserialize_optional_text")]
    pub longitude: Option<String>,
}

/// A normalized observation. Serialized with the display column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    #[serde(rename = "dt")]
    pub date: NaiveDate,

    #[serde(rename = "Year")]
    pub year: i32,

    #[serde(rename = "Region")]
    pub region: String,

    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,

    #[serde(rename = "Uncertainty")]
    pub uncertainty: Option<f64>,

    #[serde(rename = "Country")]
    pub country: Option<String>,

    #[serde(rename = "Latitude")]
    pub latitude_raw: Option<String>,

    #[serde(rename = "Longitude")]
    pub longitude_raw: Option<String>,
}

impl TemperatureObservation {
    pub fn new(date: NaiveDate, region: impl Into<String>, temperature: Option<f64>) -> Self {
        Self {
            date,
            year: date.year(),
            region: region.into(),
            temperature,
            uncertainty: None,
            country: None,
            latitude_raw: None,
            longitude_raw: None,
        }
    }

    pub fn with_coordinates(
        mut self,
        latitude_raw: impl Into<String>,
        longitude_raw: impl Into<String>,
    ) -> Self {
        self.latitude_raw = Some(latitude_raw.into());
        self.longitude_raw = Some(longitude_raw.into());
        self
    }

    /// The temperature if present and finite
    pub fn measured_temperature(&self) -> Option<f64> {
        self.temperature.filter(|t| t.is_finite())
    }

    pub fn has_temperature(&self) -> bool {
        self.measured_temperature().is_some()
    }

    /// Whether the row carries everything the map projection needs
    pub fn is_mappable(&self) -> bool {
        self.has_temperature() && self.latitude_raw.is_some() && self.longitude_raw.is_some()
    }
}

/// Parse an observation date, accepting an optional time component
pub fn parse_observation_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
}

fn deserialize_observation_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_observation_date(&value)
        .map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", value, e)))
}

/// Parse a numeric cell. Missing-value markers and non-finite numbers are
/// `None`; anything else that is not a number is an error.
pub fn parse_measurement(value: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    let trimmed = value.trim();
    if MISSING_VALUE_MARKERS.contains(&trimmed) {
        return Ok(None);
    }

    let number = trimmed.parse::<f64>()?;
    Ok(Some(number).filter(|v| v.is_finite()))
}

fn deserialize_optional_measurement<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_measurement(&value)
        .map_err(|e| serde::de::Error::custom(format!("invalid number '{}': {}", value, e)))
}

// Blank coordinate cells are missing values, not empty strings
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
