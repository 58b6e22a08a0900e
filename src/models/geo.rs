use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single map marker: one observation placed at its city's coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub temperature: f64,

    #[validate(length(min = 1))]
    pub region: String,

    pub year: i32,

    pub date: NaiveDate,
}

impl GeoPoint {
    pub fn new(
        latitude: f64,
        longitude: f64,
        temperature: f64,
        region: String,
        year: i32,
        date: NaiveDate,
    ) -> Self {
        Self {
            latitude,
            longitude,
            temperature,
            region,
            year,
            date,
        }
    }
}
