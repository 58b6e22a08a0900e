use crate::error::{DashboardError, Result};
use crate::utils::constants::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use serde::{Deserialize, Serialize};

/// Which half of a coordinate pair a string encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Sign carried by a trailing hemisphere letter, `None` if the letter
    /// does not belong to this axis
    pub fn hemisphere_sign(&self, hemisphere: char) -> Option<f64> {
        match (self, hemisphere) {
            (Axis::Latitude, 'N') | (Axis::Longitude, 'E') => Some(1.0),
            (Axis::Latitude, 'S') | (Axis::Longitude, 'W') => Some(-1.0),
            _ => None,
        }
    }

    pub fn expected_letters(&self) -> &'static str {
        match self {
            Axis::Latitude => "N or S",
            Axis::Longitude => "E or W",
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Axis::Latitude => (MIN_LAT, MAX_LAT),
            Axis::Longitude => (MIN_LON, MAX_LON),
        }
    }
}

/// Convert a hemisphere-suffixed coordinate to signed decimal degrees
///
/// # Examples
/// ```
/// use landtemp::utils::coordinates::{parse_hemisphere_coordinate, Axis};
///
/// assert_eq!(parse_hemisphere_coordinate("45.2N", Axis::Latitude).unwrap(), 45.2);
/// assert_eq!(parse_hemisphere_coordinate("23.1W", Axis::Longitude).unwrap(), -23.1);
/// assert!(parse_hemisphere_coordinate("10.0Z", Axis::Latitude).is_err());
/// ```
pub fn parse_hemisphere_coordinate(coord: &str, axis: Axis) -> Result<f64> {
    let trimmed = coord.trim();

    let hemisphere = trimmed.chars().last().ok_or_else(|| {
        DashboardError::MalformedCoordinate(format!("Empty {:?} value", axis))
    })?;

    let sign = axis.hemisphere_sign(hemisphere).ok_or_else(|| {
        DashboardError::MalformedCoordinate(format!(
            "Invalid hemisphere '{}' in '{}'. Expected {}",
            hemisphere,
            coord,
            axis.expected_letters()
        ))
    })?;

    let magnitude_str = &trimmed[..trimmed.len() - hemisphere.len_utf8()];
    let magnitude = magnitude_str.parse::<f64>().map_err(|_| {
        DashboardError::MalformedCoordinate(format!(
            "Invalid magnitude '{}' in '{}'",
            magnitude_str, coord
        ))
    })?;

    Ok(magnitude * sign)
}

/// Check a signed coordinate against the valid range of its axis
pub fn validate_axis_bounds(value: f64, axis: Axis) -> Result<()> {
    let (min, max) = axis.bounds();
    if !(min..=max).contains(&value) {
        return Err(DashboardError::MalformedCoordinate(format!(
            "{:?} {} is outside bounds [{}, {}]",
            axis, value, min, max
        )));
    }

    Ok(())
}

/// Format signed degrees back into hemisphere-suffixed form
pub fn format_hemisphere_coordinate(value: f64, axis: Axis) -> String {
    let letter = match (axis, value.is_sign_negative()) {
        (Axis::Latitude, false) => 'N',
        (Axis::Latitude, true) => 'S',
        (Axis::Longitude, false) => 'E',
        (Axis::Longitude, true) => 'W',
    };
    format!("{:.2}{}", value.abs(), letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latitude() {
        assert_eq!(parse_hemisphere_coordinate("45.2N", Axis::Latitude).unwrap(), 45.2);
        assert_eq!(parse_hemisphere_coordinate("5.63S", Axis::Latitude).unwrap(), -5.63);
        assert_eq!(parse_hemisphere_coordinate(" 57.05N ", Axis::Latitude).unwrap(), 57.05);
    }

    #[test]
    fn test_parse_longitude() {
        assert_eq!(parse_hemisphere_coordinate("23.1W", Axis::Longitude).unwrap(), -23.1);
        assert_eq!(parse_hemisphere_coordinate("10.33E", Axis::Longitude).unwrap(), 10.33);
    }

    #[test]
    fn test_zero_keeps_hemisphere_sign() {
        let south = parse_hemisphere_coordinate("0.0S", Axis::Latitude).unwrap();
        assert_eq!(south, 0.0);
        assert!(south.is_sign_negative());

        let north = parse_hemisphere_coordinate("0.0N", Axis::Latitude).unwrap();
        assert!(north.is_sign_positive());
    }

    #[test]
    fn test_unexpected_hemisphere_letter() {
        assert!(matches!(
            parse_hemisphere_coordinate("10.0Z", Axis::Latitude),
            Err(DashboardError::MalformedCoordinate(_))
        ));
        // Letters from the other axis are rejected too
        assert!(parse_hemisphere_coordinate("10.0E", Axis::Latitude).is_err());
        assert!(parse_hemisphere_coordinate("10.0N", Axis::Longitude).is_err());
        // Lowercase is not accepted
        assert!(parse_hemisphere_coordinate("10.0n", Axis::Latitude).is_err());
    }

    #[test]
    fn test_invalid_magnitude() {
        assert!(parse_hemisphere_coordinate("abcN", Axis::Latitude).is_err());
        assert!(parse_hemisphere_coordinate("N", Axis::Latitude).is_err());
        assert!(parse_hemisphere_coordinate("", Axis::Latitude).is_err());
        assert!(parse_hemisphere_coordinate("   ", Axis::Longitude).is_err());
        assert!(parse_hemisphere_coordinate("45.2", Axis::Latitude).is_err());
    }

    #[test]
    fn test_axis_bounds() {
        assert!(validate_axis_bounds(51.5, Axis::Latitude).is_ok());
        assert!(validate_axis_bounds(-90.0, Axis::Latitude).is_ok());
        assert!(validate_axis_bounds(91.0, Axis::Latitude).is_err());
        assert!(validate_axis_bounds(-179.9, Axis::Longitude).is_ok());
        assert!(validate_axis_bounds(180.5, Axis::Longitude).is_err());
    }

    #[test]
    fn test_format_hemisphere_coordinate() {
        assert_eq!(format_hemisphere_coordinate(45.2, Axis::Latitude), "45.20N");
        assert_eq!(format_hemisphere_coordinate(-23.1, Axis::Longitude), "23.10W");
    }
}
