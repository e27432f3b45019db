//! Coordinates for building locations.

use std::f64::consts::PI;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A latitude (`x`) and longitude (`y`) pair stored in a Postgres `point`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees.
    pub x: f64,
    /// Longitude in degrees.
    pub y: f64,
}

impl Point {
    /// Convert a `(latitude, longitude)` string pair into a point.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidCoordinate`] when either part is not
    /// a finite number.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_data::Point;
    ///
    /// let point = Point::from_pair("16.75", "100.19").expect("valid pair");
    /// assert_eq!(point, Point { x: 16.75, y: 100.19 });
    /// assert!(Point::from_pair("north", "100.19").is_err());
    /// ```
    pub fn from_pair(latitude: &str, longitude: &str) -> Result<Self, GenerationError> {
        Ok(Self {
            x: parse_component(latitude)?,
            y: parse_component(longitude)?,
        })
    }

    /// Postgres `point` literal, `(x,y)`.
    #[must_use]
    pub fn to_pg_literal(&self) -> String {
        format!("({},{})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = GenerationError;

    /// Parse a `lat,lng` string.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let Some((latitude, longitude)) = value.split_once(',') else {
            return Err(GenerationError::InvalidCoordinate {
                value: value.to_owned(),
                message: "expected 'latitude,longitude'".to_owned(),
            });
        };
        Self::from_pair(latitude, longitude)
    }
}

fn parse_component(raw: &str) -> Result<f64, GenerationError> {
    let trimmed = raw.trim();
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|err| GenerationError::InvalidCoordinate {
            value: trimmed.to_owned(),
            message: err.to_string(),
        })?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(GenerationError::InvalidCoordinate {
            value: trimmed.to_owned(),
            message: "coordinate must be finite".to_owned(),
        })
    }
}

/// Sample a point within `radius_km` kilometres of `center`.
///
/// Uses an equirectangular approximation, which is accurate enough for
/// campus-sized radii.
#[expect(
    clippy::float_arithmetic,
    reason = "offsets are computed in floating point"
)]
pub fn nearby_point<R: Rng + ?Sized>(rng: &mut R, center: Point, radius_km: f64) -> Point {
    let distance = radius_km * rng.random::<f64>().sqrt();
    let bearing = rng.random_range(0.0..2.0 * PI);

    let delta_lat = (distance * bearing.cos()) / EARTH_RADIUS_KM;
    let delta_lng = (distance * bearing.sin()) / (EARTH_RADIUS_KM * center.x.to_radians().cos());

    Point {
        x: center.x + delta_lat.to_degrees(),
        y: center.y + delta_lng.to_degrees(),
    }
}
