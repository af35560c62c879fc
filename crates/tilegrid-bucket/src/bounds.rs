//! Longitude/latitude boxes.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in degrees, `x` = longitude and `y` = latitude.
///
/// A box whose `min.x` is greater than its `max.x` crosses the antimeridian.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoBox {
    /// South-west corner.
    pub min: DVec2,
    /// North-east corner.
    pub max: DVec2,
}

impl GeoBox {
    /// Construct from edges in degrees.
    #[must_use]
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min: DVec2::new(min_lon, min_lat),
            max: DVec2::new(max_lon, max_lat),
        }
    }

    /// Whether the box wraps across the antimeridian.
    #[must_use]
    pub fn crosses_antimeridian(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Longitudinal extent in degrees, counting eastward from `min.x`.
    #[must_use]
    pub fn lon_extent(&self) -> f64 {
        if self.crosses_antimeridian() {
            self.max.x + 360.0 - self.min.x
        } else {
            self.max.x - self.min.x
        }
    }

    /// Midpoint of the box, wrapped into \[-180, 180).
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            crate::wrap_longitude(self.min.x + 0.5 * self.lon_extent()),
            0.5 * (self.min.y + self.max.y),
        )
    }

    /// Whether `(lon, lat)` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        if lat < self.min.y || lat > self.max.y {
            return false;
        }
        if self.crosses_antimeridian() {
            lon >= self.min.x || lon <= self.max.x
        } else {
            lon >= self.min.x && lon <= self.max.x
        }
    }
}
