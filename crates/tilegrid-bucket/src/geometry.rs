//! Corner coordinates and physical extent of buckets.

use std::f64::consts::PI;

use glam::DVec2;

use crate::span::{BUCKET_SPAN, HALF_BUCKET_SPAN};
use crate::{Bucket, BucketError, GeoBox};

/// WGS84 equatorial radius in meters.
pub const EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Smallest east-west extent [`Bucket::width_m`] reports.
pub const MIN_WIDTH_M: f64 = 10.0;

/// The four corners of a bucket, counter-clockwise from the south-west.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Corner {
    /// (west, south)
    SouthWest = 0,
    /// (east, south)
    SouthEast = 1,
    /// (east, north)
    NorthEast = 2,
    /// (west, north)
    NorthWest = 3,
}

impl Corner {
    /// All four corners in counter-clockwise order.
    pub const ALL: [Corner; 4] = [
        Corner::SouthWest,
        Corner::SouthEast,
        Corner::NorthEast,
        Corner::NorthWest,
    ];
}

impl TryFrom<u8> for Corner {
    type Error = BucketError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Corner::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(BucketError::CornerIndex(index))
    }
}

impl Bucket {
    fn require_valid(&self, operation: &'static str) -> Result<(), BucketError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(BucketError::InvalidBucket { operation })
        }
    }

    fn corner_of(&self, corner: Corner) -> DVec2 {
        let west = f64::from(self.origin_lon());
        let east = west + self.span();
        let south = f64::from(self.row());
        let north = (south + 1.0).min(90.0);
        match corner {
            Corner::SouthWest => DVec2::new(west, south),
            Corner::SouthEast => DVec2::new(east, south),
            Corner::NorthEast => DVec2::new(east, north),
            Corner::NorthWest => DVec2::new(west, north),
        }
    }

    /// Corner of the row as `(lon, lat)` in degrees.
    ///
    /// The corners frame one column width east of the row origin and the
    /// whole degree of latitude. Northern latitudes are clamped to 90, so at
    /// the pole row the two northern corners share a latitude but keep their
    /// own longitudes.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn corner(&self, corner: Corner) -> Result<DVec2, BucketError> {
        self.require_valid("locate corners of")?;
        Ok(self.corner_of(corner))
    }

    /// All four corners, counter-clockwise from the south-west.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn corners(&self) -> Result<[DVec2; 4], BucketError> {
        self.require_valid("locate corners of")?;
        Ok(Corner::ALL.map(|c| self.corner_of(c)))
    }

    /// The higher latitude edge of the row, capped at 90.
    ///
    /// The lower edge is [`Bucket::row`].
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn top_latitude(&self) -> Result<f64, BucketError> {
        self.require_valid("measure")?;
        Ok((f64::from(self.row()) + 1.0).min(90.0))
    }

    /// Center of the bucket cell as `(lon, lat)` in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn center(&self) -> Result<DVec2, BucketError> {
        let anchor = self
            .anchor()
            .ok_or(BucketError::InvalidBucket { operation: "measure" })?;
        Ok(anchor + DVec2::new(0.5 * self.span(), HALF_BUCKET_SPAN))
    }

    /// Longitude/latitude box covered by this bucket cell.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn bounds(&self) -> Result<GeoBox, BucketError> {
        let anchor = self
            .anchor()
            .ok_or(BucketError::InvalidBucket { operation: "measure" })?;
        Ok(GeoBox {
            min: anchor,
            max: anchor + DVec2::new(self.span(), BUCKET_SPAN),
        })
    }

    /// Width in degrees of longitude.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn width_deg(&self) -> Result<f64, BucketError> {
        self.require_valid("measure")?;
        Ok(self.span())
    }

    /// Height in degrees of latitude (always 1/8).
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn height_deg(&self) -> Result<f64, BucketError> {
        self.require_valid("measure")?;
        Ok(BUCKET_SPAN)
    }

    /// Approximate east-west extent in meters on the WGS84 equator radius.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn width_m(&self) -> Result<f64, BucketError> {
        self.width_m_on(EQUATORIAL_RADIUS_M)
    }

    /// Approximate east-west extent in meters for a planet of the given
    /// equatorial radius, never less than [`MIN_WIDTH_M`].
    ///
    /// Measured along the row's pole-ward edge, so both polar rows report
    /// exactly [`MIN_WIDTH_M`].
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn width_m_on(&self, equatorial_radius_m: f64) -> Result<f64, BucketError> {
        self.require_valid("measure")?;
        let row = f64::from(self.row());
        let edge_lat = if row >= 0.0 { row + 1.0 } else { row };
        let width = self.span() * (PI / 180.0) * equatorial_radius_m * edge_lat.to_radians().cos();
        Ok(width.max(MIN_WIDTH_M))
    }

    /// North-south extent in meters on the WGS84 equator radius.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn height_m(&self) -> Result<f64, BucketError> {
        self.height_m_on(EQUATORIAL_RADIUS_M)
    }

    /// North-south extent in meters for a planet of the given equatorial
    /// radius.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn height_m_on(&self, equatorial_radius_m: f64) -> Result<f64, BucketError> {
        self.require_valid("measure")?;
        Ok(BUCKET_SPAN * (PI / 180.0) * equatorial_radius_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_index_mapping() {
        assert_eq!(Corner::try_from(0).unwrap(), Corner::SouthWest);
        assert_eq!(Corner::try_from(3).unwrap(), Corner::NorthWest);
        assert_eq!(Corner::try_from(4), Err(BucketError::CornerIndex(4)));
    }

    #[test]
    fn test_corners_counter_clockwise() {
        let b = Bucket::from_point(5.1, 55.05);
        let [sw, se, ne, nw] = b.corners().unwrap();
        assert_eq!(sw, DVec2::new(5.0, 55.0));
        assert_eq!(se, DVec2::new(5.25, 55.0));
        assert_eq!(ne, DVec2::new(5.25, 56.0));
        assert_eq!(nw, DVec2::new(5.0, 56.0));
    }

    #[test]
    fn test_pole_corners_collapse_in_latitude_only() {
        let b = Bucket::from_point(3.0, 89.5);
        let ne = b.corner(Corner::NorthEast).unwrap();
        let nw = b.corner(Corner::NorthWest).unwrap();
        assert_eq!(ne.y, 90.0);
        assert_eq!(nw.y, 90.0);
        assert_eq!(nw.x, 0.0);
        assert_eq!(ne.x, 12.0);
        assert_eq!(b.top_latitude().unwrap(), 90.0);
    }

    #[test]
    fn test_top_latitude() {
        assert_eq!(Bucket::from_point(0.0, -0.5).top_latitude().unwrap(), 0.0);
        assert_eq!(Bucket::from_point(0.0, 45.2).top_latitude().unwrap(), 46.0);
    }

    #[test]
    fn test_center_and_bounds() {
        let b = Bucket::from_point(-59.8, 21.9);
        assert_eq!(b.center().unwrap(), DVec2::new(-59.8125, 21.9375));
        let bounds = b.bounds().unwrap();
        assert_eq!(bounds.min, DVec2::new(-59.875, 21.875));
        assert_eq!(bounds.max, DVec2::new(-59.75, 22.0));
        assert!(bounds.contains(-59.8, 21.9));
        assert_eq!(Bucket::from_point(bounds.center().x, bounds.center().y), b);
    }

    #[test]
    fn test_width_and_height_degrees() {
        let b = Bucket::from_point(0.0, 0.0);
        assert_eq!(b.width_deg().unwrap(), 0.125);
        assert_eq!(b.height_deg().unwrap(), 0.125);
        assert_eq!(Bucket::from_point(0.0, 89.5).width_deg().unwrap(), 12.0);
    }

    #[test]
    fn test_width_m_floor_at_poles() {
        for lon in [-179.0, -42.0, 0.0, 17.5, 179.9] {
            for lat in [89.0, 89.4, 89.99, 90.0, -89.01, -89.7, -90.0] {
                let b = Bucket::from_point(lon, lat);
                assert_eq!(b.width_m().unwrap(), MIN_WIDTH_M, "({lon}, {lat})");
            }
        }
    }

    #[test]
    fn test_width_m_away_from_poles() {
        let equator = Bucket::from_point(0.0, 0.0).width_m().unwrap();
        // 1/8 degree of arc on WGS84, measured along the row's edge at 1 N
        assert!((equator - 13_912.8).abs() < 1.0, "{equator}");

        let near_pole = Bucket::from_point(0.0, 88.5).width_m().unwrap();
        assert!(near_pole > MIN_WIDTH_M);
        assert!(near_pole < equator);
    }

    #[test]
    fn test_width_m_is_symmetric() {
        for row in 0..89 {
            let north = Bucket::from_point(0.0, f64::from(row) + 0.5);
            let south = Bucket::from_point(0.0, -f64::from(row) - 0.5);
            let (n, s) = (north.width_m().unwrap(), south.width_m().unwrap());
            assert!((n - s).abs() < 1e-6, "row {row}: {n} vs {s}");
        }
    }

    #[test]
    fn test_height_m() {
        let h = Bucket::from_point(0.0, 0.0).height_m().unwrap();
        assert!((h - 13_914.9).abs() < 1.0, "{h}");
        let moon = Bucket::from_point(0.0, 0.0).height_m_on(1_737_400.0).unwrap();
        assert!(moon < h);
    }

    #[test]
    fn test_invalid_bucket_has_no_geometry() {
        let b = Bucket::INVALID;
        assert!(b.corner(Corner::SouthWest).is_err());
        assert!(b.corners().is_err());
        assert!(b.top_latitude().is_err());
        assert!(b.center().is_err());
        assert!(b.bounds().is_err());
        assert!(b.width_deg().is_err());
        assert!(b.width_m().is_err());
        assert!(b.height_m().is_err());
    }
}
