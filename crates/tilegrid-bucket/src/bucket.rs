//! The bucket value type and point-to-bucket normalization.

use std::fmt;

use glam::DVec2;

use crate::span::{BUCKET_SPAN, SUBROWS_PER_ROW, columns_per_origin, row_span};

/// One cell of the geodetic bucket grid.
///
/// - `origin_lon`: western edge of the row-origin cell, whole degrees in
///   \[-180, 179\]. For rows wider than one degree it is a multiple of the
///   span counted from -180.
/// - `row`: southern edge of the whole-degree latitude row, in \[-90, 89\].
/// - `col`: column inside the row-origin cell (always 0 for wide rows).
/// - `subrow`: 1/8 degree sub-row inside the latitude row, in \[0, 7\].
///
/// The invalid bucket carries all-zero fields, so derived equality and
/// hashing treat every invalid bucket as the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bucket {
    origin_lon: i16,
    row: i8,
    col: u8,
    subrow: u8,
    valid: bool,
}

static_assertions::assert_impl_all!(Bucket: Copy, Send, Sync);

/// Wrap a longitude into \[-180, 180).
///
/// In-range values are returned bit for bit.
#[must_use]
pub fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        return lon;
    }
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round a tiny negative input up to exactly 360
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

impl Bucket {
    /// The invalid ("null") bucket.
    pub const INVALID: Bucket = Bucket {
        origin_lon: 0,
        row: 0,
        col: 0,
        subrow: 0,
        valid: false,
    };

    /// Quantize a point given in degrees into the bucket that contains it.
    ///
    /// Longitude wraps into \[-180, 180) and latitude clamps to \[-90, 90\];
    /// every finite input yields a valid bucket. Non-finite input yields
    /// [`Bucket::INVALID`].
    #[must_use]
    pub fn from_point(lon: f64, lat: f64) -> Self {
        if !lon.is_finite() || !lat.is_finite() {
            return Self::INVALID;
        }
        let lat = lat.clamp(-90.0, 90.0);
        let lon = wrap_longitude(lon);

        // lat == 90 exactly is folded into the last row
        let row = (lat.floor() as i32).min(89);
        let subrow = (((lat - f64::from(row)) * f64::from(SUBROWS_PER_ROW)).floor() as i32)
            .clamp(0, i32::from(SUBROWS_PER_ROW) - 1);

        let span = row_span(row);
        let (origin_lon, col) = if span <= 1.0 {
            let origin = lon.floor();
            let max_col = i32::from(columns_per_origin(row)) - 1;
            let col = (((lon - origin) / span).floor() as i32).clamp(0, max_col);
            (origin as i32, col)
        } else {
            // wide spans all divide 180, so counting from 0 keeps -180 aligned
            let origin = (lon / span).floor() * span;
            (origin as i32, 0)
        };

        Self::from_parts(origin_lon, row, col as u8, subrow as u8)
    }

    /// Build a valid bucket from fields already known to be in range.
    pub(crate) fn from_parts(origin_lon: i32, row: i32, col: u8, subrow: u8) -> Self {
        debug_assert!((-180..180).contains(&origin_lon), "origin {origin_lon}");
        debug_assert!((-90..90).contains(&row), "row {row}");
        debug_assert!(col < columns_per_origin(row), "col {col} in row {row}");
        debug_assert!(subrow < SUBROWS_PER_ROW, "subrow {subrow}");
        Self {
            origin_lon: origin_lon as i16,
            row: row as i8,
            col,
            subrow,
            valid: true,
        }
    }

    /// Whether this bucket names a grid cell.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Turn this bucket into [`Bucket::INVALID`].
    pub fn invalidate(&mut self) {
        *self = Self::INVALID;
    }

    /// Western edge of the row-origin cell in whole degrees.
    #[must_use]
    pub fn origin_lon(&self) -> i32 {
        i32::from(self.origin_lon)
    }

    /// Southern edge of the latitude row in whole degrees.
    #[must_use]
    pub fn row(&self) -> i32 {
        i32::from(self.row)
    }

    /// Column inside the row-origin cell.
    #[must_use]
    pub fn col(&self) -> u8 {
        self.col
    }

    /// 1/8 degree sub-row inside the latitude row.
    #[must_use]
    pub fn subrow(&self) -> u8 {
        self.subrow
    }

    /// Column width in degrees for this bucket's row.
    #[must_use]
    pub(crate) fn span(&self) -> f64 {
        row_span(self.row())
    }

    /// The south-west corner of the bucket as `(lon, lat)` in degrees.
    ///
    /// Feeding the anchor back to [`Bucket::from_point`] returns this bucket.
    /// Returns `None` for the invalid bucket.
    #[must_use]
    pub fn anchor(&self) -> Option<DVec2> {
        if !self.valid {
            return None;
        }
        Some(DVec2::new(
            f64::from(self.origin_lon) + f64::from(self.col) * self.span(),
            f64::from(self.row) + f64::from(self.subrow) * BUCKET_SPAN,
        ))
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "invalid");
        }
        write!(
            f,
            "{}:{}, {}:{}",
            self.origin_lon, self.col, self.row, self.subrow
        )
    }
}
