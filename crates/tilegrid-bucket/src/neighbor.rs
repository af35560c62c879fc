//! Moving across the grid by whole bucket steps.
//!
//! Column width depends on latitude, so a move first resolves the destination
//! sub-row and only then scales the longitudinal step by the span of the row
//! it lands in.

use rustc_hash::FxHashSet;

use crate::span::{BUCKET_SPAN, SUBROWS_PER_ROW, columns_around, row_span};
use crate::{Bucket, BucketError, BucketKey};

impl Bucket {
    /// The bucket `d_col` columns east and `d_row` sub-rows north of this one.
    ///
    /// Negative steps move west/south. The column step uses the span of the
    /// destination row. Longitude wraps across the antimeridian; a move that
    /// would leave the grid past either pole returns [`Bucket::INVALID`], as
    /// does any move from the invalid bucket.
    #[must_use]
    pub fn sibling(&self, d_col: i32, d_row: i32) -> Bucket {
        let Some(anchor) = self.anchor() else {
            return Bucket::INVALID;
        };

        let lat = anchor.y + f64::from(d_row) * BUCKET_SPAN;
        if !(-90.0..90.0).contains(&lat) {
            log::trace!(
                "sibling ({d_col}, {d_row}) of {} falls off the pole at {lat}",
                self
            );
            return Bucket::INVALID;
        }

        let span = row_span(lat.floor() as i32);
        let lon = anchor.x + f64::from(d_col) * span;
        Bucket::from_point(lon, lat)
    }

    /// Every distinct valid bucket within `radius_cols` columns and
    /// `radius_rows` sub-rows of this one, this bucket included.
    ///
    /// Buckets are listed row by row from the south-west. Near the poles
    /// several steps can land in the same wide bucket; each appears once.
    /// Radii larger than the grid are clamped, since they only revisit
    /// buckets already listed.
    #[must_use]
    pub fn surrounding(&self, radius_cols: u32, radius_rows: u32) -> Vec<Bucket> {
        if !self.is_valid() {
            return Vec::new();
        }
        // the equator rows hold the most columns
        let rc = i64::from(radius_cols.min(columns_around(0) / 2));

        let last_band = 180 * i64::from(SUBROWS_PER_ROW) - 1;
        let band = (i64::from(self.row()) + 90) * i64::from(SUBROWS_PER_ROW)
            + i64::from(self.subrow());
        let rr = i64::from(radius_rows);
        let (south, north) = (-rr.min(band), rr.min(last_band - band));

        let width = (2 * rc + 1) as usize;
        let height = (north - south + 1) as usize;
        let mut seen = FxHashSet::default();
        let mut out = Vec::with_capacity(width.saturating_mul(height));
        for d_row in south..=north {
            for d_col in -rc..=rc {
                let b = self.sibling(d_col as i32, d_row as i32);
                if b.is_valid() && seen.insert(b) {
                    out.push(b);
                }
            }
        }
        out
    }
}

/// Key of the bucket reached by moving `(d_col, d_row)` from the bucket
/// containing `(lon, lat)`.
///
/// Equivalent to `Bucket::from_point(lon, lat).sibling(d_col, d_row).key()`;
/// useful for cross-checking bucket-based and point-based walks.
///
/// # Errors
///
/// Returns [`BucketError::InvalidBucket`] when the move leaves the grid.
pub fn offset_index(lon: f64, lat: f64, d_col: i32, d_row: i32) -> Result<BucketKey, BucketError> {
    Bucket::from_point(lon, lat).sibling(d_col, d_row).key()
}
