//! Latitude-dependent column width of the bucket grid.
//!
//! Latitude is always cut into rows of 1/8 degree. Longitude is cut more
//! coarsely toward the poles so that cells keep a roughly constant area.

/// Height of every bucket in degrees of latitude.
pub const BUCKET_SPAN: f64 = 0.125;

/// Half of [`BUCKET_SPAN`].
pub const HALF_BUCKET_SPAN: f64 = 0.5 * BUCKET_SPAN;

/// Number of sub-rows in one whole-degree latitude row.
pub const SUBROWS_PER_ROW: u8 = 8;

/// Column width used north of 89° and south of -89°.
pub const POLAR_SPAN: f64 = 12.0;

/// Resolution breakpoints as `(|lat| upper bound, span)`, sorted by bound.
///
/// A latitude uses the first entry whose bound it is strictly below; anything
/// past the last bound uses [`POLAR_SPAN`]. Every span either divides one
/// degree evenly or is a whole number of degrees dividing 180.
pub const SPAN_TABLE: [(f64, f64); 6] = [
    (22.0, 0.125),
    (62.0, 0.25),
    (76.0, 0.5),
    (83.0, 1.0),
    (86.0, 2.0),
    (89.0, 4.0),
];

/// Longitude width in degrees of a bucket at latitude `lat`.
///
/// Symmetric about the equator and non-decreasing in `|lat|`.
#[must_use]
pub fn bucket_span(lat: f64) -> f64 {
    let abs_lat = lat.abs().min(90.0);
    SPAN_TABLE
        .iter()
        .find(|&&(bound, _)| abs_lat < bound)
        .map_or(POLAR_SPAN, |&(_, span)| span)
}

/// Longitude width of every bucket in the whole-degree row starting at `row`.
///
/// The table is sampled at the row's mid-latitude, so row `r` and its mirror
/// row `-r - 1` always agree.
#[must_use]
pub fn row_span(row: i32) -> f64 {
    bucket_span(f64::from(row) + 0.5)
}

/// Number of bucket columns inside one row-origin cell of `row`.
///
/// This is `1 / span` for sub-degree spans and 1 otherwise.
#[must_use]
pub fn columns_per_origin(row: i32) -> u8 {
    let span = row_span(row);
    if span <= 1.0 {
        (1.0 / span).round() as u8
    } else {
        1
    }
}

/// Number of buckets around the globe in `row`.
#[must_use]
pub fn columns_around(row: i32) -> u32 {
    (360.0 / row_span(row)).round() as u32
}
