//! Enumerating the buckets that intersect a box.

use crate::bucket::wrap_longitude;
use crate::span::{BUCKET_SPAN, columns_around, row_span};
use crate::{Bucket, GeoBox};

/// Every bucket that intersects `area`, edges included.
///
/// Buckets are listed sub-row by sub-row from the south, west to east within
/// each sub-row, and never repeat. Latitudes are clamped to the poles; a box
/// with `min.x > max.x` wraps eastward across the antimeridian, and a box at
/// least 360 degrees wide covers whole rows.
#[must_use]
pub fn buckets_in_box(area: &GeoBox) -> Vec<Bucket> {
    let (south, north) = (area.min.y.clamp(-90.0, 90.0), area.max.y.clamp(-90.0, 90.0));
    if !(south <= north) || !area.min.x.is_finite() || !area.max.x.is_finite() {
        return Vec::new();
    }
    if area.crosses_antimeridian() {
        log::debug!("coverage box {area:?} wraps the antimeridian");
    }

    let eighths_per_degree = 1.0 / BUCKET_SPAN;
    let last_band = (90.0 * eighths_per_degree) as i32 - 1;
    let first = ((south * eighths_per_degree).floor() as i32).min(last_band);
    let last = ((north * eighths_per_degree).floor() as i32).min(last_band);

    let west = wrap_longitude(area.min.x);
    let extent = area.lon_extent();

    let mut out = Vec::new();
    for band in first..=last {
        let lat = f64::from(band) * BUCKET_SPAN;
        let row = lat.floor() as i32;
        let span = row_span(row);
        let around = columns_around(row) as i64;

        // 180 is a whole number of columns in every row
        let offset = (180.0 / span) as i64;
        let first_col = (west / span).floor() as i64 + offset;
        let last_col = ((west + extent) / span).floor() as i64 + offset;
        let count = (last_col - first_col + 1).min(around);

        for i in 0..count {
            let col = (first_col + i).rem_euclid(around);
            let lon = -180.0 + col as f64 * span;
            out.push(Bucket::from_point(lon, lat));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_single_point_box() {
        let area = GeoBox::new(5.1, 55.05, 5.1, 55.05);
        assert_eq!(buckets_in_box(&area), vec![Bucket::from_point(5.1, 55.05)]);
    }

    #[test]
    fn test_box_edge_just_west_of_a_cell_edge() {
        let area = GeoBox::new(-1e-15, 0.0, -1e-15, 0.0);
        let found = buckets_in_box(&area);
        assert_eq!(found, vec![Bucket::from_point(-1e-15, 0.0)]);
        assert_eq!(found[0].origin_lon(), -1);
        assert_eq!(found[0].col(), 7);
    }

    #[test]
    fn test_one_degree_box_at_mid_latitude() {
        // quarter-degree columns, eighth-degree rows; max edges are inclusive
        let area = GeoBox::new(5.0, 55.0, 5.9, 55.9);
        let found = buckets_in_box(&area);
        assert_eq!(found.len(), 4 * 8);
        assert_eq!(found[0], Bucket::from_point(5.0, 55.0));
        assert_eq!(found[3], Bucket::from_point(5.8, 55.0));
        assert_eq!(found[4], Bucket::from_point(5.0, 55.125));
    }

    #[test]
    fn test_box_across_resolution_boundary() {
        let area = GeoBox::new(0.0, 21.9, 0.3, 22.1);
        let found = buckets_in_box(&area);
        // 21.875 band: 3 eighth-degree columns; 22.0 band: 2 quarter-degree columns
        assert_eq!(found.len(), 5);
        assert!(found[..3].iter().all(|b| b.row() == 21));
        assert!(found[3..].iter().all(|b| b.row() == 22));
    }

    #[test]
    fn test_box_across_antimeridian() {
        let area = GeoBox::new(179.8, 0.0, -179.8, 0.1);
        let found = buckets_in_box(&area);
        assert_eq!(found.len(), 4);
        assert_eq!(found[0], Bucket::from_point(179.8, 0.0));
        assert_eq!(found[1], Bucket::from_point(179.9, 0.0));
        assert_eq!(found[2], Bucket::from_point(-180.0, 0.0));
        assert_eq!(found[3], Bucket::from_point(-179.8, 0.0));
    }

    #[test]
    fn test_polar_cap() {
        let area = GeoBox::new(-180.0, 89.0, 180.0, 90.0);
        let found = buckets_in_box(&area);
        assert_eq!(found.len(), 8 * 30);
        let unique: FxHashSet<_> = found.iter().copied().collect();
        assert_eq!(unique.len(), found.len());
    }

    #[test]
    fn test_every_bucket_intersects() {
        let area = GeoBox::new(-3.3, -22.4, -1.1, -21.6);
        for b in buckets_in_box(&area) {
            let cell = b.bounds().unwrap();
            assert!(cell.min.x <= area.max.x && cell.max.x >= area.min.x, "{b}");
            assert!(cell.min.y <= area.max.y && cell.max.y >= area.min.y, "{b}");
        }
    }

    #[test]
    fn test_empty_when_inverted_latitude() {
        assert!(buckets_in_box(&GeoBox::new(0.0, 10.0, 1.0, 9.0)).is_empty());
    }
}
