//! Step distance between two buckets.

use crate::bucket::wrap_longitude;
use crate::span::BUCKET_SPAN;
use crate::{Bucket, BucketError};

/// Column and row steps from `from` to `to`.
///
/// Rows count 1/8 degree sub-rows. Columns are measured between the two
/// anchors on the narrower of the two spans, taking the short way around the
/// antimeridian. For buckets in rows of equal span,
/// `from.sibling(dx, dy) == to`.
///
/// # Errors
///
/// Returns [`BucketError::InvalidBucket`] if either bucket is invalid.
pub fn bucket_diff(from: &Bucket, to: &Bucket) -> Result<(i32, i32), BucketError> {
    let invalid = || BucketError::InvalidBucket { operation: "diff" };
    let a = from.anchor().ok_or_else(invalid)?;
    let b = to.anchor().ok_or_else(invalid)?;

    let dy = ((b.y - a.y) / BUCKET_SPAN).round() as i32;
    let span = from.span().min(to.span());
    let dx = (wrap_longitude(b.x - a.x) / span).round() as i32;
    Ok((dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_to_self_is_zero() {
        let b = Bucket::from_point(12.0, 34.0);
        assert_eq!(bucket_diff(&b, &b).unwrap(), (0, 0));
    }

    #[test]
    fn test_diff_inverts_sibling_in_uniform_rows() {
        let b = Bucket::from_point(5.1, 55.05);
        for (dx, dy) in [(3, 2), (-7, 5), (0, -9), (11, 0)] {
            let s = b.sibling(dx, dy);
            assert_eq!(bucket_diff(&b, &s).unwrap(), (dx, dy));
            assert_eq!(bucket_diff(&s, &b).unwrap(), (-dx, -dy));
        }
    }

    #[test]
    fn test_diff_short_way_round() {
        let west = Bucket::from_point(179.9, 0.0);
        let east = Bucket::from_point(-179.9, 0.0);
        // 179.875 and -180 are adjacent columns across the antimeridian
        assert_eq!(bucket_diff(&west, &east).unwrap(), (1, 0));
        assert_eq!(bucket_diff(&east, &west).unwrap(), (-1, 0));
        assert_eq!(west.sibling(1, 0), east);
    }

    #[test]
    fn test_diff_uses_narrower_span() {
        let narrow = Bucket::from_point(0.0, 21.9);
        let wide = Bucket::from_point(0.5, 22.0);
        assert_eq!(bucket_diff(&narrow, &wide).unwrap(), (4, 1));
    }

    #[test]
    fn test_diff_requires_valid_buckets() {
        let b = Bucket::from_point(0.0, 0.0);
        assert!(bucket_diff(&b, &Bucket::INVALID).is_err());
        assert!(bucket_diff(&Bucket::INVALID, &b).is_err());
    }
}
