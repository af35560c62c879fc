//! Geodetic bucket grid: quantizes lon/lat points into cells, packs cells
//! into stable integer keys and directory paths, and walks between cells.
//!
//! Latitude is cut into 1/8 degree rows everywhere. Longitude resolution
//! coarsens toward the poles (see [`bucket_span`]), so every operation that
//! crosses rows re-resolves column width at the row it lands in.

mod bounds;
mod bucket;
mod cover;
mod diff;
mod error;
mod geometry;
mod key;
mod neighbor;
mod path;
mod span;

pub use bounds::GeoBox;
pub use bucket::{Bucket, wrap_longitude};
pub use cover::buckets_in_box;
pub use diff::bucket_diff;
pub use error::BucketError;
pub use geometry::{Corner, EQUATORIAL_RADIUS_M, MIN_WIDTH_M};
pub use key::BucketKey;
pub use neighbor::offset_index;
pub use span::{
    BUCKET_SPAN, HALF_BUCKET_SPAN, POLAR_SPAN, SPAN_TABLE, SUBROWS_PER_ROW, bucket_span,
    columns_around, columns_per_origin, row_span,
};
