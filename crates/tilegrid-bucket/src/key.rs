//! Packed integer keys.
//!
//! Layout, low bit first:
//!
//! ```text
//! [2:0]   col                (3 bits)
//! [5:3]   subrow             (3 bits)
//! [13:6]  row + 90           (8 bits)
//! [22:14] origin_lon + 180   (9 bits)
//! ```
//!
//! The layout is a persisted identity shared with existing tile stores and
//! must stay bit-exact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::span::{SUBROWS_PER_ROW, columns_per_origin, row_span};
use crate::{Bucket, BucketError};

const COL_BITS: u32 = 3;
const SUBROW_BITS: u32 = 3;
const ROW_BITS: u32 = 8;
const ROW_SHIFT: u32 = COL_BITS + SUBROW_BITS;
const ORIGIN_SHIFT: u32 = ROW_SHIFT + ROW_BITS;

/// Packed integer identity of a valid [`Bucket`].
///
/// Displays as plain decimal, which is also the stem of a bucket's tile
/// file names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketKey(pub u32);

static_assertions::assert_eq_size!(BucketKey, u32);

impl Bucket {
    /// Pack this bucket into its integer key.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn key(&self) -> Result<BucketKey, BucketError> {
        if !self.is_valid() {
            return Err(BucketError::InvalidBucket { operation: "encode" });
        }
        let origin = (self.origin_lon() + 180) as u32;
        let row = (self.row() + 90) as u32;
        Ok(BucketKey(
            (origin << ORIGIN_SHIFT)
                + (row << ROW_SHIFT)
                + (u32::from(self.subrow()) << COL_BITS)
                + u32::from(self.col()),
        ))
    }

    /// The key as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn index_string(&self) -> Result<String, BucketError> {
        Ok(self.key()?.to_string())
    }

    /// Decode a bucket from its integer key.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::KeyOutOfRange`] if any field lies outside the
    /// grid or the column does not exist at that latitude.
    pub fn from_key(key: u32) -> Result<Self, BucketError> {
        BucketKey(key).to_bucket()
    }
}

impl BucketKey {
    /// Unpack the bucket this key names.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::KeyOutOfRange`] if the key was not produced by
    /// [`Bucket::key`].
    pub fn to_bucket(self) -> Result<Bucket, BucketError> {
        let raw = self.0;
        let out_of_range = || BucketError::KeyOutOfRange(raw);

        let origin = (raw >> ORIGIN_SHIFT) as i32 - 180;
        let row = ((raw >> ROW_SHIFT) & ((1 << ROW_BITS) - 1)) as i32 - 90;
        let subrow = ((raw >> COL_BITS) & ((1 << SUBROW_BITS) - 1)) as u8;
        let col = (raw & ((1 << COL_BITS) - 1)) as u8;

        if !(-180..180).contains(&origin) || !(-90..90).contains(&row) {
            return Err(out_of_range());
        }
        if col >= columns_per_origin(row) || subrow >= SUBROWS_PER_ROW {
            return Err(out_of_range());
        }
        let span = row_span(row);
        if span > 1.0 && (f64::from(origin + 180) % span) != 0.0 {
            return Err(out_of_range());
        }
        Ok(Bucket::from_parts(origin, row, col, subrow))
    }
}

impl TryFrom<BucketKey> for Bucket {
    type Error = BucketError;

    fn try_from(key: BucketKey) -> Result<Self, Self::Error> {
        key.to_bucket()
    }
}

impl TryFrom<Bucket> for BucketKey {
    type Error = BucketError;

    fn try_from(bucket: Bucket) -> Result<Self, Self::Error> {
        bucket.key()
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BucketKey {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(BucketKey)
            .map_err(|_| BucketError::ParseKey(s.to_string()))
    }
}
