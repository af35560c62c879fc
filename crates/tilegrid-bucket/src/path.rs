//! Directory-style paths for buckets.

use std::path::{Path, PathBuf};

use crate::{Bucket, BucketError};

/// Format one path segment: longitude hemisphere + 3 digits, then latitude
/// hemisphere + 2 digits.
fn segment(lon: i32, lat: i32) -> String {
    let hem = if lon >= 0 { 'e' } else { 'w' };
    let pole = if lat >= 0 { 'n' } else { 's' };
    format!("{hem}{:03}{pole}{:02}", lon.unsigned_abs(), lat.unsigned_abs())
}

impl Bucket {
    /// Outer path segment: the 10x10 degree block, e.g. `"w020s50"`.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn block_dir(&self) -> Result<String, BucketError> {
        if !self.is_valid() {
            return Err(BucketError::InvalidBucket { operation: "format" });
        }
        Ok(segment(
            self.origin_lon().div_euclid(10) * 10,
            self.row().div_euclid(10) * 10,
        ))
    }

    /// Inner path segment: the row-origin cell, e.g. `"w011s44"`.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn cell_dir(&self) -> Result<String, BucketError> {
        if !self.is_valid() {
            return Err(BucketError::InvalidBucket { operation: "format" });
        }
        Ok(segment(self.origin_lon(), self.row()))
    }

    /// Two-level relative path `"{block}/{cell}"`, e.g. `"e000n50/e005n55"`.
    ///
    /// The separator is always `/` regardless of platform.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn base_path(&self) -> Result<String, BucketError> {
        Ok(format!("{}/{}", self.block_dir()?, self.cell_dir()?))
    }

    /// Path of this bucket's tile file under `root`:
    /// `root/{block}/{cell}/{key}.{extension}`.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidBucket`] for the invalid bucket.
    pub fn tile_path(&self, root: &Path, extension: &str) -> Result<PathBuf, BucketError> {
        let key = self.key()?;
        Ok(root
            .join(self.block_dir()?)
            .join(self.cell_dir()?)
            .join(format!("{key}.{extension}")))
    }
}
