//! Plain-text reports printed by the tool.

use std::fmt::Write;

use tilegrid_bucket::{Bucket, BucketError};
use tilegrid_config::Config;

/// Multi-line description of one bucket.
pub fn describe(bucket: &Bucket, config: &Config) -> Result<String, BucketError> {
    let key = bucket.key()?;
    let file = bucket.tile_path(&config.scenery.root, &config.scenery.tile_extension)?;
    let center = bucket.center()?;
    let radius = config.planet.equatorial_radius_m;

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "bucket   {bucket}");
    let _ = writeln!(out, "key      {key}");
    let _ = writeln!(out, "path     {}", bucket.base_path()?);
    let _ = writeln!(out, "file     {}", file.display());
    let _ = writeln!(out, "center   {:.4}, {:.4}", center.x, center.y);
    let _ = write!(out, "corners ");
    for corner in bucket.corners()? {
        let _ = write!(out, " ({}, {})", corner.x, corner.y);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "size     {:.0} m x {:.0} m",
        bucket.width_m_on(radius)?,
        bucket.height_m_on(radius)?
    );
    Ok(out)
}

/// One line per bucket: key, base path, and the bucket fields.
pub fn list(buckets: &[Bucket]) -> Result<String, BucketError> {
    let mut out = String::new();
    for bucket in buckets {
        let _ = writeln!(out, "{}  {}  {bucket}", bucket.key()?, bucket.base_path()?);
    }
    Ok(out)
}
