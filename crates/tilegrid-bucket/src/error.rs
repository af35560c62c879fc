//! Bucket error types.

/// Errors raised by operations that need a well-formed bucket or key.
///
/// Moving past a pole is not an error: [`Bucket::sibling`](crate::Bucket::sibling)
/// returns the invalid bucket instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BucketError {
    /// The operation was applied to the invalid bucket.
    #[error("cannot {operation} an invalid bucket")]
    InvalidBucket {
        /// What the caller attempted, e.g. `"encode"`.
        operation: &'static str,
    },

    /// An integer key whose fields do not name a cell of the grid.
    #[error("bucket key {0} lies outside the grid")]
    KeyOutOfRange(u32),

    /// A key string that is not a decimal integer.
    #[error("not a bucket key: {0:?}")]
    ParseKey(String),

    /// A corner index outside `0..=3`.
    #[error("corner index {0} out of range (expected 0..=3)")]
    CornerIndex(u8),
}
