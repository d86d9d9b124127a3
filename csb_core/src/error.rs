use thiserror::Error;

/// Failure kinds for block decoding.
///
/// Every failure aborts the current call; whatever was already written to
/// the destination window is garbage the caller must discard. Retrying
/// (e.g. re-fetching the block from another replica) is the caller's
/// decision; nothing here retries internally.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The header's method byte names no codec this family knows.
    #[error("unsupported compression method: {method:#04x}")]
    UnsupportedMethod { method: u8 },

    /// The decompression primitive produced a byte count different from
    /// the header's `original_len`. `actual` is 0 when the primitive
    /// rejected the payload outright (its own error is logged at debug
    /// level); either way the payload is corrupt, truncated, or from an
    /// incompatible codec version.
    #[error("{codec} size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        codec: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The digest recomputed over the decompressed bytes disagrees with
    /// the header's stored value: corruption in transit or at rest,
    /// even if decompression itself went through.
    #[error("checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// The source buffer ends before the header (or the payload the
    /// header declares) does.
    #[error("block truncated: need {required} bytes, have {available}")]
    TruncatedBlock { required: usize, available: usize },

    /// The destination buffer has no room for `original_len` bytes at
    /// the requested offset.
    #[error("destination too small: need {required} bytes, have {capacity}")]
    DestinationTooSmall { required: usize, capacity: usize },
}

/// A convenience `Result` alias using [`DecodeError`].
pub type Result<T> = std::result::Result<T, DecodeError>;
