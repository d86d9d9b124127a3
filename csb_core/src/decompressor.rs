use crate::error::{DecodeError, Result};

/// Decode-and-verify for one codec family of shuffle blocks.
///
/// An implementation is a per-family worker: it owns a reusable checksum
/// engine (and possibly other scratch state), which is why `decompress`
/// takes `&mut self`: one call at a time per instance. Concurrent
/// callers use separate instances or wrap one in a mutex. The source
/// buffer is only read and may be shared freely.
pub trait BlockDecompressor: Send {
    /// The decompressed payload length declared by the block header.
    /// Callers use this to size the destination before decompressing.
    fn original_len(&self, src: &[u8]) -> Result<usize>;

    /// Decompress the block in `src` into `dst` starting at `dst_off`,
    /// verify the payload digest, and return the number of bytes
    /// written. Exactly `[dst_off, dst_off + original_len)` is touched.
    ///
    /// On any error the destination window contents are unspecified and
    /// must be discarded.
    fn decompress(&mut self, src: &[u8], dst: &mut [u8], dst_off: usize) -> Result<usize>;
}

/// Bound the destination window `[dst_off, dst_off + len)`, refusing the
/// call if the buffer has no room for it.
pub fn checked_window(dst: &mut [u8], dst_off: usize, len: usize) -> Result<&mut [u8]> {
    let required = dst_off.checked_add(len).unwrap_or(usize::MAX);
    if required > dst.len() {
        return Err(DecodeError::DestinationTooSmall {
            required,
            capacity: dst.len(),
        });
    }
    Ok(&mut dst[dst_off..required])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_covers_requested_range() {
        let mut dst = [0u8; 16];
        let window = checked_window(&mut dst, 4, 8).unwrap();
        assert_eq!(window.len(), 8);
        window.fill(0xff);
        assert_eq!(&dst[..4], &[0; 4]);
        assert_eq!(&dst[4..12], &[0xff; 8]);
        assert_eq!(&dst[12..], &[0; 4]);
    }

    #[test]
    fn window_past_capacity_is_refused() {
        let mut dst = [0u8; 16];
        let err = checked_window(&mut dst, 10, 8).unwrap_err();
        match err {
            DecodeError::DestinationTooSmall { required, capacity } => {
                assert_eq!(required, 18);
                assert_eq!(capacity, 16);
            }
            other => panic!("expected DestinationTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn zero_length_window_at_end_is_fine() {
        let mut dst = [0u8; 4];
        assert_eq!(checked_window(&mut dst, 4, 0).unwrap().len(), 0);
    }
}
