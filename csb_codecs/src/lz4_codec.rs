use csb_core::checksum::{BlockChecksum, XxHash32, LZ4_XXHASH_SEED};
use csb_core::decompressor::{checked_window, BlockDecompressor};
use csb_core::error::{DecodeError, Result};
use csb_core::format::{self, BlockHeader, LZ4_MAGIC, METHOD_LZ4, METHOD_RAW};
use log::{debug, trace};

const MAGIC_LEN: usize = LZ4_MAGIC.len();

/// LZ4-family block decompressor.
///
/// Accepts RAW and LZ4 method bytes; every block, RAW included, is
/// verified against a seeded XXH32 digest of its decompressed bytes.
/// LZ4 payloads are raw block streams (no frame, no size prefix; the
/// block header already carries both lengths), so decoding goes straight
/// into the destination window.
pub struct Lz4Decompressor {
    hash: XxHash32,
}

impl Lz4Decompressor {
    pub fn new() -> Self {
        Self {
            hash: XxHash32::with_seed(LZ4_XXHASH_SEED),
        }
    }
}

impl Default for Lz4Decompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDecompressor for Lz4Decompressor {
    fn original_len(&self, src: &[u8]) -> Result<usize> {
        BlockHeader::original_len(src, MAGIC_LEN).map(|n| n as usize)
    }

    fn decompress(&mut self, src: &[u8], dst: &mut [u8], dst_off: usize) -> Result<usize> {
        let header = BlockHeader::parse(src, MAGIC_LEN)?;
        let compressed_len = header.compressed_len as usize;
        let original_len = header.original_len as usize;

        let window = checked_window(dst, dst_off, original_len)?;

        match header.method {
            METHOD_RAW => {
                trace!("raw block, copying {} bytes", original_len);
                let payload = format::payload(src, format::header_len(MAGIC_LEN), original_len)?;
                window.copy_from_slice(payload);
            }
            METHOD_LZ4 => {
                trace!(
                    "lz4 block: {} compressed -> {} original bytes",
                    compressed_len,
                    original_len
                );
                let payload = format::payload(src, format::header_len(MAGIC_LEN), compressed_len)?;
                let produced = match lz4_flex::block::decompress_into(payload, window) {
                    Ok(n) => n,
                    Err(e) => {
                        debug!("lz4 rejected payload: {e}");
                        0
                    }
                };
                if produced != original_len {
                    return Err(DecodeError::SizeMismatch {
                        codec: "lz4",
                        expected: original_len,
                        actual: produced,
                    });
                }
            }
            method => return Err(DecodeError::UnsupportedMethod { method }),
        }

        let written = &dst[dst_off..dst_off + original_len];
        self.hash.reset();
        self.hash.update(written);
        let actual = self.hash.finish();
        if actual != header.checksum {
            return Err(DecodeError::ChecksumMismatch {
                expected: header.checksum,
                actual,
            });
        }

        Ok(original_len)
    }
}
