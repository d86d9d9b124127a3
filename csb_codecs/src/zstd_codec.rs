use csb_core::checksum::{BlockChecksum, Crc32};
use csb_core::decompressor::{checked_window, BlockDecompressor};
use csb_core::error::{DecodeError, Result};
use csb_core::format::{self, BlockHeader, METHOD_RAW, METHOD_ZSTD, ZSTD_MAGIC};
use log::{debug, trace};

const MAGIC_LEN: usize = ZSTD_MAGIC.len();

/// Zstd-family block decompressor.
///
/// Accepts RAW and ZSTD method bytes; every block, RAW included, is
/// verified against a CRC-32 of its decompressed bytes. ZSTD payloads
/// are complete frames, decoded into the destination window. The window
/// is sized from the header's `original_len`, not from the frame's own
/// content-size field.
pub struct ZstdDecompressor {
    crc: Crc32,
}

impl ZstdDecompressor {
    pub fn new() -> Self {
        Self { crc: Crc32::new() }
    }
}

impl Default for ZstdDecompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDecompressor for ZstdDecompressor {
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
            METHOD_ZSTD => {
                trace!(
                    "zstd block: {} compressed -> {} original bytes",
                    compressed_len,
                    original_len
                );
                let payload = format::payload(src, format::header_len(MAGIC_LEN), compressed_len)?;
                let produced = match zstd::bulk::decompress_to_buffer(payload, window) {
                    Ok(n) => n,
                    Err(e) => {
                        debug!("zstd rejected payload: {e}");
                        0
                    }
                };
                if produced != original_len {
                    return Err(DecodeError::SizeMismatch {
                        codec: "zstd",
                        expected: original_len,
                        actual: produced,
                    });
                }
            }
            method => return Err(DecodeError::UnsupportedMethod { method }),
        }

        let written = &dst[dst_off..dst_off + original_len];
        self.crc.reset();
        self.crc.update(written);
        let actual = self.crc.finish();
        if actual != header.checksum {
            return Err(DecodeError::ChecksumMismatch {
                expected: header.checksum,
                actual,
            });
        }

        Ok(original_len)
    }
}
