use crate::error::{DecodeError, Result};

/// Magic bytes prefixed to every LZ4-family block.
pub const LZ4_MAGIC: &[u8; 8] = b"LZ4Block";

/// Magic bytes prefixed to every Zstd-family block.
pub const ZSTD_MAGIC: &[u8; 9] = b"ZSTDBlock";

/// Method byte: payload is stored verbatim (still checksummed).
pub const METHOD_RAW: u8 = 0x10;
/// Method byte: payload is a raw LZ4 block stream.
pub const METHOD_LZ4: u8 = 0x20;
/// Method byte: payload is a complete Zstd frame.
pub const METHOD_ZSTD: u8 = 0x30;

/// Fixed-size fields following the magic, identical in both families:
///   method:u8 + compressed_len:u32 + original_len:u32 + checksum:u32 = 13
pub const METHOD_FIELDS_LEN: usize = 13;

/// Full header length for a family whose magic is `magic_len` bytes.
/// LZ4 family: 8 + 13 = 21. Zstd family: 9 + 13 = 22.
pub const fn header_len(magic_len: usize) -> usize {
    magic_len + METHOD_FIELDS_LEN
}

// ── Header ─────────────────────────────────────────────────────────────────

/// Decoded view of one block header. All integer fields are little-endian
/// on the wire; `checksum` is the digest of the *decompressed* payload,
/// computed with the engine of the family the block belongs to.
#[derive(Debug, Clone, Copy)]
pub struct BlockHeader {
    pub method: u8,
    /// Payload length as stored (post-compression).
    pub compressed_len: u32,
    /// Payload length once decompressed; also the number of bytes the
    /// caller must have room for at the destination offset.
    pub original_len: u32,
    pub checksum: u32,
}

impl BlockHeader {
    /// Decode the fixed-offset fields of a block whose magic is
    /// `magic_len` bytes long.
    ///
    /// The magic itself is not validated here; callers that start from
    /// untyped bytes route on it separately. Fields are re-read on every
    /// call; nothing is cached between calls.
    pub fn parse(src: &[u8], magic_len: usize) -> Result<Self> {
        let required = header_len(magic_len);
        if src.len() < required {
            return Err(DecodeError::TruncatedBlock {
                required,
                available: src.len(),
            });
        }
        Ok(Self {
            method: src[magic_len],
            compressed_len: read_u32_le(src, magic_len + 1),
            original_len: read_u32_le(src, magic_len + 5),
            checksum: read_u32_le(src, magic_len + 9),
        })
    }

    /// Read `original_len` alone, for sizing destination buffers before
    /// committing to a full decompress.
    pub fn original_len(src: &[u8], magic_len: usize) -> Result<u32> {
        let required = header_len(magic_len);
        if src.len() < required {
            return Err(DecodeError::TruncatedBlock {
                required,
                available: src.len(),
            });
        }
        Ok(read_u32_le(src, magic_len + 5))
    }
}

/// Borrow `len` payload bytes starting right after the header.
pub fn payload(src: &[u8], header_len: usize, len: usize) -> Result<&[u8]> {
    let required = header_len.checked_add(len).unwrap_or(usize::MAX);
    if required > src.len() {
        return Err(DecodeError::TruncatedBlock {
            required,
            available: src.len(),
        });
    }
    Ok(&src[header_len..required])
}

fn read_u32_le(src: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        src[offset],
        src[offset + 1],
        src[offset + 2],
        src[offset + 3],
    ])
}
