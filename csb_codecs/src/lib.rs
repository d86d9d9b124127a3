mod lz4_codec;
mod zstd_codec;

pub use lz4_codec::Lz4Decompressor;
pub use zstd_codec::ZstdDecompressor;

use std::fmt;
use std::str::FromStr;

use csb_core::decompressor::BlockDecompressor;
use csb_core::format::{LZ4_MAGIC, ZSTD_MAGIC};

/// Codec family the shuffle client is configured with. Each family has
/// its own block magic and checksum algorithm; the method byte inside a
/// block only distinguishes RAW from compressed within that family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionCodec {
    Lz4,
    Zstd,
}

impl CompressionCodec {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lz4 => "lz4",
            Self::Zstd => "zstd",
        }
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionCodec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "lz4" | "l" => Ok(Self::Lz4),
            "zstd" | "z" => Ok(Self::Zstd),
            other => anyhow::bail!("unknown codec '{}'. Valid options: lz4, zstd", other),
        }
    }
}

/// Build the decompressor for a configured codec family.
///
/// Called by the shuffle client once per fetch worker; instances are not
/// shared between concurrent calls.
pub fn decompressor_for(codec: CompressionCodec) -> Box<dyn BlockDecompressor> {
    match codec {
        CompressionCodec::Lz4 => Box::new(Lz4Decompressor::new()),
        CompressionCodec::Zstd => Box::new(ZstdDecompressor::new()),
    }
}

/// Identify the codec family of a block from its magic prefix.
///
/// The decompressors themselves never re-check the magic; this is for
/// tooling that starts from untyped bytes instead of configuration.
pub fn detect_codec(src: &[u8]) -> Option<CompressionCodec> {
    if src.starts_with(ZSTD_MAGIC) {
        Some(CompressionCodec::Zstd)
    } else if src.starts_with(LZ4_MAGIC) {
        Some(CompressionCodec::Lz4)
    } else {
        None
    }
}
