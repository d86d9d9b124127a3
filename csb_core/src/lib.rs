pub mod checksum;
pub mod decompressor;
pub mod error;
pub mod format;

pub use checksum::{BlockChecksum, Crc32, XxHash32, LZ4_XXHASH_SEED};
pub use decompressor::{checked_window, BlockDecompressor};
pub use error::{DecodeError, Result};
pub use format::BlockHeader;
