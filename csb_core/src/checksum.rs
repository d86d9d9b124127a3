use xxhash_rust::xxh32::Xxh32;

/// Seed for the LZ4 family's XXH32 digests. Fixed by the wire format:
/// both sides of the shuffle exchange must hash with the same seed.
pub const LZ4_XXHASH_SEED: u32 = 0x9747_b28c;

/// Streaming 32-bit integrity digest over decompressed block bytes.
///
/// Engines are owned by their decompressor and reused across calls, so
/// every verification runs the full `reset` → `update` → `finish` cycle;
/// no accumulated state may survive from one block to the next.
pub trait BlockChecksum {
    /// Rewind to the engine's initial state.
    fn reset(&mut self);

    /// Fold `data` into the running digest.
    fn update(&mut self, data: &[u8]);

    /// The digest of everything updated since the last reset.
    fn finish(&mut self) -> u32;
}

// ── XXH32 (LZ4 family) ─────────────────────────────────────────────────────

/// Seeded XXH32 engine.
pub struct XxHash32 {
    seed: u32,
    state: Xxh32,
}

impl XxHash32 {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            state: Xxh32::new(seed),
        }
    }
}

impl BlockChecksum for XxHash32 {
    fn reset(&mut self) {
        self.state.reset(self.seed);
    }

    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    fn finish(&mut self) -> u32 {
        self.state.digest()
    }
}

// ── CRC-32 (Zstd family) ───────────────────────────────────────────────────

/// CRC-32 (IEEE) engine, canonical zero initial state.
#[derive(Default)]
pub struct Crc32 {
    hasher: crc32fast::Hasher,
}

impl Crc32 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlockChecksum for Crc32 {
    fn reset(&mut self) {
        self.hasher.reset();
    }

    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finish(&mut self) -> u32 {
        // finalize() consumes, and the engine must stay usable for the
        // next reset, so digest a copy of the running state.
        self.hasher.clone().finalize()
    }
}
