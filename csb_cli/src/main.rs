use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use csb_codecs::{decompressor_for, detect_codec, CompressionCodec};
use csb_core::decompressor::BlockDecompressor;
use csb_core::format::{self, BlockHeader, METHOD_LZ4, METHOD_RAW, METHOD_ZSTD};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "csb",
    about = "Inspect and decode compressed shuffle block dumps",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header fields of a block dump
    Inspect {
        /// Block dump to inspect
        file: PathBuf,
        /// Codec family: lz4 | zstd (default: detect from the magic)
        #[arg(short, long)]
        codec: Option<String>,
    },
    /// Decompress a block dump and write the original bytes
    Decode {
        /// Source block dump
        input: PathBuf,
        /// Destination file ("-" writes to stdout)
        output: PathBuf,
        /// Codec family: lz4 | zstd (default: detect from the magic)
        #[arg(short, long)]
        codec: Option<String>,
    },
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn family_of(block: &[u8], override_name: Option<&str>) -> anyhow::Result<CompressionCodec> {
    match override_name {
        Some(name) => name.parse(),
        None => detect_codec(block)
            .context("unrecognized block magic; pass --codec to force a family"),
    }
}

fn method_name(method: u8) -> &'static str {
    match method {
        METHOD_RAW => "raw",
        METHOD_LZ4 => "lz4",
        METHOD_ZSTD => "zstd",
        _ => "unknown",
    }
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_inspect(file: PathBuf, codec: Option<String>) -> anyhow::Result<()> {
    let block = fs::read(&file).with_context(|| format!("reading block dump {:?}", file))?;
    let family = family_of(&block, codec.as_deref())?;
    let magic_len = match family {
        CompressionCodec::Lz4 => format::LZ4_MAGIC.len(),
        CompressionCodec::Zstd => format::ZSTD_MAGIC.len(),
    };
    let header = BlockHeader::parse(&block, magic_len)?;
    let payload_on_disk = block.len() - format::header_len(magic_len);

    println!("=== Shuffle block: {:?} ===", file);
    println!();
    println!("  family          : {}", family);
    println!(
        "  method          : {} ({:#04x})",
        method_name(header.method),
        header.method
    );
    println!("  compressed len  : {} bytes", header.compressed_len);
    println!("  original len    : {} bytes", header.original_len);
    println!("  checksum        : {:#010x}", header.checksum);
    println!("  payload on disk : {} bytes", payload_on_disk);

    Ok(())
}

fn run_decode(input: PathBuf, output: PathBuf, codec: Option<String>) -> anyhow::Result<()> {
    let block = fs::read(&input).with_context(|| format!("reading block dump {:?}", input))?;
    let family = family_of(&block, codec.as_deref())?;

    let mut decompressor = decompressor_for(family);
    let original_len = decompressor.original_len(&block)?;
    let mut raw = vec![0u8; original_len];

    let t0 = Instant::now();
    decompressor.decompress(&block, &mut raw, 0)?;
    let elapsed = t0.elapsed();

    if output.to_str() == Some("-") {
        io::stdout().write_all(&raw)?;
    } else {
        fs::write(&output, &raw)
            .with_context(|| format!("writing decoded bytes to {:?}", output))?;
    }

    eprintln!("  family      : {}", family);
    eprintln!("  compressed  : {} bytes", block.len());
    eprintln!("  original    : {} bytes", original_len);
    eprintln!("  elapsed     : {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    Ok(())
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Inspect { file, codec } => run_inspect(file, codec),
        Commands::Decode {
            input,
            output,
            codec,
        } => run_decode(input, output, codec),
    }
}
