use crate::config::Compression;
use crate::error::{Result, ShardError};
use std::io::{Read, Write};

/// Compress data using the specified algorithm.
///
/// `level` is clamped to the algorithm's valid range: zstd 1..=22,
/// brotli 0..=11. lz4 has no level knob and ignores it.
pub fn compress(data: &[u8], algorithm: Compression, level: i32) -> Result<Vec<u8>> {
    match algorithm {
        Compression::Zstd => compress_zstd(data, level),
        Compression::Lz4 => compress_lz4(data),
        Compression::Brotli => compress_brotli(data, level),
    }
}

/// Decompress data using the specified algorithm.
///
/// The blob carries no tag naming the algorithm that produced it, so the
/// caller must pass the same one as compression. A mismatch surfaces here
/// as a decompression error, not as an up-front rejection.
pub fn decompress(data: &[u8], algorithm: Compression) -> Result<Vec<u8>> {
    match algorithm {
        Compression::Zstd => decompress_zstd(data),
        Compression::Lz4 => decompress_lz4(data),
        Compression::Brotli => decompress_brotli(data),
    }
}

fn compress_zstd(data: &[u8], level: i32) -> Result<Vec<u8>> {
    zstd::encode_all(data, level.clamp(1, 22))
        .map_err(|e| ShardError::CompressionError(format!("zstd: {}", e)))
}

fn decompress_zstd(data: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(data)
        .map_err(|e| ShardError::DecompressionError(format!("zstd: {}", e)))
}

fn compress_lz4(data: &[u8]) -> Result<Vec<u8>> {
    Ok(lz4_flex::compress_prepend_size(data))
}

fn decompress_lz4(data: &[u8]) -> Result<Vec<u8>> {
    lz4_flex::decompress_size_prepended(data)
        .map_err(|e| ShardError::DecompressionError(format!("lz4: {}", e)))
}

fn compress_brotli(data: &[u8], level: i32) -> Result<Vec<u8>> {
    let quality = level.clamp(0, 11) as u32;
    let mut output = Vec::new();
    let mut writer = brotli::CompressorWriter::new(&mut output, 4096, quality, 22);
    writer.write_all(data)
        .map_err(|e| ShardError::CompressionError(format!("brotli: {}", e)))?;
    drop(writer);
    Ok(output)
}

fn decompress_brotli(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    let mut reader = brotli::Decompressor::new(data, 4096);
    reader.read_to_end(&mut output)
        .map_err(|e| ShardError::DecompressionError(format!("brotli: {}", e)))?;
    Ok(output)
}
