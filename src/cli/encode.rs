use crate::codec::encode_to_text;
use crate::config::{
    encryption_worthwhile, CipherMode, Compression, PipelineConfig, DEFAULT_KEY, DEFAULT_LEVEL,
    DEFAULT_SHARD_BASE, DEFAULT_SHARD_SIZE,
};
use crate::digest::file_sha256;
use crate::error::Result;
use crate::shard::write_shards;
use std::path::Path;

/// Options for the encode command
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub output_base: String,
    pub compression: Compression,
    pub level: i32,
    pub shard_size: i64,
    pub encrypt: bool,
    pub key: String,
    pub cipher_mode: CipherMode,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            output_base: DEFAULT_SHARD_BASE.to_string(),
            compression: Compression::default(),
            level: DEFAULT_LEVEL,
            shard_size: DEFAULT_SHARD_SIZE,
            encrypt: true,
            key: DEFAULT_KEY.to_string(),
            cipher_mode: CipherMode::default(),
        }
    }
}

/// What an encode run produced
#[derive(Debug, Clone)]
pub struct EncodeSummary {
    pub original_size: u64,
    pub sha256: String,
    pub encoded_chars: usize,
    pub shard_count: usize,
    pub encrypted: bool,
    /// Encryption was requested for an input small enough that it adds
    /// mostly overhead; reported as a note, never overridden
    pub small_input: bool,
}

/// Encode a file into a set of text shards.
/// Returns a summary of what was produced.
pub fn encode_file(
    input_path: &Path,
    options: &EncodeOptions,
    progress: Option<&dyn Fn(usize, usize)>,
) -> Result<EncodeSummary> {
    // Read the input and fingerprint it
    let data = std::fs::read(input_path)?;
    let sha256 = file_sha256(input_path)?;
    let original_size = data.len() as u64;

    let small_input = options.encrypt && !encryption_worthwhile(original_size, false);

    let config = PipelineConfig {
        compression: options.compression,
        level: options.level,
        encrypt: options.encrypt,
        key: options.key.clone(),
        cipher_mode: options.cipher_mode,
    };

    // Full byte pipeline first; shards are only written once it succeeds
    let text = encode_to_text(&data, &config)?;
    let encoded_chars = text.len();
    let shard_count = write_shards(&text, options.shard_size, &options.output_base, progress)?;

    Ok(EncodeSummary {
        original_size,
        sha256,
        encoded_chars,
        shard_count,
        encrypted: options.encrypt,
        small_input,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shard::shard_path;
    use tempfile::tempdir;

    #[test]
    fn test_encode_writes_expected_shards() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        std::fs::write(&input, b"Hello, World! This file becomes shards.").unwrap();

        let options = EncodeOptions {
            output_base: dir.path().join("out/part").display().to_string(),
            shard_size: 20,
            ..Default::default()
        };
        let summary = encode_file(&input, &options, None).unwrap();

        assert_eq!(summary.original_size, 40);
        assert_eq!(summary.sha256.len(), 64);
        assert_eq!(summary.shard_count, summary.encoded_chars.div_ceil(20));
        for index in 0..summary.shard_count {
            assert!(shard_path(&options.output_base, index).exists());
        }
        assert!(!shard_path(&options.output_base, summary.shard_count).exists());
    }

    #[test]
    fn test_encode_empty_file_is_legal() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.bin");
        std::fs::write(&input, b"").unwrap();

        let options = EncodeOptions {
            output_base: dir.path().join("part").display().to_string(),
            ..Default::default()
        };
        let summary = encode_file(&input, &options, None).unwrap();
        assert_eq!(summary.original_size, 0);
        assert!(summary.encoded_chars > 0);
        assert_eq!(summary.shard_count, 1);
    }

    #[test]
    fn test_small_input_note() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("small.bin");
        std::fs::write(&input, vec![7u8; 100]).unwrap();

        let mut options = EncodeOptions {
            output_base: dir.path().join("part").display().to_string(),
            ..Default::default()
        };
        let summary = encode_file(&input, &options, None).unwrap();
        assert!(summary.small_input);

        options.encrypt = false;
        let summary = encode_file(&input, &options, None).unwrap();
        assert!(!summary.small_input);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempdir().unwrap();
        let options = EncodeOptions {
            output_base: dir.path().join("part").display().to_string(),
            ..Default::default()
        };
        let result = encode_file(&dir.path().join("nope.bin"), &options, None);
        assert!(result.is_err());
    }
}
