use crate::codec::decode_from_text;
use crate::config::{Compression, PipelineConfig, DEFAULT_KEY};
use crate::error::Result;
use crate::shard::{count_shards, read_shards};
use std::path::PathBuf;

/// Options for the decode command
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub output: PathBuf,
    pub compression: Compression,
    pub decrypt: bool,
    pub key: String,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("restored.bin"),
            compression: Compression::default(),
            decrypt: true,
            key: DEFAULT_KEY.to_string(),
        }
    }
}

/// What a decode run produced
#[derive(Debug, Clone)]
pub struct DecodeSummary {
    pub shard_count: usize,
    pub encoded_chars: usize,
    pub restored_size: u64,
}

/// Rebuild the original file from the shard set under `base`.
///
/// The compression, decryption, and key settings must match the ones
/// given at encode time; the shards themselves record nothing.
pub fn decode_file(base: &str, options: &DecodeOptions) -> Result<DecodeSummary> {
    // Rejoin the shard text
    let text = read_shards(base)?;
    let shard_count = count_shards(base);

    let config = PipelineConfig {
        compression: options.compression,
        encrypt: options.decrypt,
        key: options.key.clone(),
        ..Default::default()
    };

    // Reverse byte pipeline, then write the restored bytes
    let data = decode_from_text(&text, &config)?;
    std::fs::write(&options.output, &data)?;

    Ok(DecodeSummary {
        shard_count,
        encoded_chars: text.len(),
        restored_size: data.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::encode::{encode_file, EncodeOptions};
    use crate::error::ShardError;
    use crate::shard::shard_path;
    use tempfile::tempdir;

    #[test]
    fn test_encode_decode_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let original: Vec<u8> = (0..5000).map(|i| (i * 7 % 256) as u8).collect();
        std::fs::write(&input, &original).unwrap();

        let base = dir.path().join("part").display().to_string();
        // 501 is not a multiple of 4, so shard boundaries fall inside
        // base64 groups; only the concatenation has to parse
        let encode_options = EncodeOptions {
            output_base: base.clone(),
            shard_size: 501,
            key: "session key".into(),
            ..Default::default()
        };
        encode_file(&input, &encode_options, None).unwrap();

        let decode_options = DecodeOptions {
            output: dir.path().join("restored.bin"),
            key: "session key".into(),
            ..Default::default()
        };
        let summary = decode_file(&base, &decode_options).unwrap();

        assert_eq!(summary.restored_size, 5000);
        assert_eq!(std::fs::read(&decode_options.output).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_without_encryption() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        std::fs::write(&input, b"plain but compressed").unwrap();

        let base = dir.path().join("part").display().to_string();
        let encode_options = EncodeOptions {
            output_base: base.clone(),
            encrypt: false,
            ..Default::default()
        };
        encode_file(&input, &encode_options, None).unwrap();

        let decode_options = DecodeOptions {
            output: dir.path().join("restored.bin"),
            decrypt: false,
            ..Default::default()
        };
        decode_file(&base, &decode_options).unwrap();
        assert_eq!(
            std::fs::read(&decode_options.output).unwrap(),
            b"plain but compressed"
        );
    }

    #[test]
    fn test_wrong_key_fails_at_decompression() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        std::fs::write(&input, vec![42u8; 4096]).unwrap();

        let base = dir.path().join("part").display().to_string();
        let encode_options = EncodeOptions {
            output_base: base.clone(),
            key: "right".into(),
            ..Default::default()
        };
        encode_file(&input, &encode_options, None).unwrap();

        let decode_options = DecodeOptions {
            output: dir.path().join("restored.bin"),
            key: "wrong".into(),
            ..Default::default()
        };
        let result = decode_file(&base, &decode_options);
        assert!(matches!(result, Err(ShardError::DecompressionError(_))));
        assert!(!decode_options.output.exists());
    }

    #[test]
    fn test_no_shards_found() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("missing").display().to_string();
        let result = decode_file(&base, &DecodeOptions::default());
        assert!(matches!(result, Err(ShardError::NoShardsFound(_))));
    }

    #[test]
    fn test_gap_truncation_corrupts_the_join() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        // Incompressible bytes so the encoded text spans several shards
        let mut state = 1u32;
        let noise: Vec<u8> = (0..8192)
            .map(|_| {
                state = state.wrapping_mul(1103515245).wrapping_add(12345);
                (state >> 16) as u8
            })
            .collect();
        std::fs::write(&input, &noise).unwrap();

        let base = dir.path().join("part").display().to_string();
        let encode_options = EncodeOptions {
            output_base: base.clone(),
            shard_size: 100,
            encrypt: false,
            ..Default::default()
        };
        let summary = encode_file(&input, &encode_options, None).unwrap();
        assert!(summary.shard_count > 2);

        // Dropping a middle shard truncates the join silently; the damage
        // only shows up when the shorter text fails to decode
        std::fs::remove_file(shard_path(&base, 1)).unwrap();
        let decode_options = DecodeOptions {
            output: dir.path().join("restored.bin"),
            decrypt: false,
            ..Default::default()
        };
        assert!(decode_file(&base, &decode_options).is_err());
    }

    #[test]
    fn test_four_kilobyte_scenario() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let original = b"ABCD".repeat(1000);
        std::fs::write(&input, &original).unwrap();

        let base = dir.path().join("part").display().to_string();
        let encode_options = EncodeOptions {
            output_base: base.clone(),
            compression: Compression::Zstd,
            level: 9,
            shard_size: 100,
            encrypt: false,
            ..Default::default()
        };
        let summary = encode_file(&input, &encode_options, None).unwrap();
        assert_eq!(summary.original_size, 4000);
        assert_eq!(summary.shard_count, summary.encoded_chars.div_ceil(100));

        let decode_options = DecodeOptions {
            output: dir.path().join("restored.bin"),
            decrypt: false,
            ..Default::default()
        };
        let decoded = decode_file(&base, &decode_options).unwrap();
        assert_eq!(decoded.shard_count, summary.shard_count);
        assert_eq!(std::fs::read(&decode_options.output).unwrap(), original);
    }
}
