use crate::error::{Result, ShardError};
use serde::{Deserialize, Serialize};

/// Default shard size in characters
pub const DEFAULT_SHARD_SIZE: i64 = 3000;

/// Default base name for shard files
pub const DEFAULT_SHARD_BASE: &str = "shard";

/// Default encryption key
pub const DEFAULT_KEY: &str = "textshard";

/// Default compression level
pub const DEFAULT_LEVEL: i32 = 9;

/// Compression algorithm options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Zstd,
    Lz4,
    Brotli,
}

impl std::str::FromStr for Compression {
    type Err = ShardError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "zstd" => Ok(Self::Zstd),
            "lz4" => Ok(Self::Lz4),
            "brotli" => Ok(Self::Brotli),
            _ => Err(ShardError::UnsupportedAlgorithm(format!(
                "compression: {}",
                s
            ))),
        }
    }
}

/// AES-256 cipher mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    #[default]
    Ctr,
    Cbc,
    Ofb,
}

impl std::str::FromStr for CipherMode {
    type Err = ShardError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ctr" => Ok(Self::Ctr),
            "cbc" => Ok(Self::Cbc),
            "ofb" => Ok(Self::Ofb),
            _ => Err(ShardError::UnsupportedAlgorithm(format!(
                "cipher mode: {}",
                s
            ))),
        }
    }
}

/// Settings for the byte-level transform pipeline.
///
/// Shard files record none of these, so the same settings must be supplied
/// on encode and decode. `cipher_mode` matters only on encode; decryption
/// discovers the mode by trial.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub compression: Compression,
    pub level: i32,
    pub encrypt: bool,
    pub key: String,
    pub cipher_mode: CipherMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            level: DEFAULT_LEVEL,
            encrypt: true,
            key: DEFAULT_KEY.to_string(),
            cipher_mode: CipherMode::default(),
        }
    }
}

/// Below this size encryption is pure overhead
pub const ENCRYPT_MIN_SIZE: u64 = 512;

/// Below this size encryption gains little
pub const ENCRYPT_ADVISORY_SIZE: u64 = 2048;

/// Whether a file of `size` bytes is worth encrypting.
///
/// Advisory only: callers report the verdict but honor the user's request.
pub fn encryption_worthwhile(size: u64, force: bool) -> bool {
    if force {
        return true;
    }
    if size < ENCRYPT_MIN_SIZE {
        return false;
    }
    size >= ENCRYPT_ADVISORY_SIZE
}
