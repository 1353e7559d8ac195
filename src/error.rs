use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty input: nothing to process")]
    EmptyInput,

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Decompression error: {0}")]
    DecompressionError(String),

    #[error("Ciphertext too short: {0} bytes, need at least 16 for the IV")]
    CiphertextTooShort(usize),

    #[error("Decryption failed in all modes: ctr: {ctr}; cbc: {cbc}; ofb: {ofb}")]
    DecryptionFailed {
        ctr: String,
        cbc: String,
        ofb: String,
    },

    #[error("Base64 decode error: {0}")]
    ArmorDecode(#[from] base64::DecodeError),

    #[error("No shards found: {0} does not exist")]
    NoShardsFound(String),

    #[error("Invalid shard size: {0}. Must not be negative")]
    InvalidShardSize(i64),
}

pub type Result<T> = std::result::Result<T, ShardError>;
