//! Textshard - binary files as printable text shards
//!
//! Turns one file into a row of plain text files full of base64, sized
//! to fit wherever only text survives (pastebins, chat logs, QR codes,
//! printed pages), and turns them back into the original file.
//!
//! ## Transform Pipeline
//!
//! ```text
//! Input → Compress → Encrypt (optional) → Base64 → Shard files
//! ```
//!
//! - **Compress**: zstd (default), lz4, or brotli
//! - **Encrypt**: AES-256 in CTR (default), CBC, or OFB mode; the
//!   ciphertext is `16-byte IV || payload` with no mode tag, so
//!   decryption rediscovers the mode by trial
//! - **Base64**: standard alphabet
//! - **Shard files**: `{base}{index}.txt`, rejoined by probing indices
//!   from 0 until one is missing
//!
//! The shards carry no manifest. Whoever decodes must supply the same
//! algorithm, encryption flag, and key that were used to encode; the
//! format cannot detect a mismatch up front.
//!
//! ## Example
//!
//! ```no_run
//! use textshard::cli::{decode_file, encode_file, DecodeOptions, EncodeOptions};
//! use std::path::Path;
//!
//! // Encode a file into shards
//! let encode_opts = EncodeOptions {
//!     output_base: "out/piece".into(),
//!     key: "my_key".into(),
//!     ..Default::default()
//! };
//! encode_file(Path::new("archive.tar"), &encode_opts, None).unwrap();
//!
//! // Rebuild it from the shards
//! let decode_opts = DecodeOptions {
//!     output: "restored.tar".into(),
//!     key: "my_key".into(),
//!     ..Default::default()
//! };
//! decode_file("out/piece", &decode_opts).unwrap();
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod digest;
pub mod error;
pub mod pipeline;
pub mod shard;

pub use codec::{decode_from_text, encode_to_text};
pub use config::{CipherMode, Compression, PipelineConfig};
pub use error::{Result, ShardError};
