use crate::config::PipelineConfig;
use crate::error::{Result, ShardError};
use crate::pipeline::{armor, compress, dearmor, decompress, decrypt, encrypt};

/// Run the forward byte pipeline: compress, optionally encrypt, armor.
///
/// The returned text records none of the settings used to produce it;
/// the caller must supply the same `PipelineConfig` when decoding.
pub fn encode_to_text(data: &[u8], config: &PipelineConfig) -> Result<String> {
    // Step 1: compress
    let compressed = compress(data, config.compression, config.level)?;

    // Step 2: encrypt if requested
    let payload = if config.encrypt {
        encrypt(&compressed, &config.key, config.cipher_mode)?
    } else {
        compressed
    };

    // Step 3: armor as base64 text
    Ok(armor(&payload))
}

/// Run the reverse byte pipeline: dearmor, optionally decrypt, decompress.
///
/// Failures stay distinct per stage: malformed text, too-short or
/// undecryptable ciphertext, and corrupt streams each map to their own
/// error. The first failing stage aborts the rest.
pub fn decode_from_text(text: &str, config: &PipelineConfig) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(ShardError::EmptyInput);
    }

    // Step 1: decode the armor
    let decoded = dearmor(text)?;

    // Step 2: decrypt if requested; the mode is rediscovered by trial
    let payload = if config.encrypt {
        decrypt(&decoded, &config.key)?
    } else {
        decoded
    };

    // Step 3: decompress
    decompress(&payload, config.compression)
}
