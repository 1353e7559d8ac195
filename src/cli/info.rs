use crate::error::Result;
use crate::pipeline::dearmor;
use crate::shard::{count_shards, read_shards, shard_path};
use serde::Serialize;

/// Facts about a shard set that can be learned without any settings.
///
/// The set stores no metadata, so everything here comes from probing
/// file names and parsing the joined text as base64.
#[derive(Debug, Clone, Serialize)]
pub struct ShardSetInfo {
    pub base: String,
    pub shard_count: usize,
    pub total_chars: usize,
    pub first_shard_chars: u64,
    pub last_shard_chars: u64,
    pub valid_base64: bool,
    pub payload_bytes: Option<usize>,
}

/// Probe the shard set under `base` and gather what can be known
pub fn inspect_shards(base: &str) -> Result<ShardSetInfo> {
    let text = read_shards(base)?;
    let shard_count = count_shards(base);

    let first_shard_chars = std::fs::metadata(shard_path(base, 0))?.len();
    let last_shard_chars = std::fs::metadata(shard_path(base, shard_count - 1))?.len();

    let payload = dearmor(&text).ok();
    Ok(ShardSetInfo {
        base: base.to_string(),
        shard_count,
        total_chars: text.len(),
        first_shard_chars,
        last_shard_chars,
        valid_base64: payload.is_some(),
        payload_bytes: payload.map(|p| p.len()),
    })
}

/// Display information about a shard set
pub fn show_info(base: &str) -> Result<String> {
    let info = inspect_shards(base)?;

    let mut output = String::new();

    output.push_str("Shard Set Information\n");
    output.push_str("=====================\n\n");

    output.push_str(&format!("Base name: {}\n", info.base));
    output.push_str(&format!("Shards: {}\n", info.shard_count));
    output.push_str(&format!("Total characters: {}\n", info.total_chars));
    output.push_str(&format!(
        "Shard sizes: {} first, {} last\n",
        info.first_shard_chars, info.last_shard_chars
    ));
    match info.payload_bytes {
        Some(bytes) => {
            output.push_str(&format!(
                "Base64: valid, {} of payload\n",
                format_size(bytes as u64)
            ));
        }
        None => {
            output.push_str("Base64: INVALID, the set will not decode\n");
        }
    }
    output.push('\n');

    output.push_str("Not Recorded:\n");
    output.push_str("  The shards store no compression algorithm, encryption flag,\n");
    output.push_str("  cipher key, or shard count. Decoding needs the same settings\n");
    output.push_str("  that were given at encode time.\n");

    Ok(output)
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
