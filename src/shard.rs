//! Shard files on disk.
//!
//! A shard set is a row of plain text files named `{base}{index}.txt`,
//! indices starting at 0 with no leading zeros and no gaps. Nothing else
//! is persisted: no count, no manifest, no record of how the text was
//! produced. Completeness is rediscovered by probing paths in index
//! order, so concurrent use of one base name is undefined.

use crate::error::{Result, ShardError};
use std::fs;
use std::path::PathBuf;

/// Path of the shard holding piece `index` of a set
pub fn shard_path(base: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{}{}.txt", base, index))
}

/// Split `text` into shards of at most `shard_size` characters and write
/// them to `{base}{index}.txt`, creating the parent directory if needed.
///
/// A `shard_size` of 0 writes the whole text as one shard; a negative
/// size is rejected before anything touches the filesystem. Returns the
/// number of shards written. `progress` is invoked after every tenth
/// shard and after the last one with `(written, total)`.
pub fn write_shards(
    text: &str,
    shard_size: i64,
    base: &str,
    progress: Option<&dyn Fn(usize, usize)>,
) -> Result<usize> {
    if text.is_empty() {
        return Err(ShardError::EmptyInput);
    }
    if shard_size < 0 {
        return Err(ShardError::InvalidShardSize(shard_size));
    }
    let effective = if shard_size == 0 {
        text.len()
    } else {
        shard_size as usize
    };

    let first = shard_path(base, 0);
    if let Some(parent) = first.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    // Shard content is base64, so byte chunks and character chunks agree
    let pieces: Vec<&[u8]> = text.as_bytes().chunks(effective).collect();
    let total = pieces.len();
    for (index, piece) in pieces.iter().enumerate() {
        fs::write(shard_path(base, index), piece)?;
        if let Some(report) = progress {
            let written = index + 1;
            if written % 10 == 0 || written == total {
                report(written, total);
            }
        }
    }
    Ok(total)
}

/// Rejoin a shard set by reading `{base}{index}.txt` for increasing
/// indices until the first absent one.
///
/// Fails with [`ShardError::NoShardsFound`] when shard 0 is absent. A gap
/// at any later index silently truncates the result there; shards after
/// the gap are ignored. That is accepted behavior of the format, not a
/// defect this function corrects.
pub fn read_shards(base: &str) -> Result<String> {
    let first = shard_path(base, 0);
    if !first.exists() {
        return Err(ShardError::NoShardsFound(first.display().to_string()));
    }

    let mut text = String::new();
    let mut index = 0;
    loop {
        let path = shard_path(base, index);
        if !path.exists() {
            break;
        }
        text.push_str(&fs::read_to_string(&path)?);
        index += 1;
    }

    if text.is_empty() {
        return Err(ShardError::EmptyInput);
    }
    Ok(text)
}

/// Count the contiguous shards present for `base`, probing from 0
pub fn count_shards(base: &str) -> usize {
    let mut index = 0;
    while shard_path(base, index).exists() {
        index += 1;
    }
    index
}
