use crate::error::Result;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;

/// Encode bytes as standard-alphabet base64 text.
pub fn armor(data: &[u8]) -> String {
    BASE64_STANDARD.encode(data)
}

/// Decode standard-alphabet base64 text back to bytes.
///
/// Fails on non-alphabet characters or a bad padding length.
pub fn dearmor(text: &str) -> Result<Vec<u8>> {
    Ok(BASE64_STANDARD.decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShardError;

    #[test]
    fn test_roundtrip() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(dearmor(&armor(&data)).unwrap(), data);
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(armor(b"hello"), "aGVsbG8=");
        assert_eq!(dearmor("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn test_empty() {
        assert_eq!(armor(b""), "");
        assert_eq!(dearmor("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_rejects_non_alphabet_characters() {
        let result = dearmor("not valid base64!");
        assert!(matches!(result, Err(ShardError::ArmorDecode(_))));
    }

    #[test]
    fn test_rejects_bad_padding_length() {
        assert!(dearmor("AAA").is_err());
    }
}
