use crate::config::CipherMode;
use crate::error::{Result, ShardError};
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, StreamCipher};
use rand::rngs::OsRng;
use rand::RngCore;

/// IV length in bytes, prepended to every ciphertext
pub const IV_LEN: usize = 16;

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

type Aes256Ctr = ctr::Ctr128BE<aes::Aes256>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type Aes256Ofb = ofb::Ofb<aes::Aes256>;

/// Coerce a UTF-8 key string to exactly 32 bytes.
///
/// Shorter keys are zero-padded, longer keys truncated. Deterministic but
/// cryptographically weak; kept for compatibility with existing shard
/// sets. This is not a key-derivation function.
fn derive_key(key: &str) -> [u8; KEY_LEN] {
    let mut out = [0u8; KEY_LEN];
    let bytes = key.as_bytes();
    let n = bytes.len().min(KEY_LEN);
    out[..n].copy_from_slice(&bytes[..n]);
    out
}

/// Encrypt data with AES-256 in the given mode.
///
/// Output is `IV || payload` with a fresh random 16-byte IV. CTR and OFB
/// preserve the payload length; CBC pads to the 16-byte block boundary
/// with PKCS#7 first. The output records neither the mode nor any key
/// hint, so [`decrypt`] has to rediscover the mode by trial.
pub fn encrypt(data: &[u8], key: &str, mode: CipherMode) -> Result<Vec<u8>> {
    let key = derive_key(key);
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let payload = match mode {
        CipherMode::Ctr => {
            let mut buf = data.to_vec();
            let mut cipher = Aes256Ctr::new(&key.into(), &iv.into());
            cipher.apply_keystream(&mut buf);
            buf
        }
        CipherMode::Cbc => {
            Aes256CbcEnc::new(&key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(data)
        }
        CipherMode::Ofb => {
            let mut buf = data.to_vec();
            let mut cipher = Aes256Ofb::new(&key.into(), &iv.into());
            cipher.apply_keystream(&mut buf);
            buf
        }
    };

    let mut out = Vec::with_capacity(IV_LEN + payload.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decrypt `IV || payload` produced by [`encrypt`].
///
/// The ciphertext does not say which mode produced it, so modes are tried
/// in fixed order: CTR, then CBC with padding removal, then OFB. The
/// first mode that completes without a padding or format error wins; if
/// all three fail, the error lists each mode's reason.
///
/// CTR and OFB cannot fail on a wrong key; they return garbage bytes as a
/// success. CTR therefore claims every payload before the CBC and OFB
/// branches are reached, and a wrong key or wrong mode shows up
/// downstream, typically as a decompression failure, not here.
pub fn decrypt(data: &[u8], key: &str) -> Result<Vec<u8>> {
    if data.len() < IV_LEN {
        return Err(ShardError::CiphertextTooShort(data.len()));
    }
    let key = derive_key(key);
    let (iv_bytes, payload) = data.split_at(IV_LEN);
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(iv_bytes);

    let ctr = match try_ctr(&key, &iv, payload) {
        Ok(plain) => return Ok(plain),
        Err(e) => e,
    };
    let cbc = match try_cbc(&key, &iv, payload) {
        Ok(plain) => return Ok(plain),
        Err(e) => e,
    };
    let ofb = match try_ofb(&key, &iv, payload) {
        Ok(plain) => return Ok(plain),
        Err(e) => e,
    };

    Err(ShardError::DecryptionFailed { ctr, cbc, ofb })
}

fn try_ctr(
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
    payload: &[u8],
) -> std::result::Result<Vec<u8>, String> {
    let mut buf = payload.to_vec();
    let mut cipher = Aes256Ctr::new(key.into(), iv.into());
    cipher.apply_keystream(&mut buf);
    Ok(buf)
}

fn try_cbc(
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
    payload: &[u8],
) -> std::result::Result<Vec<u8>, String> {
    Aes256CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(payload)
        .map_err(|_| "invalid PKCS#7 padding".to_string())
}

fn try_ofb(
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
    payload: &[u8],
) -> std::result::Result<Vec<u8>, String> {
    let mut buf = payload.to_vec();
    let mut cipher = Aes256Ofb::new(key.into(), iv.into());
    cipher.apply_keystream(&mut buf);
    Ok(buf)
}
