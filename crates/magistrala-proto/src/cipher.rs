//! Bootstrap payload cipher.
//!
//! AES-256 in CFB mode. The key is the UTF-8 secret truncated or
//! zero-padded to 32 bytes. Output is lowercase hex of `iv || ciphertext`
//! with a fresh random 16-byte IV per call.

use aes::cipher::{AsyncStreamCipher, KeyIvInit};
use rand::RngCore;
use serde::de::DeserializeOwned;

type Aes256CfbEnc = cfb_mode::Encryptor<aes::Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<aes::Aes256>;

/// Key length in bytes.
pub const KEY_LEN: usize = 32;
/// IV length in bytes.
pub const IV_LEN: usize = 16;

/// Errors raised by the bootstrap cipher.
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    /// Input is not valid hex
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Input is shorter than the IV
    #[error("ciphertext too short: {0} bytes")]
    TooShort(usize),
    /// Key or IV had the wrong length
    #[error("invalid key or iv length")]
    InvalidLength,
    /// Decrypted bytes are not UTF-8
    #[error("plaintext is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Decrypted text is not the expected JSON
    #[error("plaintext is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

fn derive_key(secret: &str) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    let bytes = secret.as_bytes();
    let n = bytes.len().min(KEY_LEN);
    key[..n].copy_from_slice(&bytes[..n]);
    key
}

/// Encrypt `plaintext` with `secret`.
///
/// # Errors
///
/// Returns error if the cipher cannot be initialized.
pub fn encrypt(plaintext: &str, secret: &str) -> Result<String, CipherError> {
    let key = derive_key(secret);
    let mut iv = [0u8; IV_LEN];
    rand::thread_rng().fill_bytes(&mut iv);

    let mut buf = plaintext.as_bytes().to_vec();
    Aes256CfbEnc::new_from_slices(&key, &iv)
        .map_err(|_| CipherError::InvalidLength)?
        .encrypt(&mut buf);

    let mut out = Vec::with_capacity(IV_LEN + buf.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&buf);
    Ok(hex::encode(out))
}

/// Decrypt hex `iv || ciphertext` with `secret`.
///
/// # Errors
///
/// Returns error if the input is not hex, is shorter than the IV, or does
/// not decrypt to UTF-8.
pub fn decrypt(encoded: &str, secret: &str) -> Result<String, CipherError> {
    let bytes = hex::decode(encoded.trim())?;
    if bytes.len() < IV_LEN {
        return Err(CipherError::TooShort(bytes.len()));
    }
    let (iv, ciphertext) = bytes.split_at(IV_LEN);

    let key = derive_key(secret);
    let mut buf = ciphertext.to_vec();
    Aes256CfbDec::new_from_slices(&key, iv)
        .map_err(|_| CipherError::InvalidLength)?
        .decrypt(&mut buf);

    Ok(String::from_utf8(buf)?)
}

/// Decrypt and parse a JSON payload.
///
/// # Errors
///
/// Returns error if decryption fails or the plaintext is not a `T`.
pub fn decrypt_json<T: DeserializeOwned>(encoded: &str, secret: &str) -> Result<T, CipherError> {
    let text = decrypt(encoded, secret)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let secret = "bootstrap-crypto-key";
        for plaintext in ["", "k", "external-key-1234", "ünïcødé payload"] {
            let encoded = encrypt(plaintext, secret).unwrap();
            assert_eq!(decrypt(&encoded, secret).unwrap(), plaintext);
        }
    }

    #[test]
    fn output_is_iv_prefixed_lower_hex() {
        let encoded = encrypt("abc", "k").unwrap();
        assert_eq!(encoded.len(), (IV_LEN + 3) * 2);
        assert!(encoded.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn fresh_iv_per_call() {
        let a = encrypt("same", "k").unwrap();
        let b = encrypt("same", "k").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn long_secrets_are_truncated() {
        let long = "x".repeat(40);
        let truncated = "x".repeat(32);
        let encoded = encrypt("payload", &long).unwrap();
        assert_eq!(decrypt(&encoded, &truncated).unwrap(), "payload");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(decrypt("zz", "k"), Err(CipherError::Hex(_))));
        assert!(matches!(decrypt("00ff", "k"), Err(CipherError::TooShort(2))));
    }

    #[test]
    fn decrypts_json() {
        let encoded = encrypt(r#"{"client_id":"c1","channels":["ch1"]}"#, "k").unwrap();
        let value: serde_json::Value = decrypt_json(&encoded, "k").unwrap();
        assert_eq!(value["client_id"], "c1");
    }
}
