//! HMAC-SHA256 over the decimal string of a committed value.
//!
//! Keys and digests render as uppercase hex so a player can paste them into
//! any standard HMAC tool and recompute the digest themselves.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::entropy::EntropySource;
use crate::error::{FairError, FairResult};

type HmacSha256 = Hmac<Sha256>;

/// Length of a commitment key in bytes.
pub const KEY_LEN: usize = 32;

/// A single-use commitment key.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Draw a fresh key from `entropy`.
    pub fn generate<E: EntropySource + ?Sized>(entropy: &mut E) -> FairResult<Self> {
        let mut bytes = [0u8; KEY_LEN];
        entropy.fill(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Wrap existing key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Uppercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// An HMAC-SHA256 output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HmacDigest([u8; 32]);

impl HmacDigest {
    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Uppercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl std::fmt::Display for HmacDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn mac_for(key: &[u8], value: u32) -> FairResult<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| FairError::InvalidKeyLength)?;
    mac.update(value.to_string().as_bytes());
    Ok(mac)
}

/// HMAC-SHA256 of `value` written in decimal, keyed with `key`.
pub fn hmac_digest(key: &SecretKey, value: u32) -> FairResult<HmacDigest> {
    let tag = mac_for(key.as_bytes(), value)?.finalize().into_bytes();
    let mut out = [0u8; 32];
    out.copy_from_slice(&tag);
    Ok(HmacDigest(out))
}

/// Recompute a published digest from a revealed key and value.
///
/// Hex may be upper or lower case. The comparison is constant-time.
pub fn verify_digest(key_hex: &str, value: u32, digest_hex: &str) -> FairResult<bool> {
    let key = hex::decode(key_hex.trim()).map_err(|e| FairError::InvalidHex {
        field: "key",
        reason: e.to_string(),
    })?;
    let digest = hex::decode(digest_hex.trim()).map_err(|e| FairError::InvalidHex {
        field: "hmac",
        reason: e.to_string(),
    })?;
    Ok(mac_for(&key, value)?.verify_slice(&digest).is_ok())
}
