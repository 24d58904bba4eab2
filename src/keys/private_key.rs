//! Random private key generation.
//!
//! # Security
//! - Keys come only from the operating system CSPRNG
//! - An entropy failure is an error, never a fallback to a weaker source
//! - `Debug` output is redacted so keys never leak into log fields

use rand::rngs::OsRng;
use rand::RngCore;

use crate::keys::types::KeyError;

/// Length of a secp256k1 scalar in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// A 32-byte candidate private key.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; PRIVATE_KEY_LEN]);

impl PrivateKey {
    /// Draw a fresh key from the operating system entropy source.
    pub fn generate() -> Result<Self, KeyError> {
        let mut bytes = [0u8; PRIVATE_KEY_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| KeyError::Entropy(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a hex string (with or without 0x prefix).
    pub fn from_hex(key_hex: &str) -> Result<Self, KeyError> {
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);
        let decoded = hex::decode(key_hex)?;
        let bytes: [u8; PRIVATE_KEY_LEN] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::Length(decoded.len()))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.0
    }

    /// Lowercase 64-character hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Source of candidate keys for the scan worker.
pub trait KeySource: Send + Sync + 'static {
    fn generate(&self) -> Result<PrivateKey, KeyError>;
}

/// Production key source backed by the OS CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsKeySource;

impl KeySource for OsKeySource {
    fn generate(&self) -> Result<PrivateKey, KeyError> {
        PrivateKey::generate()
    }
}
