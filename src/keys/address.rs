//! TRON address derivation and base-58-check handling.
//!
//! ```text
//! private key (32 bytes)
//!     → secp256k1 public point, uncompressed (0x04 ‖ X ‖ Y, 65 bytes)
//!     → SHA-256 → RIPEMD-160 (20 bytes)
//!     → 0x41 ‖ hash (21-byte payload)
//!     → payload ‖ SHA-256(SHA-256(payload))[..4]
//!     → base-58 (34 characters, leading 'T')
//! ```

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, SecretKey};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::keys::private_key::PrivateKey;
use crate::keys::types::{AddressError, AddressResult};

/// TRON mainnet address version byte.
pub const ADDRESS_VERSION: u8 = 0x41;

/// Leading character of every encoded mainnet address.
pub const ADDRESS_PREFIX: char = 'T';

/// Length of an encoded address.
pub const ADDRESS_LEN: usize = 34;

/// Version byte + 20-byte account hash.
pub const PAYLOAD_LEN: usize = 21;

const CHECKSUM_LEN: usize = 4;

/// A base-58-check encoded TRON address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Decode and fully verify an encoded address.
    pub fn parse(encoded: &str) -> AddressResult<Self> {
        if !is_valid_shape(encoded) {
            return Err(AddressError::Shape(encoded.to_string()));
        }
        decode_check(encoded)?;
        Ok(Self(encoded.to_string()))
    }

    /// The 21-byte payload (version byte + account hash).
    pub fn payload(&self) -> [u8; PAYLOAD_LEN] {
        // Construction guarantees a valid encoding.
        decode_check(&self.0).unwrap_or([0u8; PAYLOAD_LEN])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Cheap local check: 34 characters with the mainnet leading character.
pub fn is_valid_shape(encoded: &str) -> bool {
    encoded.len() == ADDRESS_LEN && encoded.starts_with(ADDRESS_PREFIX)
}

/// Uncompressed SEC1 public key for a private key.
pub fn public_key_bytes(key: &PrivateKey) -> AddressResult<[u8; 65]> {
    let secret = SecretKey::from_bytes(FieldBytes::from_slice(key.as_bytes()))
        .map_err(|_| AddressError::InvalidScalar)?;
    let point = secret.public_key().to_encoded_point(false);

    let mut out = [0u8; 65];
    out.copy_from_slice(point.as_bytes());
    Ok(out)
}

/// Hash160 = RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripemd = Ripemd160::digest(sha);
    let mut result = [0u8; 20];
    result.copy_from_slice(&ripemd);
    result
}

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Base-58-check encode a 21-byte payload.
pub fn encode_check(payload: &[u8; PAYLOAD_LEN]) -> String {
    let mut full = Vec::with_capacity(PAYLOAD_LEN + CHECKSUM_LEN);
    full.extend_from_slice(payload);
    full.extend_from_slice(&checksum(payload));
    bs58::encode(full).into_string()
}

/// Base-58-check decode, returning the verified payload.
pub fn decode_check(encoded: &str) -> AddressResult<[u8; PAYLOAD_LEN]> {
    let raw = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| AddressError::Base58(e.to_string()))?;
    if raw.len() != PAYLOAD_LEN + CHECKSUM_LEN {
        return Err(AddressError::DecodedLength(raw.len()));
    }

    let (payload, embedded) = raw.split_at(PAYLOAD_LEN);
    if payload[0] != ADDRESS_VERSION {
        return Err(AddressError::Version(payload[0]));
    }
    if checksum(payload) != embedded {
        return Err(AddressError::Checksum);
    }

    let mut out = [0u8; PAYLOAD_LEN];
    out.copy_from_slice(payload);
    Ok(out)
}

/// Derive the TRON address controlled by `key`.
pub fn derive_address(key: &PrivateKey) -> AddressResult<Address> {
    let public = public_key_bytes(key)?;

    let mut payload = [0u8; PAYLOAD_LEN];
    payload[0] = ADDRESS_VERSION;
    payload[1..].copy_from_slice(&hash160(&public));

    let encoded = encode_check(&payload);
    if !is_valid_shape(&encoded) {
        return Err(AddressError::Shape(encoded));
    }
    Ok(Address(encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_from_u64(value: u64) -> PrivateKey {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        PrivateKey::from_bytes(bytes)
    }

    #[test]
    fn test_golden_vector_key_one() {
        let key = key_from_u64(1);

        let public = public_key_bytes(&key).unwrap();
        assert_eq!(public[0], 0x04);
        assert_eq!(
            hex::encode(&public[1..33]),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            hex::encode(&public[33..]),
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
        assert_eq!(
            hex::encode(hash160(&public)),
            "91b24bf9f5288532960ac687abb035127b1d28a5"
        );

        let address = derive_address(&key).unwrap();
        assert_eq!(address.as_str(), "TPFaa9mnTi9s5YJavKnqHNkBdYH2C8KGBM");
    }

    #[test]
    fn test_golden_vector_key_two() {
        let address = derive_address(&key_from_u64(2)).unwrap();
        assert_eq!(address.as_str(), "TVYtHN7kQhKSBg4UxZ9ZCCNgArCkiV8f7c");
        assert_eq!(
            hex::encode(&address.payload()[1..]),
            "d6c8e828c1eca1bba065e1b83e1dc2a36e387a42"
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let key = key_from_u64(0xdead_beef);
        let first = derive_address(&key).unwrap();
        let second = derive_address(&key.clone()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "TUM4MdjPsZSwaN9JayfQMcLM6vqhQ9Hb4A");
    }

    #[test]
    fn test_rejects_zero_and_out_of_range_scalars() {
        let zero = PrivateKey::from_bytes([0u8; 32]);
        assert_eq!(derive_address(&zero), Err(AddressError::InvalidScalar));

        let order = PrivateKey::from_hex(
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        )
        .unwrap();
        assert_eq!(derive_address(&order), Err(AddressError::InvalidScalar));

        let max = PrivateKey::from_bytes([0xff; 32]);
        assert_eq!(derive_address(&max), Err(AddressError::InvalidScalar));

        let order_minus_one = PrivateKey::from_hex(
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
        )
        .unwrap();
        assert!(derive_address(&order_minus_one).is_ok());
    }

    #[test]
    fn test_random_addresses_round_trip() {
        for _ in 0..32 {
            let key = PrivateKey::generate().unwrap();
            let address = derive_address(&key).unwrap();

            assert_eq!(address.as_str().len(), ADDRESS_LEN);
            assert!(address.as_str().starts_with(ADDRESS_PREFIX));

            let payload = decode_check(address.as_str()).unwrap();
            assert_eq!(payload[0], ADDRESS_VERSION);
            assert_eq!(encode_check(&payload), address.as_str());
            assert_eq!(Address::parse(address.as_str()).unwrap(), address);
        }
    }

    #[test]
    fn test_parse_detects_corruption() {
        // Last character swapped: same shape, different checksum.
        assert_eq!(
            Address::parse("TPFaa9mnTi9s5YJavKnqHNkBdYH2C8KGBN"),
            Err(AddressError::Checksum)
        );
        assert!(matches!(
            Address::parse("TPFaa9mnTi9s5YJavKnqHNkBdYH2C8KGB0"),
            Err(AddressError::Base58(_))
        ));
        assert!(matches!(
            Address::parse("TPFaa9mnTi9s5YJavKnq"),
            Err(AddressError::Shape(_))
        ));
        // Bitcoin address for key 1: valid base-58-check, wrong version.
        assert_eq!(
            decode_check("1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm"),
            Err(AddressError::Version(0x00))
        );
        assert_eq!(decode_check("T"), Err(AddressError::DecodedLength(1)));
    }

    #[test]
    fn test_shape_check() {
        assert!(is_valid_shape("TPFaa9mnTi9s5YJavKnqHNkBdYH2C8KGBM"));
        assert!(!is_valid_shape("XPFaa9mnTi9s5YJavKnqHNkBdYH2C8KGBM"));
        assert!(!is_valid_shape("TPFaa9mnTi9s5YJavKnqHNkBdYH2C8KGB"));
        assert!(!is_valid_shape(""));
    }
}
