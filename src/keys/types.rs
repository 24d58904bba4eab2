//! Key and address error definitions.

use thiserror::Error;

/// Errors produced while generating a private key.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The operating system entropy source failed.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    /// A hex-encoded key could not be decoded.
    #[error("invalid key hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Decoded key material was not 32 bytes.
    #[error("private key must be 32 bytes, got {0}")]
    Length(usize),
}

/// Errors produced while deriving, encoding or decoding an address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Scalar is zero or not below the curve order.
    #[error("private key is not a valid secp256k1 scalar")]
    InvalidScalar,

    /// Encoded address does not have the expected length or leading character.
    #[error("address '{0}' must be 34 characters starting with 'T'")]
    Shape(String),

    /// Address contains characters outside the base-58 alphabet.
    #[error("base58 decode failed: {0}")]
    Base58(String),

    /// Decoded byte length is not payload + checksum.
    #[error("decoded address is {0} bytes, expected 25")]
    DecodedLength(usize),

    /// Payload does not start with the TRON mainnet version byte.
    #[error("unexpected address version byte 0x{0:02x}")]
    Version(u8),

    /// Embedded checksum does not match the payload.
    #[error("address checksum mismatch")]
    Checksum,
}

/// Result type for address operations.
pub type AddressResult<T> = Result<T, AddressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AddressError::Version(0x00).to_string(), "unexpected address version byte 0x00");
        assert_eq!(KeyError::Length(31).to_string(), "private key must be 32 bytes, got 31");

        let err = AddressError::Shape("abc".into());
        assert!(err.to_string().contains("'abc'"));
    }
}
