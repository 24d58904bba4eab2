//! Key generation and address derivation subsystem.
//!
//! # Data Flow
//! ```text
//! OS CSPRNG
//!     → private_key.rs (32-byte scalar, KeySource seam)
//!     → address.rs (secp256k1 → SHA-256 → RIPEMD-160 → base-58-check)
//!     → Address (34 chars, leading 'T')
//! ```
//!
//! # Security Constraints
//! - Keys are throwaway; nothing here stores or encrypts them
//! - Never log private keys (Debug is redacted)
//! - Zero and out-of-range scalars are rejected, never wrapped

pub mod address;
pub mod private_key;
pub mod types;

pub use address::{derive_address, is_valid_shape, Address};
pub use private_key::{KeySource, OsKeySource, PrivateKey};
pub use types::{AddressError, KeyError};
