//! # Shared Crypto - Authenticated Encryption Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `aead` | AES-256-GCM | IDAT/MDAT payload and pseudonym encryption |
//! | `keys` | 256-bit keys | Caller-supplied key material, zeroized on drop |
//!
//! ## Security Properties
//!
//! - Nonces are generated inside `encrypt` from the OS RNG and carried in
//!   the output blob; nonce reuse under a fixed key is structurally
//!   impossible through this API.
//! - AAD binds every ciphertext to a caller-supplied domain tag; replaying
//!   a blob against a different context fails authentication.
//! - Key material is zeroized on drop and redacted from `Debug` output.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aead;
pub mod errors;
pub mod keys;

pub use aead::{decrypt, encrypt, ENCRYPTED_OVERHEAD, GCM_IV_LENGTH, GCM_TAG_LENGTH};
pub use errors::CryptoError;
pub use keys::SecretKey;
