//! # Triple-DES Codec Library
//!
//! Adapts secrets and plaintext of any length to the fixed 8-byte block
//! contract of a triple-DES (DES-EDE3) cipher in ECB mode.
//!
//! ## Components
//!
//! - **Key normalization** ([`key`]) - stretches a secret to a whole number of
//!   blocks, at least 24 bytes, zero-filled past the secret
//! - **Padding** ([`padding`]) - `Standard` (pad value = pad length) or `None`
//!   (zero-fill, lossy on removal)
//! - **Engines** ([`engine`]) - the [`CipherEngine`] capability, with a
//!   DES-EDE3 implementation and an XOR stand-in for tests
//!
//! ## Usage
//!
//! ```rust
//! use tdes_codec::{CodecConfig, PaddingMode, TdesEcb, TripleDes};
//!
//! let codec = TripleDes::new(TdesEcb::new(), CodecConfig::new(PaddingMode::Standard))?;
//!
//! let ciphertext = codec.encrypt(b"12345678", b"this is a test!")?;
//! let plaintext = codec.decrypt(b"12345678", &ciphertext)?;
//! assert_eq!(plaintext, b"this is a test!");
//! # Ok::<(), tdes_codec::CodecError>(())
//! ```
//!
//! ECB leaks equal plaintext blocks and nothing here authenticates the
//! ciphertext. This crate exists for interoperating with systems that
//! already use this construction.

pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod key;
pub mod padding;

pub use codec::{decrypt, encrypt, TripleDes};
pub use config::{CodecConfig, Validation};
pub use engine::{CipherEngine, TdesEcb, XorEngine};
pub use error::{CodecError, Result};
pub use key::{normalize, CipherKey};
pub use padding::{pad, unpad, unpad_with, PaddingMode};

/// Block size of DES and DES-EDE3 in bytes
pub const BLOCK_SIZE: usize = 8;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
