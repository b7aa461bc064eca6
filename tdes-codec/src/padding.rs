//! Block padding for 8-byte blocks
//!
//! Two schemes are supported:
//!
//! - [`PaddingMode::Standard`]: `8 - (len % 8)` bytes, each holding that
//!   count. Always present, so an aligned input gains a full block of `0x08`.
//! - [`PaddingMode::None`]: zero-fill up to the next boundary, nothing added
//!   to aligned input. Removal strips *every* trailing zero, so plaintext
//!   that really ends in `0x00` comes back shorter. This is a known
//!   limitation of the scheme and is kept as is.

use log::{debug, warn};

use crate::config::Validation;
use crate::error::{CodecError, Result};
use crate::BLOCK_SIZE;

/// Padding scheme applied before encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingMode {
    /// Zero-fill, lossy on removal
    None,
    /// Pad value equals pad length (PKCS#5 / PKCS#7 for 8-byte blocks)
    #[default]
    Standard,
}

/// Pad plaintext to a multiple of [`BLOCK_SIZE`]
///
/// # Example
///
/// ```rust
/// use tdes_codec::padding::{pad, PaddingMode};
///
/// assert_eq!(pad(PaddingMode::Standard, b""), vec![8u8; 8]);
/// assert_eq!(pad(PaddingMode::None, b"abc"), b"abc\0\0\0\0\0".to_vec());
/// ```
pub fn pad(mode: PaddingMode, plaintext: &[u8]) -> Vec<u8> {
    let remainder = plaintext.len() % BLOCK_SIZE;
    let pad_len = match mode {
        PaddingMode::Standard => BLOCK_SIZE - remainder,
        PaddingMode::None => (BLOCK_SIZE - remainder) % BLOCK_SIZE,
    };
    let fill = match mode {
        PaddingMode::Standard => pad_len as u8,
        PaddingMode::None => 0,
    };

    let mut padded = Vec::with_capacity(plaintext.len() + pad_len);
    padded.extend_from_slice(plaintext);
    padded.resize(plaintext.len() + pad_len, fill);

    debug!("padded {} bytes to {} ({:?})", plaintext.len(), padded.len(), mode);
    padded
}

/// Remove padding with full validation
///
/// Same as [`unpad_with`] using [`Validation::Strict`].
pub fn unpad(mode: PaddingMode, decrypted: &[u8], ciphertext_len: usize) -> Result<Vec<u8>> {
    unpad_with(mode, Validation::Strict, decrypted, ciphertext_len)
}

/// Remove padding from a decrypted buffer
///
/// `ciphertext_len` is the length of the ciphertext the buffer was
/// decrypted from.
///
/// # Errors
///
/// - [`CodecError::InvalidInput`] if `decrypted` is shorter than one block
///   or not block-aligned.
/// - [`CodecError::Padding`] under [`Validation::Strict`] and
///   [`PaddingMode::Standard`] if the pad byte is outside `1..=8`, exceeds
///   `ciphertext_len`, or any of the padding bytes differs from it.
pub fn unpad_with(
    mode: PaddingMode,
    validation: Validation,
    decrypted: &[u8],
    ciphertext_len: usize,
) -> Result<Vec<u8>> {
    if decrypted.len() < BLOCK_SIZE || decrypted.len() % BLOCK_SIZE != 0 {
        return Err(CodecError::InvalidInput(format!(
            "decrypted length {} is not a positive multiple of {}",
            decrypted.len(),
            BLOCK_SIZE
        )));
    }

    let keep = match (mode, validation) {
        (PaddingMode::Standard, Validation::Strict) => strict_standard(decrypted, ciphertext_len)?,
        (PaddingMode::Standard, Validation::Legacy) => legacy_standard(decrypted, ciphertext_len),
        (PaddingMode::None, Validation::Strict) => strip_zeros(decrypted, 0),
        (PaddingMode::None, Validation::Legacy) => strip_zeros(decrypted, 1),
    };

    debug!("unpadded {} bytes to {} ({:?})", decrypted.len(), keep, mode);
    Ok(decrypted[..keep].to_vec())
}

/// Number of bytes to keep, rejecting anything but well-formed padding
fn strict_standard(decrypted: &[u8], ciphertext_len: usize) -> Result<usize> {
    let pad_byte = decrypted[decrypted.len() - 1];
    let pad_len = pad_byte as usize;

    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > ciphertext_len {
        return Err(CodecError::Padding(format!(
            "pad byte {pad_byte:#04x} out of range"
        )));
    }

    let tail = &decrypted[decrypted.len() - pad_len..];
    let mismatch = tail.iter().fold(0u8, |acc, &b| acc | (b ^ pad_byte));
    if mismatch != 0 {
        return Err(CodecError::Padding(format!(
            "padding bytes do not all equal {pad_byte:#04x}"
        )));
    }

    Ok(decrypted.len() - pad_len)
}

/// Number of bytes to keep when only the final byte is consulted
fn legacy_standard(decrypted: &[u8], ciphertext_len: usize) -> usize {
    let mut pad_len = decrypted[decrypted.len() - 1] as usize;
    if pad_len > ciphertext_len {
        pad_len = 0;
    }

    if strict_standard(decrypted, ciphertext_len).is_err() {
        warn!("accepting malformed padding (pad length {pad_len}) in legacy mode");
    }

    decrypted.len().saturating_sub(pad_len)
}

/// Number of bytes left after dropping trailing zeros, never going below `floor`
fn strip_zeros(decrypted: &[u8], floor: usize) -> usize {
    let mut end = decrypted.len();
    while end > floor && decrypted[end - 1] == 0 {
        end -= 1;
    }
    end
}
