//! Key normalization
//!
//! Stretches a secret of any length into a key DES-EDE3 can take: a whole
//! number of 8-byte blocks, never fewer than three.

use std::fmt;

use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::BLOCK_SIZE;

/// Minimum number of blocks in a normalized key (one per DES stage)
pub const MIN_KEY_BLOCKS: usize = 3;

/// A normalized cipher key.
///
/// Length is `max(3, ceil(n / 8)) * 8` for a secret of `n` bytes. The bytes
/// past the secret are zero. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CipherKey(Vec<u8>);

impl CipherKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CipherKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// Length of the key [`normalize`] produces for a secret of `secret_len` bytes
pub fn normalized_len(secret_len: usize) -> usize {
    let block_count = secret_len.div_ceil(BLOCK_SIZE).max(MIN_KEY_BLOCKS);
    block_count * BLOCK_SIZE
}

/// Normalize a secret into a [`CipherKey`]
///
/// The whole buffer is zeroed before the secret goes in, and it is always
/// large enough for the entire secret. Never fails.
///
/// # Example
///
/// ```rust
/// use tdes_codec::key::normalize;
///
/// let key = normalize(b"12345678");
/// assert_eq!(key.len(), 24);
/// assert_eq!(&key.as_bytes()[..8], b"12345678");
/// assert!(key.as_bytes()[8..].iter().all(|&b| b == 0));
/// ```
pub fn normalize(secret: &[u8]) -> CipherKey {
    let mut key = vec![0u8; normalized_len(secret.len())];
    key[..secret.len()].copy_from_slice(secret);

    debug!(
        "normalized {}-byte secret into {}-byte key",
        secret.len(),
        key.len()
    );
    CipherKey(key)
}
