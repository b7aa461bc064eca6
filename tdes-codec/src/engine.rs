//! Cipher engine capability and its implementations

use des::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use des::TdesEde3;

use crate::error::{CodecError, Result};
use crate::BLOCK_SIZE;

/// Trait for a block cipher engine running in ECB mode.
///
/// Both directions take an explicit key on every call and must be
/// deterministic for a given key/data pair. `data` is always a whole number
/// of blocks when called from this crate.
pub trait CipherEngine {
    /// Encrypts block-aligned data
    fn encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts block-aligned data
    fn decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>>;

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;
}

impl<E: CipherEngine + ?Sized> CipherEngine for &E {
    fn encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt(key, data)
    }

    fn decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        (**self).decrypt(key, data)
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }
}

/// DES-EDE3 in ECB mode.
///
/// Only 24-byte keys are accepted, the same limit platform 3DES providers
/// enforce. Normalized keys longer than that are refused rather than cut.
#[derive(Debug, Clone, Copy, Default)]
pub struct TdesEcb;

/// Direction of an ECB pass
#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl TdesEcb {
    /// The only key length DES-EDE3 takes
    pub const KEY_SIZE: usize = 24;

    pub fn new() -> Self {
        Self
    }

    fn process(key: &[u8], data: &[u8], direction: Direction) -> Result<Vec<u8>> {
        if key.len() != Self::KEY_SIZE {
            return Err(CodecError::Engine(format!(
                "invalid key length: expected {}, got {}",
                Self::KEY_SIZE,
                key.len()
            )));
        }
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CodecError::Engine(format!(
                "data length {} is not a multiple of block size {}",
                data.len(),
                BLOCK_SIZE
            )));
        }

        let cipher = TdesEde3::new_from_slice(key)?;
        let mut output = data.to_vec();

        // ECB: every block on its own, no IV
        for chunk in output.chunks_exact_mut(BLOCK_SIZE) {
            let block = GenericArray::from_mut_slice(chunk);
            match direction {
                Direction::Encrypt => cipher.encrypt_block(block),
                Direction::Decrypt => cipher.decrypt_block(block),
            }
        }

        Ok(output)
    }
}

impl CipherEngine for TdesEcb {
    fn encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        Self::process(key, data, Direction::Encrypt)
    }

    fn decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        Self::process(key, data, Direction::Decrypt)
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}

/// Dummy engine for testing and demonstration
///
/// XORs the data with the repeating key. It should **never** be used to
/// protect anything; it exists so the padding and key handling can be
/// exercised with keys of any normalized length.
///
/// # Example
///
/// ```rust
/// use tdes_codec::{CipherEngine, XorEngine};
///
/// let engine = XorEngine::new();
/// assert_eq!(engine.block_size(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct XorEngine {
    block_size: usize,
}

impl XorEngine {
    /// Creates an XOR engine with the 3DES block size
    pub fn new() -> Self {
        Self::with_block_size(BLOCK_SIZE)
    }

    /// Creates an XOR engine reporting an arbitrary block size
    pub fn with_block_size(block_size: usize) -> Self {
        Self { block_size }
    }
}

impl Default for XorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherEngine for XorEngine {
    fn encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        if key.is_empty() {
            return Err(CodecError::Engine("Key cannot be empty".to_string()));
        }

        Ok(data
            .iter()
            .zip(key.iter().cycle())
            .map(|(d, k)| d ^ k)
            .collect())
    }

    /// XOR is its own inverse
    fn decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(key, data)
    }

    fn block_size(&self) -> usize {
        self.block_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS 81 / "The DES Algorithm Illustrated" vector. With K1 = K2 = K3,
    // EDE collapses to single DES.
    const DES_KEY: &str = "133457799bbcdff1";
    const DES_PLAIN: &str = "0123456789abcdef";
    const DES_CIPHER: &str = "85e813540f0ab405";

    fn degenerate_key() -> Vec<u8> {
        hex::decode(DES_KEY.repeat(3)).unwrap()
    }

    #[test]
    fn test_tdes_known_answer() {
        let engine = TdesEcb::new();
        let plaintext = hex::decode(DES_PLAIN).unwrap();

        let ciphertext = engine.encrypt(&degenerate_key(), &plaintext).unwrap();
        assert_eq!(hex::encode(&ciphertext), DES_CIPHER);

        let decrypted = engine.decrypt(&degenerate_key(), &ciphertext).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_tdes_ecb_blocks_are_independent() {
        let engine = TdesEcb::new();
        let plaintext = hex::decode(DES_PLAIN.repeat(3)).unwrap();

        let ciphertext = engine.encrypt(&degenerate_key(), &plaintext).unwrap();
        assert_eq!(hex::encode(&ciphertext), DES_CIPHER.repeat(3));
    }

    #[test]
    fn test_tdes_rejects_wrong_key_length() {
        let engine = TdesEcb::new();
        let data = [0u8; 8];

        for len in [0, 8, 16, 23, 25, 32] {
            let key = vec![0x11u8; len];
            assert!(matches!(
                engine.encrypt(&key, &data),
                Err(CodecError::Engine(_))
            ));
            assert!(matches!(
                engine.decrypt(&key, &data),
                Err(CodecError::Engine(_))
            ));
        }
    }

    #[test]
    fn test_tdes_rejects_misaligned_data() {
        let engine = TdesEcb::new();
        let key = [0x42u8; 24];

        let result = engine.encrypt(&key, b"not aligned");
        assert!(matches!(result, Err(CodecError::Engine(_))));
    }

    #[test]
    fn test_tdes_empty_data() {
        let engine = TdesEcb::new();
        let key = [0x42u8; 24];

        assert!(engine.encrypt(&key, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_xor_engine_roundtrip() {
        let engine = XorEngine::new();
        let key = b"testkey1";
        let data = b"hello123hello123";

        let encrypted = engine.encrypt(key, data).unwrap();
        assert_ne!(&encrypted[..], &data[..]);
        assert_eq!(engine.decrypt(key, &encrypted).unwrap(), data);
    }

    #[test]
    fn test_xor_engine_empty_key() {
        let engine = XorEngine::new();

        let result = engine.encrypt(b"", b"hello123");
        assert!(matches!(result, Err(CodecError::Engine(_))));
    }
}
