//! Encrypt / decrypt orchestration

use log::debug;
use zeroize::Zeroizing;

use crate::config::CodecConfig;
use crate::engine::{CipherEngine, TdesEcb};
use crate::error::{CodecError, Result};
use crate::key::normalize;
use crate::padding::{pad, unpad_with, PaddingMode};
use crate::BLOCK_SIZE;

/// A configured triple-DES codec.
///
/// Holds an engine and fixed settings; every call normalizes its own key and
/// pads its own buffer, so a handle with a `Sync` engine can be shared
/// across threads as is.
#[derive(Debug, Clone)]
pub struct TripleDes<E = TdesEcb> {
    engine: E,
    config: CodecConfig,
}

impl TripleDes<TdesEcb> {
    /// DES-EDE3 codec with the given padding and strict validation
    pub fn tdes(padding: PaddingMode) -> Self {
        Self {
            engine: TdesEcb::new(),
            config: CodecConfig::new(padding),
        }
    }
}

impl<E: CipherEngine> TripleDes<E> {
    /// Wrap an engine, checking it works on 8-byte blocks
    pub fn new(engine: E, config: CodecConfig) -> Result<Self> {
        let block_size = engine.block_size();
        if block_size != BLOCK_SIZE {
            return Err(CodecError::Engine(format!(
                "engine block size {block_size} is not {BLOCK_SIZE}"
            )));
        }
        Ok(Self { engine, config })
    }

    pub fn config(&self) -> CodecConfig {
        self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Pad `plaintext` and encrypt it under the normalized `secret`
    pub fn encrypt(&self, secret: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let key = normalize(secret);
        let aligned = Zeroizing::new(pad(self.config.padding, plaintext));

        let ciphertext = self.engine.encrypt(key.as_bytes(), &aligned)?;
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CodecError::Engine(format!(
                "engine returned {} bytes, not block-aligned",
                ciphertext.len()
            )));
        }

        debug!("encrypted {} bytes into {}", plaintext.len(), ciphertext.len());
        Ok(ciphertext)
    }

    /// Decrypt `ciphertext` under the normalized `secret` and strip padding
    ///
    /// Empty or misaligned ciphertext is rejected before the engine runs.
    pub fn decrypt(&self, secret: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CodecError::InvalidInput(format!(
                "ciphertext length {} is not a positive multiple of {}",
                ciphertext.len(),
                BLOCK_SIZE
            )));
        }

        let key = normalize(secret);
        let raw = Zeroizing::new(self.engine.decrypt(key.as_bytes(), ciphertext)?);
        let plaintext = unpad_with(
            self.config.padding,
            self.config.validation,
            &raw,
            ciphertext.len(),
        )?;

        debug!("decrypted {} bytes into {}", ciphertext.len(), plaintext.len());
        Ok(plaintext)
    }
}

/// Encrypt with DES-EDE3 in ECB mode
///
/// # Example
///
/// ```rust
/// use tdes_codec::{decrypt, encrypt, PaddingMode};
///
/// let ciphertext = encrypt(PaddingMode::Standard, b"12345678", b"this is a test!")?;
/// assert_eq!(ciphertext.len(), 16);
///
/// let plaintext = decrypt(PaddingMode::Standard, b"12345678", &ciphertext)?;
/// assert_eq!(plaintext, b"this is a test!");
/// # Ok::<(), tdes_codec::CodecError>(())
/// ```
pub fn encrypt(mode: PaddingMode, secret: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    TripleDes::tdes(mode).encrypt(secret, plaintext)
}

/// Decrypt with DES-EDE3 in ECB mode, see [`encrypt`]
pub fn decrypt(mode: PaddingMode, secret: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    TripleDes::tdes(mode).decrypt(secret, ciphertext)
}
