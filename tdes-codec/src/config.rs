//! Codec configuration

use crate::padding::PaddingMode;

/// How strictly padding is checked after decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Every padding byte is checked; malformed padding is an error.
    #[default]
    Strict,
    /// Byte-for-byte compatible with older decryptors.
    ///
    /// Under [`PaddingMode::Standard`] only the final byte is read: a value
    /// larger than the ciphertext is treated as 0 and nothing is stripped,
    /// anything else is stripped unchecked. Under [`PaddingMode::None`] the
    /// first byte of the buffer is never removed. Never reports a padding
    /// error, so corrupted ciphertext can decrypt to garbage silently.
    Legacy,
}

/// Settings fixed for the lifetime of a [`crate::TripleDes`] handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    pub padding: PaddingMode,
    pub validation: Validation,
}

impl CodecConfig {
    pub fn new(padding: PaddingMode) -> Self {
        Self {
            padding,
            validation: Validation::default(),
        }
    }

    pub fn with_padding(mut self, padding: PaddingMode) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.padding, PaddingMode::Standard);
        assert_eq!(config.validation, Validation::Strict);
    }

    #[test]
    fn test_builder() {
        let config = CodecConfig::new(PaddingMode::None).with_validation(Validation::Legacy);
        assert_eq!(config.padding, PaddingMode::None);
        assert_eq!(config.validation, Validation::Legacy);

        let config = config.with_padding(PaddingMode::Standard);
        assert_eq!(config.padding, PaddingMode::Standard);
    }
}
