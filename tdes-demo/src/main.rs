//! Triple-DES demonstration
//!
//! Encrypts a plaintext under a secret, decrypts it again and checks the
//! result matches. Set `RUST_LOG=debug` to see the codec's steps.

use clap::{Parser, ValueEnum};
use log::info;
use tdes_codec::{CodecConfig, PaddingMode, TdesEcb, TripleDes, Validation};

/// Command-line arguments for the triple-DES demo.
#[derive(Parser, Debug)]
struct Cli {
    /// Secret the cipher key is derived from.
    #[arg(short, long, default_value = "12345678", help = "Secret for the cipher")]
    secret: String,

    /// Text to encrypt and decrypt.
    #[arg(short = 't', long, default_value = "this is a test!", help = "Plaintext to round-trip")]
    plaintext: String,

    /// Padding scheme.
    #[arg(short, long, value_enum, default_value_t = PaddingArg::Standard, help = "Padding scheme (standard/none)")]
    padding: PaddingArg,

    /// Check only the last padding byte, like older decryptors did.
    #[arg(long, help = "Use legacy (unvalidated) padding removal")]
    legacy: bool,
}

/// Padding scheme selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum PaddingArg {
    /// Pad value equals pad length.
    Standard,
    /// Zero-fill.
    None,
}

impl From<PaddingArg> for PaddingMode {
    fn from(arg: PaddingArg) -> Self {
        match arg {
            PaddingArg::Standard => PaddingMode::Standard,
            PaddingArg::None => PaddingMode::None,
        }
    }
}

impl Cli {
    fn config(&self) -> CodecConfig {
        let validation = if self.legacy {
            Validation::Legacy
        } else {
            Validation::Strict
        };
        CodecConfig::new(self.padding.into()).with_validation(validation)
    }
}

/// Main entry point for the triple-DES demo.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli: Cli = Cli::parse();
    let codec = TripleDes::new(TdesEcb::new(), cli.config())?;
    info!("using {:?}", codec.config());

    let ciphertext = codec.encrypt(cli.secret.as_bytes(), cli.plaintext.as_bytes())?;
    println!("Ciphertext: {}", hex::encode(&ciphertext));

    let decrypted = codec.decrypt(cli.secret.as_bytes(), &ciphertext)?;
    println!("Decrypted:  {}", String::from_utf8_lossy(&decrypted));

    if decrypted != cli.plaintext.as_bytes() {
        return Err("decrypted text does not match the plaintext".into());
    }

    println!("Round trip completed successfully!");
    Ok(())
}
