//! Command-line interface for `rijndael-rs`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::Aes;
use rijndael_modes::{cbc, ctr, ecb};

/// AES file-encryption CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "AES-128/192/256 file encryption in ECB, CBC, or CTR mode"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Electronic codebook: no chaining, deterministic per block.
    Ecb,
    /// Cipher block chaining: requires a fresh 16-byte IV per message.
    Cbc,
    /// Counter mode: length-preserving, requires a fresh 16-byte IV.
    Ctr,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random key (and IV) and print them as hex.
    Keygen {
        /// Key size in bits.
        #[arg(long, default_value_t = 128, value_parser = parse_bits)]
        bits: usize,
        /// Optional RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file.
    Encrypt {
        /// Key as hex (32, 48, or 64 hex characters).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Block mode.
        #[arg(long, value_enum)]
        mode: Mode,
        /// IV as 32 hex characters (required for cbc and ctr).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Input plaintext file.
        input: PathBuf,
        /// Output ciphertext file.
        output: PathBuf,
    },
    /// Decrypt a file.
    Decrypt {
        /// Key as hex (32, 48, or 64 hex characters).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Block mode.
        #[arg(long, value_enum)]
        mode: Mode,
        /// IV as 32 hex characters (required for cbc and ctr).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Input ciphertext file.
        input: PathBuf,
        /// Output plaintext file.
        output: PathBuf,
    },
    /// Run a local demo: random key/IV/message, round-trip every mode.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { bits, seed } => cmd_keygen(bits, seed),
        Commands::Encrypt {
            key_hex,
            mode,
            iv_hex,
            input,
            output,
        } => cmd_crypt(&key_hex, mode, iv_hex.as_deref(), &input, &output, true),
        Commands::Decrypt {
            key_hex,
            mode,
            iv_hex,
            input,
            output,
        } => cmd_crypt(&key_hex, mode, iv_hex.as_deref(), &input, &output, false),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn parse_bits(value: &str) -> std::result::Result<usize, String> {
    match value {
        "128" => Ok(128),
        "192" => Ok(192),
        "256" => Ok(256),
        other => Err(format!("key size must be 128, 192, or 256, got {other}")),
    }
}

fn cmd_keygen(bits: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; bits / 8];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    println!("key: {}", hex::encode(key));
    println!("iv:  {}", hex::encode(iv));
    Ok(())
}

fn cmd_crypt(
    key_hex: &str,
    mode: Mode,
    iv_hex: Option<&str>,
    input: &PathBuf,
    output: &PathBuf,
    encrypting: bool,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let iv = parse_iv_hex(mode, iv_hex)?;
    let aes = Aes::new(&key).context("expand key")?;
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;

    let result = match (mode, encrypting) {
        (Mode::Ecb, true) => ecb::encrypt(&aes, &data),
        (Mode::Ecb, false) => ecb::decrypt(&aes, &data),
        (Mode::Cbc, true) => cbc::encrypt(&aes, &iv, &data),
        (Mode::Cbc, false) => cbc::decrypt(&aes, &iv, &data),
        (Mode::Ctr, true) => ctr::encrypt(&aes, &iv, &data),
        (Mode::Ctr, false) => ctr::decrypt(&aes, &iv, &data),
    };
    let transformed = result.context(if encrypting { "encrypt" } else { "decrypt" })?;

    fs::write(output, transformed).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    let mut iv = [0u8; 16];
    let mut message = [0u8; 40];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    rng.fill_bytes(&mut message);
    let aes = Aes::new(&key).context("expand key")?;

    println!("demo key: {}", hex::encode(key));
    println!("demo iv:  {}", hex::encode(iv));
    println!("plaintext: {}", hex::encode(message));

    let ct = ecb::encrypt(&aes, &message)?;
    println!("ecb ciphertext: {}", hex::encode(&ct));
    if ecb::decrypt(&aes, &ct)? != message {
        bail!("ecb roundtrip failed");
    }

    let ct = cbc::encrypt(&aes, &iv, &message)?;
    println!("cbc ciphertext: {}", hex::encode(&ct));
    if cbc::decrypt(&aes, &iv, &ct)? != message {
        bail!("cbc roundtrip failed");
    }

    let ct = ctr::encrypt(&aes, &iv, &message)?;
    println!("ctr ciphertext: {}", hex::encode(&ct));
    if ctr::decrypt(&aes, &iv, &ct)? != message {
        bail!("ctr roundtrip failed");
    }

    println!("all modes round-tripped");
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if !matches!(bytes.len(), 16 | 24 | 32) {
        bail!("key must be 16, 24, or 32 bytes (32, 48, or 64 hex characters)");
    }
    Ok(bytes)
}

fn parse_iv_hex(mode: Mode, iv_hex: Option<&str>) -> Result<Vec<u8>> {
    match (mode, iv_hex) {
        (Mode::Ecb, None) => Ok(Vec::new()),
        (Mode::Ecb, Some(_)) => bail!("ecb mode takes no IV"),
        (_, None) => bail!("cbc and ctr modes require --iv-hex"),
        (_, Some(hex_str)) => {
            let bytes = hex::decode(hex_str.trim()).context("decode IV hex")?;
            if bytes.len() != 16 {
                bail!("IV must be 16 bytes (32 hex characters)");
            }
            Ok(bytes)
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
