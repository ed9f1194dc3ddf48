//! Command-line interface for `gfaes`.

#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gfaes_core::{decode_block, format_block, format_round, Aes128Key, Block, Cipher, RoundKind};
use tracing_subscriber::EnvFilter;

/// AES-128 from first principles.
#[derive(Parser)]
#[command(
    name = "gfaes",
    version,
    author,
    about = "AES-128 block encryption with round traces"
)]
struct Cli {
    /// Log filter (e.g. `debug`, `gfaes_core=trace`); defaults to `RUST_LOG`, then `warn`.
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block, printing the state after every round.
    Encrypt {
        /// Plaintext block as 32 hex characters; prompted for when omitted.
        #[arg(long, value_name = "HEX")]
        plaintext: Option<String>,
        /// AES-128 key as 32 hex characters; prompted for when omitted.
        #[arg(long, value_name = "HEX")]
        key: Option<String>,
        /// Print only the ciphertext.
        #[arg(long, default_value_t = false)]
        quiet: bool,
    },
    /// Print the 11 round keys derived from a key.
    Schedule {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
    },
    /// Print the generated S-box as a 16x16 table.
    Sbox,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Encrypt {
            plaintext,
            key,
            quiet,
        } => cmd_encrypt(plaintext, key, quiet, &mut input, &mut out),
        Commands::Schedule { key } => cmd_schedule(&key, &mut out),
        Commands::Sbox => cmd_sbox(&mut out),
    }
}

fn init_tracing(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives).context("parse --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn cmd_encrypt(
    plaintext: Option<String>,
    key: Option<String>,
    quiet: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let plaintext = match plaintext {
        Some(text) => text,
        None => prompt(input, out, "Plaintext: ")?,
    };
    let key = match key {
        Some(text) => text,
        None => prompt(input, out, "Key: ")?,
    };

    let block = decode_block("plaintext", &plaintext).context("decode plaintext")?;
    let key = Aes128Key::from_hex(&key).context("decode key")?;

    let cipher = Cipher::shared();
    let round_keys = cipher.expand_key(&key);

    let mut trace = String::new();
    let ciphertext = if quiet {
        cipher.encrypt_block(&block, &round_keys)
    } else {
        let mut render = |round: usize, _kind: RoundKind, state: &Block| {
            trace.push_str(&format_round(round, state));
        };
        cipher.encrypt_block_observed(&block, &round_keys, &mut render)
    };
    tracing::debug!(ciphertext = %hex::encode(ciphertext), "encrypted block");

    if quiet {
        writeln!(out, "{}", hex::encode(ciphertext))?;
    } else {
        write!(out, "{trace}")?;
        writeln!(out, "Ciphertext: {}", hex::encode(ciphertext))?;
    }
    Ok(())
}

fn cmd_schedule(key_hex: &str, out: &mut impl Write) -> Result<()> {
    let key = Aes128Key::from_hex(key_hex).context("decode key")?;
    let round_keys = Cipher::shared().expand_key(&key);
    for (round, round_key) in round_keys.iter().enumerate() {
        writeln!(out, "{round:>2}: {}", format_block(round_key))?;
    }
    Ok(())
}

fn cmd_sbox(out: &mut impl Write) -> Result<()> {
    let sbox = Cipher::shared().sbox();
    for high in 0..16u8 {
        let row: Vec<String> = (0..16u8)
            .map(|low| format!("{:02x}", sbox.apply((high << 4) | low)))
            .collect();
        writeln!(out, "{:x}0: {}", high, row.join(" "))?;
    }
    Ok(())
}

/// Writes `label` and reads the next whitespace-delimited token.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<String> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).context("read stdin")? == 0 {
            bail!("unexpected end of input while reading {}", label.trim_end_matches(": "));
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_owned());
        }
    }
}
