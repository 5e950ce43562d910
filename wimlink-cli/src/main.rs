use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use wimlink_lib::cipher::{XorKey, decrypt_from_hex, encrypt_to_hex};
use wimlink_lib::constants::DEFAULT_KEY;
use wimlink_lib::packet::{build_packet, build_packet_strict, parse_packet};

/// Operator tool for the WIM secure-packet format.
///
/// Encrypts, decrypts, frames and verifies the packets exchanged by the
/// wireless IME terminals. All codec logic lives in `wimlink-lib`; this
/// binary only moves strings in and out.
#[derive(Parser)]
#[command(name = "wimlink", version, about)]
struct Cli {
    /// Shared XOR passphrase (both ends must agree on it)
    #[arg(long, global = true, default_value = DEFAULT_KEY)]
    key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt text to its hex payload form
    Encrypt { text: String },
    /// Decrypt a hex payload back to text
    Decrypt { hex: String },
    /// Build a full packet around a plaintext message
    Build {
        /// 16-character device identifier
        #[arg(long, default_value = "IME_345F45AACBCC")]
        device_id: String,
        /// Single version character
        #[arg(long, default_value = "1")]
        version: String,
        /// Enforce exact field lengths
        #[arg(long)]
        strict: bool,
        text: String,
    },
    /// Parse and verify a received packet
    Parse {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        packet: String,
    },
    /// Round-trip self test with the reference message
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let key = XorKey::new(&cli.key)?;

    match cli.command {
        Command::Encrypt { text } => {
            println!("{}", encrypt_to_hex(&text, &key)?);
        }
        Command::Decrypt { hex } => {
            println!("{}", decrypt_from_hex(&strip_whitespace(&hex), &key)?);
        }
        Command::Build {
            device_id,
            version,
            strict,
            text,
        } => {
            let packet = if strict {
                build_packet_strict(&device_id, &version, &text, &key)?
            } else {
                build_packet(&device_id, &version, &text, &key)?
            };
            println!("{packet}");
        }
        Command::Parse { json, packet } => {
            let cleaned = strip_whitespace(&packet);
            debug!(len = cleaned.len(), "parsing packet");
            let parsed = parse_packet(&cleaned, &key)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("Device ID: {}", parsed.device_id);
                println!("Version:   {}", parsed.version);
                println!("Message:   {}", parsed.message);
                println!("Checksum:  pass");
            }
        }
        Command::Demo => demo(&key)?,
    }

    Ok(())
}

/// Packets pasted from a serial console often carry stray spaces; the
/// reference tool strips them before decoding, so we do too.
fn strip_whitespace(s: &str) -> String {
    s.split_whitespace().collect()
}

fn demo(key: &XorKey) -> Result<()> {
    let message = "Hello World!";
    println!("Plaintext: {message}");

    let encrypted = encrypt_to_hex(message, key)?;
    println!("Encrypted: {encrypted}");

    let decrypted = decrypt_from_hex(&encrypted, key)?;
    println!("Decrypted: {decrypted}");

    let packet = build_packet("IME_345F45AACBCC", "1", message, key)?;
    println!("Packet:    {packet}");

    let parsed = parse_packet(&packet, key)?;
    let verdict = if parsed.message == message { "pass" } else { "FAIL" };
    println!("Round trip: {verdict}");
    Ok(())
}
