use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use ciphercraft::engine::AlgorithmId;

#[derive(Parser)]
#[command(
    name = "ciphercraft",
    version,
    about = "Classical cipher training engine",
    after_help = "\
Algorithms and their key parameter:
  caesar          integer shift, e.g. 3 or -5
  monoalphabetic  26 unique letters, e.g. QWERTYUIOPASDFGHJKLZXCVBNM
  playfair        keyword, e.g. SECRET
  vigenere        keyword, e.g. SECRET
  transposition   column order, e.g. \"5 4 2 3 1 7 6\"
  railfence       number of rails (at least 2)

Environment variables (serve):
  CIPHERCRAFT_CONFIG      Path to a TOML config file
  CIPHERCRAFT_BIND        Listen address (default 127.0.0.1:8000)
  CIPHERCRAFT_SHOW_STEPS  Attach step descriptions to every result
  CIPHERCRAFT_GROUP_SIZE  Split transposition ciphertext into blocks"
)]
pub(crate) struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Encrypt text
    Encode(TransformArgs),

    /// Decrypt text
    Decode(TransformArgs),

    /// Serve the HTTP form endpoint
    Serve {
        /// Listen address (overrides CIPHERCRAFT_BIND and the config file)
        #[arg(short, long)]
        bind: Option<SocketAddr>,

        /// Attach step descriptions to every result
        #[arg(long)]
        steps: bool,

        /// Split transposition ciphertext into blocks of N letters
        #[arg(long, value_name = "N")]
        group: Option<usize>,
    },
}

#[derive(Args)]
pub(crate) struct TransformArgs {
    /// Cipher to use
    #[arg(short, long)]
    pub algorithm: AlgorithmId,

    /// Key parameter for the chosen cipher
    #[arg(short, long, allow_hyphen_values = true)]
    pub key: String,

    /// Print the step descriptions to stderr
    #[arg(long)]
    pub steps: bool,

    /// Split transposition ciphertext into blocks of N letters
    #[arg(long, value_name = "N")]
    pub group: Option<usize>,

    /// Text to transform (read from stdin when omitted)
    pub text: Option<String>,
}
