//! CLI parse: clap types for merkle-commit. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// merkle-commit - Merkle root commitments and inclusion proofs
#[derive(Parser)]
#[command(name = "merkle-commit")]
#[command(about = "Commit to a list of strings with a Merkle root, prove and verify membership")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Commit to a built-in sample text and prove one of its words
    Demo {
        /// Word to prove (prompted for when omitted)
        #[arg(long)]
        word: Option<String>,
    },
    /// Print the Merkle root of the items read from a file or stdin
    Root {
        /// Input file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print an inclusion proof for one item as JSON
    Prove {
        /// Item to prove
        #[arg(long)]
        item: String,
        /// Input file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Verify an inclusion proof against a root
    Verify {
        /// Item claimed to be committed
        #[arg(long)]
        item: String,
        /// Root digest (64 hex characters)
        #[arg(long)]
        root: String,
        /// Proof JSON as printed by `prove`
        #[arg(long)]
        proof: String,
    },
    /// Print the effective configuration
    ShowConfig,
}
