//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "genolab", version, about = "Interpret a DNA point mutation")]
pub struct Cli {
    /// Config file (TOML, YAML or JSON). Defaults to $GENOLAB_CONFIG or ./genolab.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply a substitution and print the clinical report
    Analyze {
        /// Raw DNA; the configured default sequence is used when omitted
        #[arg(short, long)]
        sequence: Option<String>,

        /// 0-based position to mutate
        #[arg(short, long)]
        position: usize,

        /// Replacement nucleotide (A, T, C or G)
        #[arg(short, long)]
        base: char,

        /// Seed for the attention weights (overrides the config)
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Normalise and validate a sequence
    Validate {
        sequence: String,
    },

    /// Translate a sequence to protein
    Translate {
        sequence: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
