//! GenoLab command-line entry point.

mod cli;
mod report;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use genolab_clinical::AnalysisPipeline;
use genolab_common::entities::MutationRequest;
use genolab_common::lab_config::LabConfig;
use genolab_seq::{translate, validate};

use crate::cli::{Cli, Command, OutputFormat};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("genolab=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = LabConfig::load(cli.config.as_deref())?;
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Analyze { sequence, position, base, seed, format } => {
            let mut pipeline = AnalysisPipeline::from_config(&config)?;
            if seed.is_some() {
                pipeline = pipeline.with_attention_seed(seed);
            }

            let request = MutationRequest {
                sequence: sequence.unwrap_or_else(|| config.defaults.sequence.clone()),
                position,
                base,
            };
            let report = pipeline.run(&request)?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print!("{}", crate::report::render_text(&report)),
            }
        }
        Command::Validate { sequence } => {
            let seq = validate(&sequence)?;
            println!("{seq}");
        }
        Command::Translate { sequence } => {
            let seq = validate(&sequence)?;
            println!("{}", translate(&seq));
        }
    }

    Ok(())
}
