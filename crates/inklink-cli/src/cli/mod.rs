//! CLI for inklink.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use inklink_core::config;

use commands::{run_completions, run_decode, run_diagram, run_url};

/// Top-level CLI. With no subcommand, prints the render URL.
#[derive(Debug, Parser)]
#[command(name = "inklink")]
#[command(about = "inklink: mermaid.ink render URL for the embedded class diagram", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the render URL of the class diagram (default).
    Url,

    /// Print the embedded diagram source verbatim.
    Diagram,

    /// Decode a render URL or bare payload back to diagram text.
    Decode {
        /// Full render URL or the URL-safe base64 payload alone.
        input: String,
    },

    /// Write a shell completion script to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command.unwrap_or(CliCommand::Url) {
            CliCommand::Url => {
                let cfg = config::load()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_url(&cfg)?;
            }
            CliCommand::Diagram => run_diagram()?,
            CliCommand::Decode { input } => {
                let cfg = config::load()?;
                run_decode(&cfg, &input)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
