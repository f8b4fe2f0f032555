//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;
use crate::probe::UreqFetcher;

/// Shadow Goose staging deployment smoke checks
#[derive(Parser)]
#[command(name = "shadowgoose", version, propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress section headers and other decoration
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the deployment smoke checks (default when no command is given)
    Verify,

    /// Fuller deployment report, including environment analysis
    Diagnose,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command. A bare invocation runs `verify`.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written or serialized. Probe
    /// failures are never errors; they render as fallback text and the
    /// process still exits 0.
    pub fn run(self) -> Result<()> {
        let Cli { json, quiet, no_color, command } = self;
        let ctx = OutputContext::new(no_color, quiet);
        let fetcher = UreqFetcher::new();
        match command.unwrap_or(Command::Verify) {
            Command::Verify => commands::verify::run(&ctx, &fetcher, json),
            Command::Diagnose => commands::diagnose::run(&ctx, &fetcher, json),
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
        }
    }
}
