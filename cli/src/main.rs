//! Shadow Goose CLI - staging deployment smoke checks

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use shadowgoose_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
