//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Generate release notes and changelogs from a repository's commit history.
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a default relnotes.toml in the current directory
    Init(commands::init::InitArgs),

    /// Generate release notes and a changelog for a repository
    Generate(commands::generate::GenerateArgs),

    /// Serve the HTTP API
    Serve(commands::serve::ServeArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => commands::init::run(&args),
            Commands::Generate(args) => commands::generate::run(args),
            Commands::Serve(args) => commands::serve::run(args),
        }
    }
}
