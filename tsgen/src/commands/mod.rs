mod check;
mod completions;
mod render;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use render::RenderCommand;
use tracing_subscriber::EnvFilter;

/// Extension trait for exiting on document errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tsgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tsgen")]
#[command(version)]
#[command(about = "Render TypeScript source from element documents")]
pub(crate) struct Cli {
    /// Log at debug level (overrides TSGEN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// Log to stderr so rendered code on stdout stays clean.
    pub fn init_tracing(&self) {
        let filter = if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_env("TSGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the document's elements to TypeScript
    Render(RenderCommand),

    /// Validate a document without rendering it
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
