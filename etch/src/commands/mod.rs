mod check;
mod completions;
mod init;
mod run;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use run::RunCommand;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Config errors carry source spans, so print them through miette and stop.
pub(crate) trait OrExit<T> {
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for etch_manifest::Result<T> {
    fn or_exit(self) -> T {
        self.unwrap_or_else(|error| {
            eprintln!("{:?}", miette::Report::new(*error));
            std::process::exit(1)
        })
    }
}

#[derive(Parser)]
#[command(name = "etch")]
#[command(version)]
#[command(about = "Generate Java sources for marker-annotated declarations")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log pipeline activity at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_logging(self.verbose);

        match &self.command {
            Commands::Run(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sources for every round in rounds.toml
    Run(RunCommand),

    /// Validate etch.toml without generating code
    Check(CheckCommand),

    /// Write a starter etch.toml and rounds.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
