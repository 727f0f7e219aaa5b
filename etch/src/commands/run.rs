use std::path::PathBuf;

use clap::Args;
use etch_codegen::pipeline::{Driver, DriverConfig};
use etch_codegen_java::emitter;
use etch_core::{FsOutputArea, MemoryOutputArea, OutputArea};
use etch_ir::Round;
use etch_manifest::{EtchToml, RoundsFile, Strategy};
use eyre::{Result, bail};

use super::OrExit;
use crate::reports::{PreviewFile, Report, RoundSummary, RunReport, RunResult, TerminalOutput};

#[derive(Args)]
pub struct RunCommand {
    /// Path to etch.toml (defaults to ./etch.toml)
    #[arg(short, long, default_value = "etch.toml")]
    pub config: PathBuf,

    /// Path to the declaration feed (defaults to ./rounds.toml)
    #[arg(short, long, default_value = "rounds.toml")]
    pub rounds: PathBuf,

    /// Generated-sources directory
    #[arg(short, long, default_value = "generated")]
    pub output: PathBuf,

    /// Emission strategy (overrides etch.toml setting)
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl RunCommand {
    /// Run the run command
    pub fn run(&self) -> Result<()> {
        let etch_toml = EtchToml::open(&self.config).or_exit();
        let rounds = RoundsFile::open(&self.rounds).or_exit();
        let manifest = etch_toml.manifest();

        // Use CLI flag if provided, otherwise use manifest setting
        let strategy = self.strategy.unwrap_or(manifest.generator.strategy);
        tracing::debug!(
            %strategy,
            rounds = rounds.rounds.len(),
            declarations = rounds.declaration_count(),
            "starting generation"
        );

        let config = DriverConfig::from_manifest(manifest);
        let strategy_impl = emitter(strategy, manifest.template.clone());

        let report = if self.dry_run {
            let mut driver = Driver::new(config, strategy_impl, MemoryOutputArea::new());
            let summaries = run_all(&mut driver, &rounds.rounds);
            let files = driver
                .into_output()
                .into_files()
                .into_iter()
                .map(|(name, content)| PreviewFile { name, content })
                .collect();
            RunReport {
                strategy,
                rounds: summaries,
                result: RunResult::Preview { files },
            }
        } else {
            let mut driver = Driver::new(config, strategy_impl, FsOutputArea::new(&self.output));
            RunReport {
                strategy,
                rounds: run_all(&mut driver, &rounds.rounds),
                result: RunResult::Written {
                    output_dir: self.output.clone(),
                },
            }
        };

        report.render(&mut TerminalOutput);

        let failed = report.failure_count();
        if failed > 0 {
            bail!("{} artifact(s) failed to generate", failed);
        }
        Ok(())
    }
}

fn run_all<O: OutputArea>(driver: &mut Driver<O>, rounds: &[Round]) -> Vec<RoundSummary> {
    driver
        .run_rounds(rounds)
        .into_iter()
        .map(RoundSummary::from_outcome)
        .collect()
}
