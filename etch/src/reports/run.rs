//! Run command report data structures.

use std::{error::Error, path::PathBuf};

use etch_codegen::pipeline::{RoundFailure, RoundReport};
use etch_manifest::Strategy;

use super::output::{Line, Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct RunReport {
    /// Strategy used for every round.
    pub strategy: Strategy,
    /// One summary per round, in feed order.
    pub rounds: Vec<RoundSummary>,
    /// Where the artifacts went.
    pub result: RunResult,
}

/// Destination of the generated artifacts.
#[derive(Debug)]
pub enum RunResult {
    /// Files were written to disk.
    Written { output_dir: PathBuf },
    /// Dry-run preview.
    Preview { files: Vec<PreviewFile> },
}

/// An artifact rendered in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Fully-qualified name.
    pub name: String,
    /// Generated source.
    pub content: String,
}

/// Outcome of one round.
#[derive(Debug, Default)]
pub struct RoundSummary {
    pub claimed: bool,
    pub written: Vec<String>,
    pub failures: Vec<FailedArtifact>,
}

/// An artifact that could not be generated.
#[derive(Debug)]
pub struct FailedArtifact {
    pub name: String,
    /// The error and its sources, joined with ": ".
    pub cause: String,
}

impl RoundSummary {
    pub fn from_outcome(outcome: Result<RoundReport, RoundFailure>) -> Self {
        match outcome {
            Ok(report) => Self {
                claimed: report.claimed,
                written: report.written,
                failures: Vec::new(),
            },
            Err(failure) => Self {
                claimed: failure.claimed,
                written: failure.written,
                failures: failure
                    .failures
                    .iter()
                    .map(|error| FailedArtifact {
                        name: error.artifact().to_string(),
                        cause: error_chain(error),
                    })
                    .collect(),
            },
        }
    }
}

impl RunReport {
    /// Total number of artifacts generated across all rounds.
    pub fn written_count(&self) -> usize {
        self.rounds.iter().map(|r| r.written.len()).sum()
    }

    /// Total number of failed artifacts across all rounds.
    pub fn failure_count(&self) -> usize {
        self.rounds.iter().map(|r| r.failures.len()).sum()
    }
}

impl Report for RunReport {
    fn render(&self, out: &mut dyn Output) {
        if let RunResult::Preview { files } = &self.result {
            for file in files {
                out.emit(Line::Rule(&file.name));
                out.emit(Line::Text(&file.content));
            }
        }

        for (i, round) in self.rounds.iter().enumerate() {
            self.render_round(out, i + 1, round);
        }

        out.emit(Line::Rule("Summary"));
        out.emit(Line::Field("Strategy", self.strategy.as_str()));
        match &self.result {
            RunResult::Written { output_dir } => {
                let generated =
                    format!("{} file(s) in {}", self.written_count(), output_dir.display());
                out.emit(Line::Field("Generated", &generated));
            }
            RunResult::Preview { files } => {
                out.emit(Line::Text(&format!("{} file(s) would be generated", files.len())));
            }
        }
        if self.failure_count() > 0 {
            out.emit(Line::Warning(&format!("{} artifact(s) failed", self.failure_count())));
        }
    }
}

impl RunReport {
    fn render_round(&self, out: &mut dyn Output, number: usize, round: &RoundSummary) {
        out.emit(Line::Heading(&format!("Round {number}")));
        if !round.claimed {
            out.emit(Line::Note("no declarations"));
        } else if round.written.is_empty() && round.failures.is_empty() {
            out.emit(Line::Note("no declaration carries the marker"));
        }
        for name in &round.written {
            out.emit(Line::Added(name));
        }
        for failed in &round.failures {
            out.emit(Line::Failed {
                name: &failed.name,
                cause: &failed.cause,
            });
        }
    }
}

fn error_chain(error: &dyn Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
