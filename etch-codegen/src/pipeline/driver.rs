use etch_core::{OutputArea, write_artifact};
use etch_ir::{GenerationRequest, Round};
use etch_manifest::{DEFAULT_CLASS_NAME, Manifest};
use indexmap::IndexSet;

use super::{RoundFailure, RoundReport, Scanner};
use crate::{EmissionStrategy, GenerateError};

/// What the driver reacts to and what it names the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub marker: String,
    pub class_name: String,
}

impl DriverConfig {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }

    /// Set the simple name of the generated class.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new(&manifest.generator.marker).class_name(&manifest.template.class_name)
    }

    fn scanner(&self) -> Scanner {
        Scanner::new(&self.marker).class_name(&self.class_name)
    }
}

/// Runs one generation pass per round.
///
/// The driver owns its output area for its whole lifetime; nothing else
/// writes to it while a round runs. No state is carried between rounds.
pub struct Driver<O: OutputArea> {
    config: DriverConfig,
    strategy: Box<dyn EmissionStrategy>,
    output: O,
}

impl<O: OutputArea> Driver<O> {
    pub fn new(config: DriverConfig, strategy: Box<dyn EmissionStrategy>, output: O) -> Self {
        Self {
            config,
            strategy,
            output,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Get the output area.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Consume the driver, returning the output area.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Generate one artifact per matching declaration in `round`.
    ///
    /// A round with no declarations is left unclaimed. Otherwise every
    /// request is attempted; a failing request does not stop the others, and
    /// all failures are returned together.
    pub fn run_round(&mut self, round: &Round) -> Result<RoundReport, RoundFailure> {
        let span = tracing::info_span!(
            "round",
            declarations = round.len(),
            strategy = self.strategy.name()
        );
        let _enter = span.enter();

        if round.is_empty() {
            tracing::debug!("round carries no declarations");
            return Ok(RoundReport::unclaimed());
        }

        let scanner = self.config.scanner();
        let mut seen = IndexSet::new();
        let mut written = Vec::new();
        let mut failures = Vec::new();

        for (declaration, request) in scanner.matches(round) {
            let name = request.fully_qualified_name();
            let result = if seen.insert(name.clone()) {
                self.generate(&request)
            } else {
                Err(GenerateError::DuplicateArtifact {
                    name,
                    declaration: Some(declaration.display_name()),
                })
            };

            match result {
                Ok(name) => {
                    tracing::info!(artifact = %name, "generated artifact");
                    written.push(name);
                }
                Err(error) => {
                    tracing::warn!(artifact = error.artifact(), %error, "failed to generate artifact");
                    failures.push(error);
                }
            }
        }

        if seen.is_empty() {
            tracing::debug!(marker = %self.config.marker, "no declaration carries the marker");
        }

        if failures.is_empty() {
            Ok(RoundReport {
                claimed: true,
                written,
            })
        } else {
            Err(RoundFailure {
                claimed: true,
                written,
                failures,
            })
        }
    }

    /// Run every round in sequence, collecting each outcome.
    pub fn run_rounds<'r>(
        &mut self,
        rounds: impl IntoIterator<Item = &'r Round>,
    ) -> Vec<Result<RoundReport, RoundFailure>> {
        rounds
            .into_iter()
            .map(|round| self.run_round(round))
            .collect()
    }

    fn generate(&mut self, request: &GenerationRequest) -> Result<String, GenerateError> {
        let artifact = self.strategy.render(request)?;
        write_artifact(&artifact, &mut self.output)?;
        Ok(artifact.fully_qualified_name)
    }
}
