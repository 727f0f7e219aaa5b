use miette::Diagnostic;
use thiserror::Error;

use crate::GenerateError;

/// Outcome of a round in which every request succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundReport {
    /// False only when the round carried no declarations at all.
    pub claimed: bool,
    /// Fully-qualified names written, in request order.
    pub written: Vec<String>,
}

impl RoundReport {
    /// Report for a round that carried nothing.
    pub fn unclaimed() -> Self {
        Self::default()
    }

    pub fn is_unmatched(&self) -> bool {
        self.claimed && self.written.is_empty()
    }
}

/// One or more requests in a round failed.
///
/// Artifacts written by the other requests remain written.
#[derive(Debug, Error, Diagnostic)]
#[error("{} artifact(s) failed to generate", .failures.len())]
#[diagnostic(code(etch::round_failed))]
pub struct RoundFailure {
    pub claimed: bool,
    /// Fully-qualified names written before and after the failures.
    pub written: Vec<String>,
    #[related]
    pub failures: Vec<GenerateError>,
}

impl RoundFailure {
    /// Names of the artifacts that failed, in request order.
    pub fn failed_names(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(GenerateError::artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclaimed_report() {
        let report = RoundReport::unclaimed();
        assert!(!report.claimed);
        assert!(!report.is_unmatched());
    }

    #[test]
    fn test_failure_message() {
        let failure = RoundFailure {
            claimed: true,
            written: vec!["a.AutoClazz".into()],
            failures: vec![GenerateError::DuplicateArtifact {
                name: "a.AutoClazz".into(),
                declaration: None,
            }],
        };

        assert_eq!(failure.to_string(), "1 artifact(s) failed to generate");
        assert_eq!(failure.failed_names().collect::<Vec<_>>(), vec!["a.AutoClazz"]);
        assert_eq!(failure.related().map(|r| r.count()), Some(1));
    }
}
