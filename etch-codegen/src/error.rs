use etch_core::WriteError;
use miette::Diagnostic;
use thiserror::Error;

/// Failure to produce one artifact.
///
/// Each variant is scoped to a single generation request; the driver collects
/// them per round instead of aborting.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(code(etch::write_error))]
    Write(#[from] WriteError),

    #[error("duplicate artifact '{name}'")]
    #[diagnostic(
        code(etch::duplicate_artifact),
        help("another declaration in this round already produced '{name}'")
    )]
    DuplicateArtifact {
        /// Fully-qualified name that was requested twice.
        name: String,
        /// The declaration behind the rejected request, when known.
        declaration: Option<String>,
    },

    #[error("invalid {context} '{name}' in '{artifact}': {reason}")]
    #[diagnostic(code(etch::invalid_identifier))]
    InvalidIdentifier {
        /// Fully-qualified name of the artifact being built.
        artifact: String,
        /// What the identifier names: "namespace", "class", "field", ...
        context: &'static str,
        name: String,
        reason: &'static str,
    },
}

impl GenerateError {
    /// Fully-qualified name of the artifact this error belongs to.
    pub fn artifact(&self) -> &str {
        match self {
            Self::Write(e) => &e.name,
            Self::DuplicateArtifact { name, .. } => name,
            Self::InvalidIdentifier { artifact, .. } => artifact,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_write_error_is_transparent() {
        let err = GenerateError::from(WriteError {
            name: "com.example.AutoClazz".into(),
            source: io::Error::other("disk full"),
        });

        assert_eq!(err.to_string(), "failed to write source file 'com.example.AutoClazz'");
        assert_eq!(err.artifact(), "com.example.AutoClazz");
        assert!(matches!(err, GenerateError::Write(_)));
    }

    #[test]
    fn test_invalid_identifier_message() {
        let err = GenerateError::InvalidIdentifier {
            artifact: "com.1bad.AutoClazz".into(),
            context: "namespace segment",
            name: "1bad".into(),
            reason: "identifier must start with a letter, '_' or '$'",
        };

        assert_eq!(
            err.to_string(),
            "invalid namespace segment '1bad' in 'com.1bad.AutoClazz': identifier must start with a letter, '_' or '$'"
        );
        assert_eq!(err.artifact(), "com.1bad.AutoClazz");
    }

    #[test]
    fn test_duplicate_artifact_code() {
        let err = GenerateError::DuplicateArtifact {
            name: "a.B".into(),
            declaration: None,
        };
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("etch::duplicate_artifact")
        );
    }
}
