use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors are boxed: the diagnostic variants carry a copy of the source text.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A configuration file being parsed, kept around to point diagnostics at it.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    name: &'a str,
    text: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    fn source(&self) -> NamedSource<String> {
        NamedSource::new(self.name, self.text.to_owned())
    }

    /// Deserialize the whole document, mapping TOML failures to [`Error::Syntax`].
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        toml::from_str(self.text).map_err(|source| {
            Box::new(Error::Syntax {
                span: source.span().map(SourceSpan::from),
                file: self.name.to_owned(),
                src: self.source(),
                source,
            })
        })
    }

    pub fn invalid(&self, message: impl Into<String>, at: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Invalid {
            message: message.into(),
            at,
            src: self.source(),
        })
    }

    pub fn duplicate(
        &self,
        kind: &str,
        name: &str,
        (first, again): (SourceSpan, SourceSpan),
    ) -> Box<Error> {
        Box::new(Error::DuplicateMember {
            kind: kind.to_owned(),
            name: name.to_owned(),
            first,
            again,
            src: self.source(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read '{}'", path.display())]
    #[diagnostic(help("'etch init' writes a starter etch.toml and rounds.toml"))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{file}' is not valid TOML for this file")]
    #[diagnostic(code(etch::syntax))]
    Syntax {
        file: String,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source_code]
        src: NamedSource<String>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(etch::invalid_config))]
    Invalid {
        message: String,
        #[label]
        at: Option<SourceSpan>,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("duplicate {kind} '{name}' in template")]
    #[diagnostic(
        code(etch::duplicate_member),
        help("every {kind} of the generated class needs a distinct name")
    )]
    DuplicateMember {
        kind: String,
        name: String,
        #[label("first {kind}")]
        first: SourceSpan,
        #[label("same name again")]
        again: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },
}

/// Read a whole file, reporting the path on failure.
pub(crate) fn read_file(path: impl Into<PathBuf>) -> Result<(PathBuf, String)> {
    let path = path.into();
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok((path, text)),
        Err(source) => Err(Box::new(Error::Read { path, source })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_carries_its_message() {
        let doc = Document::new("etch.toml", "[generator]\n");
        let err = doc.invalid("marker must not be empty", None);
        assert_eq!(err.to_string(), "marker must not be empty");
        assert_eq!(doc.name(), "etch.toml");
    }

    #[test]
    fn duplicate_names_kind_and_member() {
        let doc = Document::new("etch.toml", "");
        let err = doc.duplicate("field", "age", ((0, 1).into(), (2, 1).into()));
        assert_eq!(err.to_string(), "duplicate field 'age' in template");
    }

    #[test]
    fn syntax_error_points_at_the_file() {
        let doc = Document::new("rounds.toml", "[[rounds]\n");
        let err = doc.deserialize::<toml::Table>().unwrap_err();
        assert!(matches!(*err, Error::Syntax { .. }));
        assert!(err.to_string().contains("rounds.toml"));
    }

    #[test]
    fn read_missing_file() {
        let err = read_file("/definitely/not/here/etch.toml").unwrap_err();
        assert!(err.to_string().starts_with("cannot read"));
    }
}
