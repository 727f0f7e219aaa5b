//! The declaration feed (`rounds.toml`).
//!
//! ```toml
//! [[rounds]]
//! declarations = [
//!     { marker = "com.bert.annotations.CusAnnotation", namespace = "com.example", element = "MainActivity" },
//! ]
//! ```

use std::{path::Path, str::FromStr};

use etch_ir::Round;
use serde::Deserialize;

use crate::{Document, Error, Result, error::read_file};

/// Discovery rounds, in the order the host would deliver them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoundsFile {
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl RoundsFile {
    /// Open and parse a rounds file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let (path, text) = read_file(path.as_ref())?;
        Document::new(&path.display().to_string(), &text).deserialize()
    }

    /// Total number of declarations across all rounds.
    pub fn declaration_count(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }
}

impl FromStr for RoundsFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Document::new("rounds.toml", s).deserialize()
    }
}
