//! Emission strategy selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How generated classes are turned into source text.
///
/// Chosen once per generator instance, never per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Build a class model first, then render it.
    #[default]
    Structured,
    /// Concatenate template fragments directly.
    RawText,
}

impl Strategy {
    /// Returns the strategy identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Structured => "structured",
            Strategy::RawText => "raw-text",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "structured" | "ast" => Ok(Strategy::Structured),
            "raw-text" | "raw_text" | "rawtext" | "raw" => Ok(Strategy::RawText),
            _ => Err(format!(
                "unknown strategy '{}', expected 'structured' or 'raw-text'",
                s
            )),
        }
    }
}
