//! Check command report data structures.

use std::path::PathBuf;

use etch_manifest::Strategy;

use super::output::{Line, Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub marker: String,
    pub strategy: Strategy,
    /// Simple name of the generated class.
    pub class_name: String,
    pub field_count: usize,
    pub method_count: usize,
    /// Problems found while building the class model.
    pub errors: Vec<String>,
    /// Declaration feed, when one was checked.
    pub rounds: Option<RoundsInfo>,
}

/// Summary of a checked rounds file.
#[derive(Debug)]
pub struct RoundsInfo {
    pub path: PathBuf,
    pub rounds: usize,
    pub declarations: usize,
    /// Declarations carrying the configured marker.
    pub matching: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.emit(Line::Error(error));
        }
        if !self.is_valid() {
            return;
        }

        out.emit(Line::Text(&format!("✓ {} is valid", self.config_path.display())));
        out.emit(Line::Blank);
        out.emit(Line::Field("Marker", &self.marker));
        out.emit(Line::Field("Strategy", self.strategy.as_str()));
        let class = format!(
            "{} ({} field(s), {} method(s))",
            self.class_name, self.field_count, self.method_count
        );
        out.emit(Line::Field("Class", &class));

        if let Some(rounds) = &self.rounds {
            let feed = format!(
                "{} round(s), {} declaration(s), {} matching in {}",
                rounds.rounds,
                rounds.declarations,
                rounds.matching,
                rounds.path.display()
            );
            out.emit(Line::Field("Rounds", &feed));
        }
    }
}
