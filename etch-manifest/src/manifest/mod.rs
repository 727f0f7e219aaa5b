//! Manifest types and parsing for etch.toml files.

mod file;
mod generator;
mod strategy;
mod template;
mod validate;

use std::str::FromStr;

pub use file::EtchToml;
pub use generator::GeneratorConfig;
use serde::{Deserialize, Serialize};
pub use strategy::Strategy;
pub use template::{
    ClassTemplate, DEFAULT_CLASS_NAME, DEFAULT_DOC, FieldTemplate, MethodTemplate,
};

use crate::{Document, Error, Result};

/// Root manifest for etch.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Marker and strategy selection
    pub generator: GeneratorConfig,

    /// Shape of the generated class
    #[serde(default)]
    pub template: ClassTemplate,
}

impl Manifest {
    /// Create a manifest for a marker with the default template.
    pub fn new(generator: GeneratorConfig) -> Self {
        Self {
            generator,
            template: ClassTemplate::default(),
        }
    }

    /// Replace the class template.
    pub fn template(mut self, template: ClassTemplate) -> Self {
        self.template = template;
        self
    }

    /// Parse and validate a manifest document.
    pub fn parse(doc: Document) -> Result<Self> {
        let manifest: Manifest = doc.deserialize()?;
        manifest.validate(&doc)?;
        Ok(manifest)
    }

    /// Structural checks serde cannot express. Identifiers are checked later,
    /// by the structured emitter.
    pub fn validate(&self, doc: &Document) -> Result<()> {
        validate::validate_marker(&self.generator.marker, doc)?;
        validate::validate_template(&self.template, doc)
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(Document::new("etch.toml", s))
    }
}
