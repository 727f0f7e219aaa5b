//! Java emission strategies for etch.
//!
//! Two interchangeable [`EmissionStrategy`] implementations render the same
//! class from a [`ClassTemplate`]:
//!
//! - [`StructuredBuilder`] builds a validated class model and renders it
//!   through [`JavaClassRenderer`].
//! - [`RawTextEmitter`] concatenates template fragments directly.
//!
//! Use [`emitter`] to pick one from a configured [`Strategy`].

mod java_file;
mod naming;
mod raw_text;
mod structure_renderer;
mod structured;
mod type_mapper;

pub use etch_codegen::EmissionStrategy;
use etch_manifest::{ClassTemplate, Strategy};
pub use java_file::JavaFile;
pub use naming::JAVA_NAMING;
pub use raw_text::RawTextEmitter;
pub use structure_renderer::JavaClassRenderer;
pub use structured::StructuredBuilder;
pub use type_mapper::JavaTypeMapper;

/// Create the emission strategy selected by `strategy`.
pub fn emitter(strategy: Strategy, template: ClassTemplate) -> Box<dyn EmissionStrategy> {
    match strategy {
        Strategy::Structured => Box::new(StructuredBuilder::new(template)),
        Strategy::RawText => Box::new(RawTextEmitter::new(template)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emitter_selection() {
        assert_eq!(
            emitter(Strategy::Structured, ClassTemplate::default()).name(),
            "structured"
        );
        assert_eq!(
            emitter(Strategy::RawText, ClassTemplate::default()).name(),
            "raw-text"
        );
    }
}
