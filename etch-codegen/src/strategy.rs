use etch_ir::{GenerationRequest, SourceArtifact};

use crate::GenerateError;

/// Turns a generation request into the text of one source artifact.
///
/// Implementations must be deterministic: the same request always renders the
/// same content, and every implementation renders the same logical class for
/// a given request.
pub trait EmissionStrategy {
    /// Short name used in logs ("structured", "raw-text").
    fn name(&self) -> &'static str;

    /// Render the artifact for `request`.
    fn render(&self, request: &GenerationRequest) -> Result<SourceArtifact, GenerateError>;
}

impl<T: EmissionStrategy + ?Sized> EmissionStrategy for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn render(&self, request: &GenerationRequest) -> Result<SourceArtifact, GenerateError> {
        (**self).render(request)
    }
}

impl<T: EmissionStrategy + ?Sized> EmissionStrategy for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn render(&self, request: &GenerationRequest) -> Result<SourceArtifact, GenerateError> {
        (**self).render(request)
    }
}
