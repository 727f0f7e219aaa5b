//! Intermediate representation types for the etch source generator.
//!
//! These are the values that flow through one generation pass:
//!
//! ```text
//! host feed → Round (MarkedDeclaration*) → GenerationRequest → SourceArtifact → output area
//! ```
//!
//! Every type here is a plain value. Nothing outlives the pass that created it.

mod artifact;
mod declaration;
mod modifier;

pub use artifact::{GenerationRequest, SourceArtifact};
pub use declaration::{MarkedDeclaration, Round};
pub use modifier::Modifier;
