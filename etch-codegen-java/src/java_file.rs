//! JavaFile abstraction for structured Java file generation.

use etch_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a Java compilation unit.
///
/// Holds the package declaration and the body fragments; the package line
/// is omitted for the unnamed package.
#[derive(Debug, Clone, Default)]
pub struct JavaFile {
    package: String,
    body: Vec<CodeFragment>,
}

impl JavaFile {
    /// Create a file in `package` (empty for the unnamed package).
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            body: Vec::new(),
        }
    }

    /// Add body fragments.
    pub fn body(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Render the file to a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for JavaFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::with_capacity(self.body.len() + 2);
        if !self.package.is_empty() {
            fragments.push(CodeFragment::line(format!("package {};", self.package)));
            fragments.push(CodeFragment::Blank);
        }
        fragments.extend(self.body.iter().cloned());
        fragments
    }
}
