//! Layout-free pieces of generated code.

/// One piece of generated code, independent of its final indentation.
///
/// Renderers describe a class as a tree of fragments; [`CodeBuilder`]
/// decides the indentation when the tree is written out.
///
/// [`CodeBuilder`]: super::CodeBuilder
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A line of code, without the trailing newline.
    Line(String),
    /// An empty line. Never indented.
    Blank,
    /// `header`, then `body` one level deeper, then `close`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// A `/** ... */` comment, one entry per line of text.
    DocComment(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: "}".to_string(),
        }
    }

    /// Doc comment from free text, split on newlines.
    pub fn doc_comment(text: &str) -> Self {
        Self::DocComment(text.lines().map(str::to_string).collect())
    }
}

/// Something that can describe itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
