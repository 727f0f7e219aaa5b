//! Writes code fragments out as indented text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated source text, tracking the current nesting depth.
///
/// # Example
///
/// ```
/// use etch_codegen::builder::CodeBuilder;
///
/// let mut code = CodeBuilder::java();
/// code.line("class A {");
/// code.indented(|body| {
///     body.line("int x;");
/// });
/// code.line("}");
///
/// assert_eq!(code.build(), "class A {\n  int x;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder with two-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Append one line at the current depth.
    pub fn line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Run `f` one level deeper.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        f(self);
        self.depth -= 1;
        self
    }

    /// Append a `/** ... */` comment, one ` * ` line per entry.
    pub fn doc_comment(&mut self, lines: &[String]) -> &mut Self {
        self.line("/**");
        for text in lines {
            match text.as_str() {
                "" => self.line(" *"),
                text => self.line(&format!(" * {}", text)),
            };
        }
        self.line(" */")
    }

    /// Write out every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.fragment(fragment);
        }
        self
    }

    fn fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.line(&s);
            }
            CodeFragment::Blank => {
                self.blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.line(&header);
                self.indented(|inner| body.into_iter().for_each(|f| inner.fragment(f)));
                self.line(&close);
            }
            CodeFragment::DocComment(lines) => {
                self.doc_comment(&lines);
            }
        }
    }

    /// The text written so far.
    pub fn build(self) -> String {
        self.buffer
    }
}
