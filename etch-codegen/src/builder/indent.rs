//! Indentation unit used by [`CodeBuilder`](super::CodeBuilder).

/// The text inserted once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Two spaces, the layout annotation processors conventionally emit.
    pub const JAVA: Self = Self("  ");

    /// Four spaces.
    pub const WIDE: Self = Self("    ");

    pub const TAB: Self = Self("\t");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
