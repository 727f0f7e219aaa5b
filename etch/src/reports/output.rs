use std::fmt;

/// One line of command output.
///
/// Reports build these; an [`Output`] decides where each one goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Heading(&'a str),
    Field(&'a str, &'a str),
    Note(&'a str),
    Added(&'a str),
    Failed { name: &'a str, cause: &'a str },
    Warning(&'a str),
    Error(&'a str),
    /// `── label ──` separator ahead of a preview block.
    Rule(&'a str),
    Text(&'a str),
    Blank,
}

impl Line<'_> {
    /// Problems go to stderr so stdout stays clean for previews.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Line::Failed { .. } | Line::Warning(_) | Line::Error(_))
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Heading(title) => write!(f, "{title}:"),
            Line::Field(key, value) => write!(f, "{key}: {value}"),
            Line::Note(text) => write!(f, "  - {text}"),
            Line::Added(text) => write!(f, "  + {text}"),
            Line::Failed { name, cause } => write!(f, "  ✗ {name}: {cause}"),
            Line::Warning(text) => write!(f, "warning: {text}"),
            Line::Error(text) => write!(f, "error: {text}"),
            Line::Rule(label) => write!(f, "── {label} ──"),
            Line::Text(text) => f.write_str(text),
            Line::Blank => Ok(()),
        }
    }
}

pub trait Output {
    fn emit(&mut self, line: Line<'_>);
}

/// Something a command can show the user.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

#[derive(Debug, Default)]
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn emit(&mut self, line: Line<'_>) {
        if line.is_diagnostic() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Collects rendered lines for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn emit(&mut self, line: Line<'_>) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_are_routed_apart() {
        assert!(Line::Error("x").is_diagnostic());
        assert!(Line::Failed { name: "a", cause: "b" }.is_diagnostic());
        assert!(!Line::Added("a").is_diagnostic());
        assert!(!Line::Rule("Summary").is_diagnostic());
    }

    #[test]
    fn blank_renders_empty() {
        let mut out = RecordingOutput::default();
        out.emit(Line::Blank);
        out.emit(Line::Field("Marker", "a.B"));
        assert_eq!(out.lines, vec!["", "Marker: a.B"]);
    }
}
