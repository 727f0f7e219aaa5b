//! Post-parse validation for etch.toml.

use std::collections::HashSet;

use miette::SourceSpan;

use super::ClassTemplate;
use crate::{Document, Result};

pub(crate) fn validate_marker(marker: &str, doc: &Document) -> Result<()> {
    if marker.trim().is_empty() {
        return Err(doc.invalid(
            "generator.marker must not be empty",
            find_key_span(doc.text(), "marker"),
        ));
    }
    if marker.chars().any(char::is_whitespace) {
        return Err(doc.invalid(
            format!("marker '{}' must not contain whitespace", marker),
            find_quoted_spans(doc.text(), marker).first().copied(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_template(template: &ClassTemplate, doc: &Document) -> Result<()> {
    if template.class_name.trim().is_empty() {
        return Err(doc.invalid(
            "template.class_name must not be empty",
            find_key_span(doc.text(), "class_name"),
        ));
    }

    check_unique("field", template.fields.iter().map(|f| f.name.as_str()), doc)?;
    check_unique(
        "method",
        template.methods.iter().map(|m| m.name.as_str()),
        doc,
    )?;
    Ok(())
}

fn check_unique<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a str>,
    doc: &Document,
) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            let spans = find_quoted_spans(doc.text(), name);
            let first = spans.first().copied().unwrap_or_else(|| (0, 0).into());
            let second = spans.get(1).copied().unwrap_or(first);
            return Err(doc.duplicate(kind, name, (first, second)));
        }
    }
    Ok(())
}

/// Find the span of a `key =` assignment.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    for pattern in [format!("{} =", key), format!("{}=", key)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos, key.len())));
        }
    }
    None
}

/// Find every `"value"` occurrence, returning spans that exclude the quotes.
pub(crate) fn find_quoted_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let needle = format!("\"{}\"", value);
    src.match_indices(&needle)
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
        .collect()
}
