//! Declarations surfaced by the host toolchain.

use serde::{Deserialize, Serialize};

/// A declaration in the host program tagged with a marker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MarkedDeclaration {
    /// Qualified name of the marker, e.g. `com.bert.annotations.CusAnnotation`.
    pub marker: String,
    /// Dot-separated enclosing namespace. Empty for the unnamed package.
    #[serde(default)]
    pub namespace: String,
    /// Simple name of the tagged element, only used for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl MarkedDeclaration {
    pub fn new(marker: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            namespace: namespace.into(),
            element: None,
        }
    }

    /// Attach the simple element name.
    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Name used when reporting on this declaration.
    pub fn display_name(&self) -> String {
        match (&self.element, self.namespace.is_empty()) {
            (Some(element), false) => format!("{}.{}", self.namespace, element),
            (Some(element), true) => element.clone(),
            (None, false) => self.namespace.clone(),
            (None, true) => "<unnamed package>".to_string(),
        }
    }
}

/// One discovery batch of marked declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Round {
    #[serde(default)]
    pub declarations: Vec<MarkedDeclaration>,
}

impl Round {
    pub fn new(declarations: impl IntoIterator<Item = MarkedDeclaration>) -> Self {
        Self {
            declarations: declarations.into_iter().collect(),
        }
    }

    /// A round with no declarations at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkedDeclaration> {
        self.declarations.iter()
    }
}

impl FromIterator<MarkedDeclaration> for Round {
    fn from_iter<I: IntoIterator<Item = MarkedDeclaration>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let decl = MarkedDeclaration::new("a.Marker", "com.example").element("Main");
        assert_eq!(decl.display_name(), "com.example.Main");

        let decl = MarkedDeclaration::new("a.Marker", "").element("Main");
        assert_eq!(decl.display_name(), "Main");

        let decl = MarkedDeclaration::new("a.Marker", "com.example");
        assert_eq!(decl.display_name(), "com.example");
    }

    #[test]
    fn test_round_deserialize_defaults() {
        let round: Round = toml::from_str(
            r#"
            declarations = [
                { marker = "a.Marker", namespace = "com.example" },
                { marker = "a.Marker" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(round.len(), 2);
        assert_eq!(round.declarations[1].namespace, "");
        assert!(round.declarations[1].element.is_none());
    }

    #[test]
    fn test_empty_round() {
        assert!(Round::empty().is_empty());
        let round: Round = vec![MarkedDeclaration::new("a.Marker", "x")]
            .into_iter()
            .collect();
        assert!(!round.is_empty());
    }
}
