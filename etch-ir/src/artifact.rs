//! Generation requests and the artifacts produced from them.

/// What to generate for one matching declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenerationRequest {
    /// Dot-separated target namespace.
    pub namespace: String,
    /// Simple name of the class to generate.
    pub desired_name: String,
}

impl GenerationRequest {
    pub fn new(namespace: impl Into<String>, desired_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            desired_name: desired_name.into(),
        }
    }

    /// `<namespace>.<desired_name>`, or just the name in the unnamed package.
    pub fn fully_qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.desired_name.clone()
        } else {
            format!("{}.{}", self.namespace, self.desired_name)
        }
    }
}

/// A generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArtifact {
    pub fully_qualified_name: String,
    pub content: String,
}

impl SourceArtifact {
    pub fn new(fully_qualified_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
            content: content.into(),
        }
    }

    /// Artifact named after the request it was rendered from.
    pub fn for_request(request: &GenerationRequest, content: impl Into<String>) -> Self {
        Self::new(request.fully_qualified_name(), content)
    }
}
