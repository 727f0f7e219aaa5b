//! Emission by direct string concatenation.

use std::collections::BTreeSet;

use etch_codegen::{EmissionStrategy, GenerateError};
use etch_ir::{GenerationRequest, Modifier, SourceArtifact};
use etch_manifest::ClassTemplate;

/// Concatenates template fragments with the request's namespace substituted.
///
/// Nothing is validated: a malformed namespace or member name is copied into
/// the output as is, and rendering never fails.
#[derive(Debug, Clone)]
pub struct RawTextEmitter {
    template: ClassTemplate,
}

impl RawTextEmitter {
    pub fn new(template: ClassTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &ClassTemplate {
        &self.template
    }

    /// Render the class text for `request`.
    pub fn render_text(&self, request: &GenerationRequest) -> String {
        let template = &self.template;
        let mut out = String::new();

        if !request.namespace.is_empty() {
            out.push_str(&format!("package {};\n", request.namespace));
        }
        if let Some(doc) = template.doc.as_deref().filter(|doc| !doc.is_empty()) {
            out.push_str(&format!("/** {} */\n", doc.replace('\n', "\n * ")));
        }
        out.push_str(&format!(
            "{}class {} {{\n",
            modifiers(&template.modifiers),
            request.desired_name
        ));
        for field in &template.fields {
            out.push_str(&format!(
                "{}{} {};\n",
                modifiers(&field.modifiers),
                field.ty,
                field.name
            ));
        }
        for method in &template.methods {
            let header = format!(
                "{}{} {}()",
                modifiers(&method.modifiers),
                method.returns,
                method.name
            );
            if method.body.is_empty() {
                out.push_str(&format!("{header} {{}}\n"));
                continue;
            }
            // One statement per line: a trailing `//` comment must not swallow the rest.
            out.push_str(&format!("{header} {{\n"));
            for statement in &method.body {
                out.push_str(&format!("  {statement}\n"));
            }
            out.push_str("}\n");
        }
        out.push_str("}\n");
        out
    }
}

/// Modifier keywords in canonical order, each followed by a space.
fn modifiers(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|m| format!("{} ", m))
        .collect()
}

impl EmissionStrategy for RawTextEmitter {
    fn name(&self) -> &'static str {
        "raw-text"
    }

    fn render(&self, request: &GenerationRequest) -> Result<SourceArtifact, GenerateError> {
        Ok(SourceArtifact::for_request(request, self.render_text(request)))
    }
}
