//! Java implementation of ClassRenderer.

use etch_codegen::builder::{
    ClassRenderer, ClassSpec, CodeFragment, FieldSpec, MethodSpec, TypeMapper,
};

use crate::{java_file::JavaFile, type_mapper::JavaTypeMapper};

/// Renders a [`ClassSpec`] as a Java source file.
///
/// Output order: package header, doc comment, class header, fields, methods.
/// Members are indented two spaces and separated by a blank line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaClassRenderer {
    type_mapper: JavaTypeMapper,
}

impl JavaClassRenderer {
    /// Create a new Java class renderer.
    pub fn new() -> Self {
        Self {
            type_mapper: JavaTypeMapper,
        }
    }

    /// Fragments for the class declaration, without the package header.
    pub fn class_fragments(&self, spec: &ClassSpec) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = spec.doc.as_deref().filter(|doc| !doc.is_empty()) {
            fragments.push(CodeFragment::doc_comment(doc));
        }

        let members = spec
            .fields
            .iter()
            .map(|field| CodeFragment::line(self.render_field(field)))
            .chain(spec.methods.iter().map(|method| self.method_fragment(method)));

        let mut body = Vec::new();
        for (i, member) in members.enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.push(member);
        }

        fragments.push(CodeFragment::braced(
            format!(
                "{}class {} {{",
                self.render_modifiers(&spec.modifiers),
                spec.name
            ),
            body,
        ));
        fragments
    }

    fn method_fragment(&self, spec: &MethodSpec) -> CodeFragment {
        CodeFragment::braced(
            format!("{} {{", self.render_method_signature(spec)),
            spec.body.iter().map(CodeFragment::line).collect(),
        )
    }
}

impl ClassRenderer for JavaClassRenderer {
    fn render_class(&self, spec: &ClassSpec) -> String {
        JavaFile::new(&spec.namespace)
            .body(self.class_fragments(spec))
            .build()
    }

    fn render_field(&self, spec: &FieldSpec) -> String {
        format!(
            "{}{} {};",
            self.render_modifiers(&spec.modifiers),
            self.type_mapper.render_type(&spec.ty),
            spec.name
        )
    }

    fn render_method_signature(&self, spec: &MethodSpec) -> String {
        format!(
            "{}{} {}()",
            self.render_modifiers(&spec.modifiers),
            self.type_mapper.render_type(&spec.return_type),
            spec.name
        )
    }
}
