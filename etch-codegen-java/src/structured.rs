//! Emission through the class model.

use etch_codegen::{
    EmissionStrategy, GenerateError,
    builder::{ClassRenderer, ClassSpec, FieldSpec, MethodSpec, TypeMapper, TypeRef},
};
use etch_ir::{GenerationRequest, SourceArtifact};
use etch_manifest::ClassTemplate;

use crate::{JAVA_NAMING, JavaClassRenderer, JavaTypeMapper};

/// Builds a [`ClassSpec`] from the template for each request, then renders it.
///
/// Every identifier and type name is checked while the model is built, so a
/// request either yields a compilable class or an
/// [`GenerateError::InvalidIdentifier`].
#[derive(Debug, Clone)]
pub struct StructuredBuilder {
    template: ClassTemplate,
    type_mapper: JavaTypeMapper,
    renderer: JavaClassRenderer,
}

impl StructuredBuilder {
    pub fn new(template: ClassTemplate) -> Self {
        Self {
            template,
            type_mapper: JavaTypeMapper,
            renderer: JavaClassRenderer::new(),
        }
    }

    pub fn template(&self) -> &ClassTemplate {
        &self.template
    }

    /// Build the class model for `request`.
    pub fn build_class(&self, request: &GenerationRequest) -> Result<ClassSpec, GenerateError> {
        let check = Checker {
            artifact: request.fully_qualified_name(),
        };

        if !request.namespace.is_empty() {
            JAVA_NAMING
                .check_qualified(&request.namespace)
                .map_err(|(segment, reason)| check.error("namespace segment", segment, reason))?;
        }
        check.identifier("class name", &request.desired_name)?;

        let mut spec = ClassSpec::new(&request.namespace, &request.desired_name)
            .modifiers(self.template.modifiers.iter().copied());
        if let Some(doc) = self.template.doc.as_deref().filter(|doc| !doc.is_empty()) {
            spec = spec.doc(doc);
        }

        for field in &self.template.fields {
            check.identifier("field name", &field.name)?;
            let ty = self.value_type(&check, &field.ty)?;
            spec = spec.field(
                FieldSpec::new(&field.name, ty).modifiers(field.modifiers.iter().copied()),
            );
        }

        for method in &self.template.methods {
            check.identifier("method name", &method.name)?;
            let return_type = match method.returns.as_str() {
                "void" => TypeRef::Void,
                other => self.value_type(&check, other)?,
            };
            spec = spec.method(
                MethodSpec::new(&method.name)
                    .returns(return_type)
                    .modifiers(method.modifiers.iter().copied())
                    .statements(method.body.iter().cloned()),
            );
        }

        Ok(spec)
    }

    /// Parse a type usable for a field or return value: anything but `void`.
    fn value_type(&self, check: &Checker, name: &str) -> Result<TypeRef, GenerateError> {
        let invalid = |reason: &'static str| check.error("type", name, reason);
        let ty = self
            .type_mapper
            .parse_type(name)
            .ok_or_else(|| invalid("not a Java type"))?;

        match ty.element_type() {
            TypeRef::Void => Err(invalid("'void' is not a value type")),
            TypeRef::Named(class) => JAVA_NAMING
                .check_qualified(class)
                .map_err(|(_, reason)| invalid(reason))
                .map(|()| ty.clone()),
            _ => Ok(ty.clone()),
        }
    }
}

impl EmissionStrategy for StructuredBuilder {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn render(&self, request: &GenerationRequest) -> Result<SourceArtifact, GenerateError> {
        let spec = self.build_class(request)?;
        tracing::trace!(
            class = %spec.qualified_name(),
            fields = spec.fields.len(),
            methods = spec.methods.len(),
            "built class model"
        );
        Ok(SourceArtifact::for_request(
            request,
            self.renderer.render_class(&spec),
        ))
    }
}

/// Builds identifier errors for one artifact.
struct Checker {
    artifact: String,
}

impl Checker {
    fn error(&self, context: &'static str, name: &str, reason: &'static str) -> GenerateError {
        GenerateError::InvalidIdentifier {
            artifact: self.artifact.clone(),
            context,
            name: name.to_string(),
            reason,
        }
    }

    fn identifier(&self, context: &'static str, name: &str) -> Result<(), GenerateError> {
        match JAVA_NAMING.identifier_error(name) {
            Some(reason) => Err(self.error(context, name, reason)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use etch_codegen::builder::Modifier;
    use etch_manifest::{FieldTemplate, MethodTemplate};

    use super::*;

    fn request(namespace: &str) -> GenerationRequest {
        GenerationRequest::new(namespace, "AutoClazz")
    }

    fn invalid(result: Result<ClassSpec, GenerateError>) -> (&'static str, String) {
        match result {
            Err(GenerateError::InvalidIdentifier { context, name, .. }) => (context, name),
            other => panic!("expected InvalidIdentifier, got {other:?}"),
        }
    }

    #[test]
    fn test_default_template_model() {
        let spec = StructuredBuilder::new(ClassTemplate::default())
            .build_class(&request("com.example"))
            .unwrap();

        assert_eq!(spec.qualified_name(), "com.example.AutoClazz");
        assert!(spec.modifiers.contains(&Modifier::Public));
        assert!(spec.modifiers.contains(&Modifier::Final));
        assert_eq!(spec.fields[0].ty, TypeRef::INT);
        assert!(spec.fields[0].modifiers.contains(&Modifier::Private));
        assert_eq!(spec.methods[0].name, "getAge");
        assert!(spec.methods[0].return_type.is_void());
    }

    #[test]
    fn test_rejects_malformed_namespace() {
        let builder = StructuredBuilder::new(ClassTemplate::default());

        assert_eq!(
            invalid(builder.build_class(&request("com..example"))),
            ("namespace segment", String::new())
        );
        assert_eq!(
            invalid(builder.build_class(&request("com.1st"))),
            ("namespace segment", "1st".to_string())
        );
        assert_eq!(
            invalid(builder.build_class(&request("com.class.x"))),
            ("namespace segment", "class".to_string())
        );
    }

    #[test]
    fn test_rejects_bad_member_names() {
        let template = ClassTemplate::new("A").field(FieldTemplate::new("my-field", "int"));
        assert_eq!(
            invalid(StructuredBuilder::new(template).build_class(&request("a"))),
            ("field name", "my-field".to_string())
        );

        let template = ClassTemplate::new("A").method(MethodTemplate::new("return"));
        assert_eq!(
            invalid(StructuredBuilder::new(template).build_class(&request("a"))),
            ("method name", "return".to_string())
        );
    }

    #[test]
    fn test_rejects_bad_class_name() {
        let builder = StructuredBuilder::new(ClassTemplate::default());
        let result = builder.build_class(&GenerationRequest::new("a", "Auto Clazz"));
        assert_eq!(invalid(result), ("class name", "Auto Clazz".to_string()));
    }

    #[test]
    fn test_rejects_bad_types() {
        for ty in ["void", "void[]", "java..util.Date", "", "List<String>"] {
            let template = ClassTemplate::new("A").field(FieldTemplate::new("x", ty));
            let (context, _) = invalid(StructuredBuilder::new(template).build_class(&request("a")));
            assert_eq!(context, "type", "type '{ty}' should be rejected");
        }
    }

    #[test]
    fn test_accepts_qualified_and_array_types() {
        let template = ClassTemplate::new("A")
            .field(FieldTemplate::new("when", "java.util.Date"))
            .field(FieldTemplate::new("scores", "int[]"))
            .method(MethodTemplate::new("name").returns("String").line("return \"a\";"));

        let spec = StructuredBuilder::new(template)
            .build_class(&request(""))
            .unwrap();
        assert_eq!(spec.fields[0].ty, TypeRef::named("java.util.Date"));
        assert_eq!(spec.fields[1].ty, TypeRef::array_of(TypeRef::INT));
        assert_eq!(spec.methods[0].return_type, TypeRef::named("String"));
        assert_eq!(spec.methods[0].body, vec!["return \"a\";"]);
    }

    #[test]
    fn test_render_names_artifact() {
        let artifact = StructuredBuilder::new(ClassTemplate::default())
            .render(&request("com.example"))
            .unwrap();
        assert_eq!(artifact.fully_qualified_name, "com.example.AutoClazz");
        assert!(artifact.content.starts_with("package com.example;\n"));
    }
}
