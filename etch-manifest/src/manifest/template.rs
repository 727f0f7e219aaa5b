//! Declarative description of the class generated for each match.

use etch_ir::Modifier;
use serde::{Deserialize, Serialize};

/// Simple name of the class generated when no template is configured.
pub const DEFAULT_CLASS_NAME: &str = "AutoClazz";

/// Doc comment attached when no template is configured.
pub const DEFAULT_DOC: &str = "This class is generated by etch, do not edit.";

/// The `[template]` section of etch.toml.
///
/// Missing keys fall back to the default `AutoClazz` shape: a
/// `public final` class with a `private int age` field and a
/// `private void getAge()` method.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassTemplate {
    /// Simple name of the generated class.
    pub class_name: String,
    /// Doc comment text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Class modifiers.
    pub modifiers: Vec<Modifier>,
    /// Fields, in declaration order.
    pub fields: Vec<FieldTemplate>,
    /// Methods, in declaration order.
    pub methods: Vec<MethodTemplate>,
}

impl Default for ClassTemplate {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            doc: Some(DEFAULT_DOC.to_string()),
            modifiers: vec![Modifier::Public, Modifier::Final],
            fields: vec![FieldTemplate::new("age", "int").modifier(Modifier::Private)],
            methods: vec![MethodTemplate::new("getAge").modifier(Modifier::Private)],
        }
    }
}

impl ClassTemplate {
    /// Create an empty template for a class name.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            doc: None,
            modifiers: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a class modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldTemplate) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodTemplate) -> Self {
        self.methods.push(method);
        self
    }
}

/// A field of the generated class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldTemplate {
    pub name: String,
    /// Source-level type name, e.g. `int`, `String`, `java.util.Date`, `int[]`.
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl FieldTemplate {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// A no-argument method of the generated class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MethodTemplate {
    pub name: String,
    /// Source-level return type (defaults to `void`).
    #[serde(default = "default_return_type")]
    pub returns: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Body statements, one per line.
    #[serde(default)]
    pub body: Vec<String>,
}

fn default_return_type() -> String {
    "void".to_string()
}

impl MethodTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: default_return_type(),
            modifiers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = ty.into();
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add a body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_shape() {
        let template = ClassTemplate::default();
        assert_eq!(template.class_name, "AutoClazz");
        assert_eq!(template.modifiers, vec![Modifier::Public, Modifier::Final]);
        assert_eq!(template.fields.len(), 1);
        assert_eq!(template.fields[0].name, "age");
        assert_eq!(template.fields[0].ty, "int");
        assert_eq!(template.methods.len(), 1);
        assert_eq!(template.methods[0].name, "getAge");
        assert_eq!(template.methods[0].returns, "void");
        assert!(template.methods[0].body.is_empty());
    }

    #[test]
    fn test_partial_template_keeps_defaults() {
        let template: ClassTemplate = toml::from_str(r#"class_name = "Generated""#).unwrap();
        assert_eq!(template.class_name, "Generated");
        assert_eq!(template.fields, ClassTemplate::default().fields);
    }

    #[test]
    fn test_method_defaults() {
        let method: MethodTemplate = toml::from_str(r#"name = "run""#).unwrap();
        assert_eq!(method.returns, "void");
        assert!(method.modifiers.is_empty());
        assert!(method.body.is_empty());
    }

    #[test]
    fn test_unknown_modifier_rejected() {
        let result: Result<FieldTemplate, _> = toml::from_str(
            r#"
            name = "age"
            type = "int"
            modifiers = ["internal"]
            "#,
        );
        assert!(result.is_err());
    }
}
