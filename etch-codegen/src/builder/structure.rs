//! Language-agnostic class definitions.
//!
//! A [`ClassSpec`] is the *intent* of one generated class: where it lives,
//! what it is called, and which members it declares. Renderers turn it into
//! source text for a specific language.

use std::collections::BTreeSet;

use etch_ir::Modifier;

use super::types::TypeRef;

/// Modifier set, iterated in canonical order.
pub type Modifiers = BTreeSet<Modifier>;

/// A declarative specification for a class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    /// Dot-separated namespace. Empty for the unnamed package.
    pub namespace: String,
    /// Simple class name.
    pub name: String,
    /// Class modifiers.
    pub modifiers: Modifiers,
    /// Documentation comment.
    pub doc: Option<String>,
    /// Fields, in declaration order.
    pub fields: Vec<FieldSpec>,
    /// Methods, in declaration order.
    pub methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// Create a class spec with no modifiers or members.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            modifiers: Modifiers::new(),
            doc: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Add multiple modifiers.
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// `<namespace>.<name>`, or just the name in the unnamed package.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Check if this class declares any members.
    pub fn has_members(&self) -> bool {
        !self.fields.is_empty() || !self.methods.is_empty()
    }
}

/// A field in a class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
}

impl FieldSpec {
    /// Create a field with no modifiers.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::new(),
        }
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Add multiple modifiers.
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }
}

/// A no-argument method in a class.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    pub name: String,
    pub modifiers: Modifiers,
    /// Return type ([`TypeRef::Void`] for none).
    pub return_type: TypeRef,
    /// Body statements, one per line, emitted verbatim.
    pub body: Vec<String>,
}

impl MethodSpec {
    /// Create a method returning unit with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::new(),
            return_type: TypeRef::Void,
            body: Vec::new(),
        }
    }

    /// Set return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Add multiple modifiers.
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Add a body statement.
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add multiple body statements.
    pub fn statements(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Check if this method has a body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Trait for rendering class specs to language-specific code.
///
/// Renderers emit, in order: namespace header, doc comment, modifiers and
/// class header, field declarations, method declarations.
pub trait ClassRenderer {
    /// Render a complete source file for the class.
    fn render_class(&self, spec: &ClassSpec) -> String;

    /// Render a field declaration.
    fn render_field(&self, spec: &FieldSpec) -> String;

    /// Render a method signature, without the body.
    fn render_method_signature(&self, spec: &MethodSpec) -> String;

    /// Render a modifier set, including a trailing space when non-empty.
    fn render_modifiers(&self, modifiers: &Modifiers) -> String {
        modifiers
            .iter()
            .map(|m| format!("{} ", m.as_str()))
            .collect()
    }
}
