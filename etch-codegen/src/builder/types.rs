//! Type references shared by the structured emitters.
//!
//! A [`TypeRef`] names a type without committing to a spelling; the
//! [`TypeMapper`] of the target language decides how it is written.

/// A field, parameter or return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(PrimitiveType),
    /// Array of the boxed element type.
    Array(Box<TypeRef>),
    /// Class or interface name, possibly qualified: `java.util.Date`.
    Named(String),
    /// Absence of a value, only meaningful as a return type.
    Void,
}

impl TypeRef {
    pub const INT: TypeRef = TypeRef::Primitive(PrimitiveType::Int);
    pub const BOOL: TypeRef = TypeRef::Primitive(PrimitiveType::Bool);

    pub fn array_of(element: impl Into<TypeRef>) -> Self {
        Self::Array(Box::new(element.into()))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn is_void(&self) -> bool {
        *self == Self::Void
    }

    /// The innermost non-array type (`int` for `int[][]`).
    pub fn element_type(&self) -> &TypeRef {
        match self {
            Self::Array(element) => element.element_type(),
            other => other,
        }
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        Self::Bool,
        Self::Byte,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];
}

/// Spells [`TypeRef`]s in one target language and reads them back.
pub trait TypeMapper {
    fn primitive_name(&self, ty: PrimitiveType) -> &'static str;

    fn void_name(&self) -> &'static str;

    /// Wrap an already rendered element type as an array.
    fn wrap_array(&self, element: String) -> String;

    /// Read a type as written in source. `None` if the text is not a type.
    fn parse_type(&self, text: &str) -> Option<TypeRef>;

    /// Look up a primitive by its spelling in this language.
    fn primitive_named(&self, text: &str) -> Option<PrimitiveType> {
        PrimitiveType::ALL
            .into_iter()
            .find(|ty| self.primitive_name(*ty) == text)
    }

    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(primitive) => self.primitive_name(*primitive).to_owned(),
            TypeRef::Array(element) => self.wrap_array(self.render_type(element)),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Void => self.void_name().to_owned(),
        }
    }
}
