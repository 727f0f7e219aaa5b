use etch_codegen::builder::{PrimitiveType, TypeMapper, TypeRef};

/// Java spelling of [`TypeRef`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn primitive_name(&self, ty: PrimitiveType) -> &'static str {
        match ty {
            PrimitiveType::Bool => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    fn void_name(&self) -> &'static str {
        "void"
    }

    fn wrap_array(&self, element: String) -> String {
        element + "[]"
    }

    /// Primitive keywords, `void`, and trailing `[]` pairs. Anything else is
    /// taken as a (possibly qualified) class name and checked by the caller.
    fn parse_type(&self, text: &str) -> Option<TypeRef> {
        if let Some(element) = text.strip_suffix("[]") {
            return match self.parse_type(element)? {
                TypeRef::Void => None,
                element => Some(TypeRef::array_of(element)),
            };
        }
        if text.is_empty() {
            return None;
        }
        if text == self.void_name() {
            return Some(TypeRef::Void);
        }
        Some(match self.primitive_named(text) {
            Some(primitive) => primitive.into(),
            None => TypeRef::named(text),
        })
    }
}
