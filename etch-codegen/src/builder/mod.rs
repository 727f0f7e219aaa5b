//! Code generation building blocks.
//!
//! A target language turns a [`ClassSpec`] into [`CodeFragment`]s through its
//! [`ClassRenderer`], spelling types with its [`TypeMapper`]; the
//! [`CodeBuilder`] lays the fragments out as indented text.

mod code_builder;
mod indent;
mod renderable;
mod structure;
mod types;

pub use code_builder::CodeBuilder;
pub use etch_ir::Modifier;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use structure::{ClassRenderer, ClassSpec, FieldSpec, MethodSpec, Modifiers};
pub use types::{PrimitiveType, TypeMapper, TypeRef};
