//! Java identifier rules.

use etch_codegen::language::NamingConvention;

fn is_java_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_java_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Java naming conventions.
///
/// Reserved words include the literals `true`, `false` and `null`, which can
/// not be used as identifiers either.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    identifier_start: is_java_identifier_start,
    identifier_part: is_java_identifier_part,
    reserved_words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
        "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "void", "volatile", "while", "_", "true", "false",
        "null",
    ],
};
