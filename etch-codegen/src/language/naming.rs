//! Naming conventions for different programming languages.

/// Language-specific identifier rules.
///
/// Used by structured emission to reject names the target language could not
/// compile before any text is produced.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Characters allowed at the start of an identifier
    pub identifier_start: fn(char) -> bool,
    /// Characters allowed after the first position
    pub identifier_part: fn(char) -> bool,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Explain why `name` is not a valid identifier, or `None` if it is.
    pub fn identifier_error(&self, name: &str) -> Option<&'static str> {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Some("identifier is empty");
        };
        if !(self.identifier_start)(first) {
            return Some("identifier must start with a letter, '_' or '$'");
        }
        if !chars.all(self.identifier_part) {
            return Some("identifier contains an invalid character");
        }
        if self.is_reserved(name) {
            return Some("identifier is a reserved word");
        }
        None
    }

    /// Check if a name is a valid identifier.
    pub fn is_identifier(&self, name: &str) -> bool {
        self.identifier_error(name).is_none()
    }

    /// Validate a dot-separated qualified name such as `com.example`.
    ///
    /// On failure returns the offending segment and the reason.
    pub fn check_qualified<'a>(&self, name: &'a str) -> Result<(), (&'a str, &'static str)> {
        name.split('.').try_for_each(|segment| match self.identifier_error(segment) {
            Some(reason) => Err((segment, reason)),
            None => Ok(()),
        })
    }
}
