//! Declaration modifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A modifier on a generated class or member.
///
/// The derived ordering is the canonical source order, so a
/// `BTreeSet<Modifier>` always renders as `public static final`, never
/// `final static public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
}

impl Modifier {
    /// Returns the modifier keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
        }
    }

    /// Whether this is one of the access modifiers.
    pub fn is_access(&self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Protected | Modifier::Private
        )
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Modifier::Public),
            "protected" => Ok(Modifier::Protected),
            "private" => Ok(Modifier::Private),
            "abstract" => Ok(Modifier::Abstract),
            "static" => Ok(Modifier::Static),
            "final" => Ok(Modifier::Final),
            "transient" => Ok(Modifier::Transient),
            "volatile" => Ok(Modifier::Volatile),
            "synchronized" => Ok(Modifier::Synchronized),
            _ => Err(format!("unknown modifier '{}'", s)),
        }
    }
}
