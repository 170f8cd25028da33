//! Member visibility levels.

use std::fmt;
use std::str::FromStr;

/// Declared accessibility tier of a member, ordered from least to most visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Visibility {
    Private,
    Fileprivate,
    #[default]
    Internal,
    Public,
    Open,
}

impl Visibility {
    /// Whether members at this level are visible outside their module.
    pub fn is_exported(self) -> bool {
        self >= Visibility::Public
    }

    /// Get the keyword for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Fileprivate => "fileprivate",
            Self::Internal => "internal",
            Self::Public => "public",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a visibility keyword is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown visibility level: {0}")]
pub struct UnknownVisibility(pub String);

impl FromStr for Visibility {
    type Err = UnknownVisibility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Self::Private),
            "fileprivate" => Ok(Self::Fileprivate),
            "internal" => Ok(Self::Internal),
            "public" => Ok(Self::Public),
            "open" => Ok(Self::Open),
            other => Err(UnknownVisibility(other.to_string())),
        }
    }
}
