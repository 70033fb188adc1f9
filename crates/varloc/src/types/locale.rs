use serde::{Deserialize, Serialize};

/// An opaque identifier for a language/region variant.
///
/// Locale identifiers are drawn from the ordered set declared once at engine
/// construction (e.g., "en", "de", "ba"). The engine treats them as opaque
/// strings; no BCP 47 parsing or normalization is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocaleId(String);

impl LocaleId {
    /// Create a new locale identifier from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the locale identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for LocaleId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for LocaleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LocaleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for LocaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
