//! Style/class tags applied to rendered components.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A wrapper type for CSS class tags to prevent mixing up different string types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    /// Create a new class name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the inner string value.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        ClassName(name)
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        ClassName(name.to_string())
    }
}

impl From<ClassName> for String {
    fn from(class_name: ClassName) -> Self {
        class_name.0
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
