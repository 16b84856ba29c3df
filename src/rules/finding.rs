use serde::Serialize;

use crate::category::FileCategory;

/// A single compatibility warning. The message names the construct and why
/// it is a problem on the Kindle WebBrowser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Advisory {
    pub message: String,
}

impl Advisory {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Metadata about a rule, used for logging and rule listings.
#[derive(Debug, Clone, Serialize)]
pub struct RuleMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: FileCategory,
}
