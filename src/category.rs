use std::path::Path;

use serde::Serialize;

/// Classification of a file by extension. Decides which rule set runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Script,
    TypedScript,
    Markup,
    Stylesheet,
    Unsupported,
}

impl FileCategory {
    /// Exact, case-sensitive match: `App.JS` is not a script.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "js" => Self::Script,
            "ts" => Self::TypedScript,
            "html" => Self::Markup,
            "css" => Self::Stylesheet,
            _ => Self::Unsupported,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unsupported)
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Script => write!(f, "script"),
            Self::TypedScript => write!(f, "typed script"),
            Self::Markup => write!(f, "markup"),
            Self::Stylesheet => write!(f, "stylesheet"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}
