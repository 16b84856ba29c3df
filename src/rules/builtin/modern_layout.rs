use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::FileCategory;
use crate::rules::{Advisory, Rule, RuleMetadata};

static LAYOUT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"flex|grid").unwrap());

/// KFY-CSS-001: flexbox and grid layout.
///
/// Matches anywhere, including inside identifiers such as `.gridline`.
pub struct ModernLayoutRule;

pub fn advisory() -> Advisory {
    Advisory::new(
        "Modern layout (flex/grid) → Kindle's browser barely supports them; \
         consider floats or table layouts.",
    )
}

impl Rule for ModernLayoutRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "KFY-CSS-001".into(),
            name: "Modern Layout".into(),
            description: "Flexbox or CSS grid layout".into(),
            category: FileCategory::Stylesheet,
        }
    }

    fn check(&self, text: &str) -> Option<Advisory> {
        LAYOUT_RE.is_match(text).then(advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_flex_and_grid() {
        assert!(ModernLayoutRule.check(".box{display:flex}").is_some());
        assert!(ModernLayoutRule.check(".page{display:grid}").is_some());
    }

    #[test]
    fn flags_substring_in_selector() {
        assert!(ModernLayoutRule.check(".gridline { border: 0 }").is_some());
    }

    #[test]
    fn float_layout_passes() {
        assert!(ModernLayoutRule.check(".col { float: left; width: 50%; }").is_none());
    }
}
