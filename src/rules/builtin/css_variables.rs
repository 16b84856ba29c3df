use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::FileCategory;
use crate::rules::{Advisory, Rule, RuleMetadata};

static VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"var\(--").unwrap());

/// KFY-CSS-002: custom property references.
pub struct CssVariablesRule;

pub fn advisory() -> Advisory {
    Advisory::new("CSS variables → unsupported; replace with static values.")
}

impl Rule for CssVariablesRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "KFY-CSS-002".into(),
            name: "CSS Variables".into(),
            description: "Custom property references via var(--name)".into(),
            category: FileCategory::Stylesheet,
        }
    }

    fn check(&self, text: &str) -> Option<Advisory> {
        VAR_RE.is_match(text).then(advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_var_reference() {
        assert!(CssVariablesRule.check("p { color: var(--ink); }").is_some());
    }

    #[test]
    fn declaration_without_reference_passes() {
        // Declaring a custom property is harmless on its own.
        assert!(CssVariablesRule.check(":root { --ink: #000; }").is_none());
    }
}
