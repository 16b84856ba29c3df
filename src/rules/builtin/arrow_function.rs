use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::FileCategory;
use crate::rules::{Advisory, Rule, RuleMetadata};

static ARROW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"=>").unwrap());

/// KFY-JS-002: arrow function literals.
pub struct ArrowFunctionRule;

pub fn advisory() -> Advisory {
    Advisory::new(
        "Arrow functions detected → older WebKit on Kindle may choke; \
         rewrite as function(){}.",
    )
}

impl Rule for ArrowFunctionRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "KFY-JS-002".into(),
            name: "Arrow Functions".into(),
            description: "Concise arrow function syntax".into(),
            category: FileCategory::Script,
        }
    }

    fn check(&self, text: &str) -> Option<Advisory> {
        ARROW_RE.is_match(text).then(advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_arrow() {
        assert!(ArrowFunctionRule.check("items.map(x => x * 2)").is_some());
    }

    #[test]
    fn comparison_operators_pass() {
        assert!(ArrowFunctionRule.check("if (a >= b && c <= d) {}").is_none());
    }
}
