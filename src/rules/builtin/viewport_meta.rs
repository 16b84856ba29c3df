use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::FileCategory;
use crate::rules::{Advisory, Rule, RuleMetadata};

static VIEWPORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"viewport").unwrap());

static INITIAL_SCALE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"initial-scale").unwrap());

/// KFY-HTML-002: viewport meta with an initial scale.
///
/// Both tokens must appear somewhere in the document; they do not have to
/// share a tag.
pub struct ViewportMetaRule;

pub fn advisory() -> Advisory {
    Advisory::new(
        "Viewport meta may not behave correctly on Kindle → expect weird zoom behavior.",
    )
}

impl Rule for ViewportMetaRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "KFY-HTML-002".into(),
            name: "Viewport Meta".into(),
            description: "Viewport meta tag with initial-scale".into(),
            category: FileCategory::Markup,
        }
    }

    fn check(&self, text: &str) -> Option<Advisory> {
        (VIEWPORT_RE.is_match(text) && INITIAL_SCALE_RE.is_match(text)).then(advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_standard_viewport_meta() {
        let html = r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#;
        assert!(ViewportMetaRule.check(html).is_some());
    }

    #[test]
    fn tokens_may_be_in_different_tags() {
        let html = "<meta name=\"viewport\">\n<!-- initial-scale -->";
        assert!(ViewportMetaRule.check(html).is_some());
    }

    #[test]
    fn viewport_alone_passes() {
        let html = r#"<meta name="viewport" content="width=device-width">"#;
        assert!(ViewportMetaRule.check(html).is_none());
    }
}
