use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::FileCategory;
use crate::rules::{Advisory, Rule, RuleMetadata};

static MEDIA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<video|<audio").unwrap());

/// KFY-HTML-001: `<video>` and `<audio>` elements.
pub struct MediaElementRule;

pub fn advisory() -> Advisory {
    Advisory::new(
        "Media elements → Kindle can't play them; remove or provide a text-only fallback.",
    )
}

impl Rule for MediaElementRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "KFY-HTML-001".into(),
            name: "Media Elements".into(),
            description: "Embedded video or audio playback".into(),
            category: FileCategory::Markup,
        }
    }

    fn check(&self, text: &str) -> Option<Advisory> {
        MEDIA_RE.is_match(text).then(advisory)
    }
}
