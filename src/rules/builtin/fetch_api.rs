use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::FileCategory;
use crate::rules::{Advisory, Rule, RuleMetadata};

static FETCH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"fetch\(").unwrap());

/// KFY-JS-003: calls to `fetch()`.
///
/// No Kindle WebKit baseline ships the Fetch API; XMLHttpRequest is the
/// only network primitive that works across the fleet.
pub struct FetchApiRule;

pub fn advisory() -> Advisory {
    Advisory::new("fetch() used → Kindle may not support fetch; consider an XHR fallback.")
}

impl Rule for FetchApiRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "KFY-JS-003".into(),
            name: "Fetch API".into(),
            description: "Network requests through fetch()".into(),
            category: FileCategory::Script,
        }
    }

    fn check(&self, text: &str) -> Option<Advisory> {
        FETCH_RE.is_match(text).then(advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_fetch_call() {
        assert!(FetchApiRule.check("fetch('/api/books').then(render);").is_some());
    }

    #[test]
    fn flags_method_named_fetch() {
        // Lexical match: any `fetch(` counts, including `window.fetch(`.
        assert!(FetchApiRule.check("window.fetch(url)").is_some());
    }

    #[test]
    fn reference_without_call_passes() {
        assert!(FetchApiRule.check("if (!window.fetch) { polyfill(); }").is_none());
    }
}
