use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::FileCategory;
use crate::rules::{Advisory, Rule, RuleMetadata};

static ASYNC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"async\s+function|await").unwrap());

/// KFY-JS-001: async functions and `await`.
///
/// The WebKit builds shipped on Kindle predate ES2017, so any suspension
/// syntax is a parse error that takes the whole script down with it.
pub struct AsyncAwaitRule;

pub fn advisory() -> Advisory {
    Advisory::new(
        "Uses async/await → the Kindle WebBrowser JS engine is old; \
         consider callbacks or Promises without async keywords.",
    )
}

impl Rule for AsyncAwaitRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "KFY-JS-001".into(),
            name: "Async/Await".into(),
            description: "Asynchronous functions or await expressions".into(),
            category: FileCategory::Script,
        }
    }

    fn check(&self, text: &str) -> Option<Advisory> {
        ASYNC_RE.is_match(text).then(advisory)
    }
}
