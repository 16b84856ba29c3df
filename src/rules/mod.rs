pub mod builtin;
pub mod finding;

use crate::category::FileCategory;

pub use finding::{Advisory, RuleMetadata};

/// A rule inspects raw file text and reports at most one advisory.
pub trait Rule: Send + Sync {
    /// Metadata about this rule (id, name, category).
    fn metadata(&self) -> RuleMetadata;

    /// Run the rule against file text.
    fn check(&self, text: &str) -> Option<Advisory>;
}

/// An ordered set of rules for one file category. Every rule is evaluated
/// independently, in registration order.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    pub fn for_category(category: FileCategory) -> Self {
        let rules = match category {
            FileCategory::Script | FileCategory::TypedScript => builtin::script_rules(),
            FileCategory::Markup => builtin::markup_rules(),
            FileCategory::Stylesheet => builtin::stylesheet_rules(),
            FileCategory::Unsupported => Vec::new(),
        };
        Self { rules }
    }

    /// Run every rule against `text`, keeping emission order.
    pub fn run(&self, text: &str) -> Vec<Advisory> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let advisory = rule.check(text)?;
                tracing::debug!(rule = %rule.metadata().id, "rule matched");
                Some(advisory)
            })
            .collect()
    }

    pub fn list_rules(&self) -> Vec<RuleMetadata> {
        self.rules.iter().map(|r| r.metadata()).collect()
    }
}

/// Script scanner. Typed script reduces to the same runtime hazards.
pub fn scan_script(text: &str) -> Vec<Advisory> {
    RuleSet::for_category(FileCategory::Script).run(text)
}

pub fn scan_markup(text: &str) -> Vec<Advisory> {
    RuleSet::for_category(FileCategory::Markup).run(text)
}

pub fn scan_stylesheet(text: &str) -> Vec<Advisory> {
    RuleSet::for_category(FileCategory::Stylesheet).run(text)
}
