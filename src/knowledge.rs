//! Compatibility knowledge base.
//!
//! WebKit baselines for Kindle hardware and ColorSoft firmware. This is
//! reference data for people deciding which devices to target; the rule
//! scanners do not consult it.

use serde::Serialize;

/// One device or firmware release and the WebKit engine it ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityEntry {
    pub name: &'static str,
    pub engine_version: &'static str,
    pub notes: &'static str,
}

static COLORSOFT_FIRMWARE: [CompatibilityEntry; 3] = [
    CompatibilityEntry {
        name: "ColorSoft 1.0",
        engine_version: "538.1",
        notes: "Early e-ink color WebKit variant",
    },
    CompatibilityEntry {
        name: "ColorSoft 1.2",
        engine_version: "538.3",
        notes: "Improved CSS handling and partial Grid",
    },
    CompatibilityEntry {
        name: "ColorSoft 2.0",
        engine_version: "540.0",
        notes: "Most capable; broader ES6 support",
    },
];

static KINDLE_MODELS: [CompatibilityEntry; 7] = [
    CompatibilityEntry {
        name: "Kindle 4/5 (E-Ink)",
        engine_version: "534.x",
        notes: "Ancient WebKit; barely supports modern JS; no flexbox.",
    },
    CompatibilityEntry {
        name: "Kindle Paperwhite 1",
        engine_version: "534.x",
        notes: "Same era as Kindle 5; JS support extremely limited.",
    },
    CompatibilityEntry {
        name: "Kindle Paperwhite 2",
        engine_version: "537.x",
        notes: "Slightly newer; still pre-flexbox and missing many ES5 features.",
    },
    CompatibilityEntry {
        name: "Kindle Paperwhite 3",
        engine_version: "537.x",
        notes: "Marginal improvements; still no CSS variables or flexbox.",
    },
    CompatibilityEntry {
        name: "Kindle Paperwhite 4",
        engine_version: "538.x",
        notes: "Better CSS parsing; some ES6 works but inconsistently.",
    },
    CompatibilityEntry {
        name: "Kindle Oasis (all gens)",
        engine_version: "538–539 range",
        notes: "Fastest pre-color Kindles; partial flexbox but buggy; no fetch().",
    },
    CompatibilityEntry {
        name: "Kindle Scribe",
        engine_version: "539–540 range",
        notes: "Closest to ColorSoft 2.0; best JS support in any monochrome Kindle.",
    },
];

/// ColorSoft firmware releases, oldest first.
pub fn colorsoft_firmware() -> &'static [CompatibilityEntry] {
    &COLORSOFT_FIRMWARE
}

/// Monochrome Kindle models, oldest first.
pub fn kindle_models() -> &'static [CompatibilityEntry] {
    &KINDLE_MODELS
}

/// Every entry: firmware releases first, then models.
pub fn all_entries() -> impl Iterator<Item = &'static CompatibilityEntry> {
    COLORSOFT_FIRMWARE.iter().chain(KINDLE_MODELS.iter())
}

/// Exact-name lookup.
pub fn lookup(name: &str) -> Option<&'static CompatibilityEntry> {
    all_entries().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = all_entries().map(|e| e.name).collect();
        assert_eq!(names.len(), colorsoft_firmware().len() + kindle_models().len());
    }

    #[test]
    fn lookup_finds_scribe() {
        let scribe = lookup("Kindle Scribe").unwrap();
        assert_eq!(scribe.engine_version, "539–540 range");
        assert!(lookup("Kindle Scribe 2").is_none());
    }

    #[test]
    fn no_entry_is_blank() {
        for entry in all_entries() {
            assert!(!entry.engine_version.is_empty(), "{}", entry.name);
            assert!(!entry.notes.is_empty(), "{}", entry.name);
        }
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(lookup("ColorSoft 2.0").unwrap()).unwrap();
        assert_eq!(json["engine_version"], "540.0");
    }
}
