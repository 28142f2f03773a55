//! Mental-health concern detection.

use crate::keywords::{contains_any, KeywordTables};

pub use crate::templates::MENTAL_HEALTH_RESOURCES;

/// Whether `text` mentions a mental-health topic. Same substring rules as every other table.
pub fn detects_concern(text: &str, tables: &KeywordTables) -> bool {
    contains_any(text, tables.mental_health())
}

/// Support lines to show alongside a detected concern.
pub fn resources() -> &'static [&'static str] {
    MENTAL_HEALTH_RESOURCES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_listed_topics() {
        let tables = KeywordTables::default();
        assert!(detects_concern("My ANXIETY keeps me up", &tables));
        assert!(detects_concern("should I try therapy?", &tables));
        assert!(detects_concern("is my medication causing this", &tables));
        assert!(!detects_concern("my knee hurts", &tables));
    }

    #[test]
    fn resources_are_fixed_and_ordered() {
        let lines = resources();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("988"));
        assert!(lines[3].starts_with("SAMHSA"));
    }
}
