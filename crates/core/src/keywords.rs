//! Keyword tables driving every match in the engine.
//!
//! Tables map a tier or topic to an ordered list of lowercase substrings. They are built once
//! at startup, either from the compiled-in defaults or from a YAML override file, and are
//! read-only afterwards.
//!
//! Matching is plain substring containment over the lowercased input. There is no tokenising
//! and no word-boundary check, so "I can't breathe easy when I run" matches "can't breathe".

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    COLD_FLU_KEYWORDS, CRISIS_KEYWORDS, EMERGENCY_KEYWORDS, HEADACHE_KEYWORDS,
    MAX_RULES_FILE_BYTES, MENTAL_HEALTH_KEYWORDS, PAIN_KEYWORDS, SEVERE_KEYWORDS,
};
use crate::{CoreError, CoreResult};

/// Chat topics recognised by the free-text template lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatTopic {
    ColdFlu,
    Headache,
    Pain,
}

/// Keywords for one chat topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicKeywords {
    pub topic: ChatTopic,
    pub keywords: Vec<String>,
}

/// All keyword tables used by the classifier, interceptor and composer.
///
/// Omitted tables in an override file keep their compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordTables {
    emergency: Vec<String>,
    severe: Vec<String>,
    crisis: Vec<String>,
    /// Evaluated in list order; the first topic with a match wins.
    topics: Vec<TopicKeywords>,
    mental_health: Vec<String>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            emergency: owned(EMERGENCY_KEYWORDS),
            severe: owned(SEVERE_KEYWORDS),
            crisis: owned(CRISIS_KEYWORDS),
            topics: vec![
                TopicKeywords {
                    topic: ChatTopic::ColdFlu,
                    keywords: owned(COLD_FLU_KEYWORDS),
                },
                TopicKeywords {
                    topic: ChatTopic::Headache,
                    keywords: owned(HEADACHE_KEYWORDS),
                },
                TopicKeywords {
                    topic: ChatTopic::Pain,
                    keywords: owned(PAIN_KEYWORDS),
                },
            ],
            mental_health: owned(MENTAL_HEALTH_KEYWORDS),
        }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_owned()).collect()
}

impl KeywordTables {
    pub fn emergency(&self) -> &[String] {
        &self.emergency
    }

    pub fn severe(&self) -> &[String] {
        &self.severe
    }

    pub fn crisis(&self) -> &[String] {
        &self.crisis
    }

    pub fn topics(&self) -> &[TopicKeywords] {
        &self.topics
    }

    pub fn mental_health(&self) -> &[String] {
        &self.mental_health
    }

    /// Parse tables from YAML text, then normalise and validate them.
    ///
    /// Schema mismatches report the failing path (e.g. `topics[1].topic`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RulesFileSchema`] if the YAML does not match the table schema and
    /// [`CoreError::InvalidInput`] if a table is empty, a keyword is blank or a topic repeats.
    pub fn from_yaml_str(yaml_text: &str) -> CoreResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        let tables = match serde_path_to_error::deserialize::<_, KeywordTables>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(CoreError::RulesFileSchema(format!("at {path}: {source}")));
            }
        };

        let tables = tables.normalised();
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a YAML override file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RulesFileRead`] if the file cannot be read,
    /// [`CoreError::InvalidInput`] if it is larger than the permitted size, and any error
    /// from [`KeywordTables::from_yaml_str`].
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let metadata = std::fs::metadata(path).map_err(CoreError::RulesFileRead)?;
        if metadata.len() > MAX_RULES_FILE_BYTES {
            return Err(CoreError::InvalidInput(format!(
                "keyword rules file exceeds maximum size of {MAX_RULES_FILE_BYTES} bytes"
            )));
        }

        let text = std::fs::read_to_string(path).map_err(CoreError::RulesFileRead)?;
        Self::from_yaml_str(&text)
    }

    fn normalised(mut self) -> Self {
        fn clean(words: &mut Vec<String>) {
            for word in words.iter_mut() {
                *word = word.trim().to_lowercase();
            }
        }

        clean(&mut self.emergency);
        clean(&mut self.severe);
        clean(&mut self.crisis);
        clean(&mut self.mental_health);
        for topic in &mut self.topics {
            clean(&mut topic.keywords);
        }
        self
    }

    fn validate(&self) -> CoreResult<()> {
        fn check(name: &str, words: &[String]) -> CoreResult<()> {
            if words.is_empty() {
                return Err(CoreError::InvalidInput(format!(
                    "keyword table '{name}' cannot be empty"
                )));
            }
            if words.iter().any(|w| w.is_empty()) {
                return Err(CoreError::InvalidInput(format!(
                    "keyword table '{name}' contains a blank keyword"
                )));
            }
            Ok(())
        }

        check("emergency", &self.emergency)?;
        check("severe", &self.severe)?;
        check("crisis", &self.crisis)?;
        check("mental_health", &self.mental_health)?;

        if self.topics.is_empty() {
            return Err(CoreError::InvalidInput(
                "keyword table 'topics' cannot be empty".into(),
            ));
        }
        for (i, entry) in self.topics.iter().enumerate() {
            if self.topics[..i].iter().any(|t| t.topic == entry.topic) {
                return Err(CoreError::InvalidInput(format!(
                    "topic {:?} is listed more than once",
                    entry.topic
                )));
            }
            check("topics", &entry.keywords)?;
        }

        Ok(())
    }
}

/// Returns the first keyword contained in `text`, compared case-insensitively.
pub fn first_match<'a>(text: &str, keywords: &'a [String]) -> Option<&'a str> {
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .map(String::as_str)
        .find(|keyword| lowered.contains(keyword))
}

/// Whether `text` contains any of `keywords`, compared case-insensitively.
pub fn contains_any(text: &str, keywords: &[String]) -> bool {
    first_match(text, keywords).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_compiled_tables() {
        let tables = KeywordTables::default();
        assert_eq!(tables.emergency().len(), 11);
        assert_eq!(tables.severe().len(), 8);
        assert_eq!(tables.crisis().len(), 10);
        let order: Vec<ChatTopic> = tables.topics().iter().map(|t| t.topic).collect();
        assert_eq!(
            order,
            vec![ChatTopic::ColdFlu, ChatTopic::Headache, ChatTopic::Pain]
        );
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let words = owned(&["chest pain"]);
        assert!(contains_any("Sharp CHEST PAIN since noon", &words));
        assert!(contains_any("chest painful", &words));
        assert!(!contains_any("chest ache", &words));
    }

    #[test]
    fn first_match_respects_table_order() {
        let words = owned(&["pain", "severe pain"]);
        assert_eq!(first_match("severe pain", &words), Some("pain"));
        assert_eq!(first_match("nothing here", &words), None);
    }

    #[test]
    fn yaml_override_replaces_only_listed_tables() {
        let yaml = r#"crisis:
  - "  Overdose "
  - help me
"#;
        let tables = KeywordTables::from_yaml_str(yaml).expect("parse override");
        assert_eq!(tables.crisis(), &["overdose".to_string(), "help me".to_string()]);
        assert_eq!(tables.emergency(), KeywordTables::default().emergency());
    }

    #[test]
    fn yaml_override_reorders_topics() {
        let yaml = r#"topics:
  - topic: pain
    keywords: [pain]
  - topic: cold_flu
    keywords: [cold, flu]
"#;
        let tables = KeywordTables::from_yaml_str(yaml).expect("parse override");
        assert_eq!(tables.topics()[0].topic, ChatTopic::Pain);
        assert_eq!(tables.topics().len(), 2);
    }

    #[test]
    fn yaml_override_rejects_unknown_keys_with_path() {
        let err = KeywordTables::from_yaml_str("unexpected_table: [a]\n")
            .expect_err("should reject unknown key");
        match err {
            CoreError::RulesFileSchema(msg) => assert!(msg.contains("unexpected_table")),
            other => panic!("expected RulesFileSchema error, got {other:?}"),
        }
    }

    #[test]
    fn yaml_override_rejects_empty_and_blank_tables() {
        let err = KeywordTables::from_yaml_str("severe: []\n").expect_err("empty table");
        assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("'severe'")));

        let err = KeywordTables::from_yaml_str("severe: ['  ']\n").expect_err("blank keyword");
        assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("blank keyword")));
    }

    #[test]
    fn yaml_override_rejects_duplicate_topics() {
        let yaml = r#"topics:
  - topic: pain
    keywords: [pain]
  - topic: pain
    keywords: [ache]
"#;
        let err = KeywordTables::from_yaml_str(yaml).expect_err("duplicate topic");
        assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("more than once")));
    }

    #[test]
    fn from_file_reads_override() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "mental_health: [stress]").expect("write");
        let tables = KeywordTables::from_file(file.path()).expect("load file");
        assert_eq!(tables.mental_health(), &["stress".to_string()]);
    }

    #[test]
    fn from_file_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = KeywordTables::from_file(&dir.path().join("missing.yaml"))
            .expect_err("missing file");
        assert!(matches!(err, CoreError::RulesFileRead(_)));
    }
}
