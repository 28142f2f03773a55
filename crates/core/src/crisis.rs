//! Crisis interception for free-text chat input.
//!
//! Runs before any other chat handling. When it fires the caller must skip normal reply
//! generation and send [`CRISIS_RESPONSE`] instead.

use crate::keywords::{first_match, KeywordTables};

pub use crate::templates::CRISIS_RESPONSE;

/// Scans text for crisis or emergency language.
#[derive(Clone, Debug)]
pub struct CrisisInterceptor<'a> {
    tables: &'a KeywordTables,
}

impl<'a> CrisisInterceptor<'a> {
    pub fn new(tables: &'a KeywordTables) -> Self {
        Self { tables }
    }

    /// The first crisis keyword contained in `text`, if any.
    pub fn matched_keyword(&self, text: &str) -> Option<&'a str> {
        let tables: &'a KeywordTables = self.tables;
        first_match(text, tables.crisis())
    }

    /// Whether `text` must be intercepted.
    ///
    /// Case-insensitive substring containment with no word-boundary checks.
    pub fn intercepts(&self, text: &str) -> bool {
        self.matched_keyword(text).is_some()
    }
}
