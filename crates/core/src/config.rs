//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into [`crate::TriageService`].
//! Nothing in this crate reads environment variables; binaries resolve them and hand the values
//! in here.

use std::path::{Path, PathBuf};

use crate::keywords::KeywordTables;
use crate::CoreResult;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    keyword_tables: KeywordTables,
    rules_source: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig` from already-validated keyword tables.
    pub fn new(keyword_tables: KeywordTables) -> Self {
        Self {
            keyword_tables,
            rules_source: None,
        }
    }

    /// Build the configuration, loading keyword tables from `rules_file` when given.
    ///
    /// # Errors
    ///
    /// Returns any error from [`KeywordTables::from_file`].
    pub fn resolve(rules_file: Option<PathBuf>) -> CoreResult<Self> {
        let keyword_tables = resolve_keyword_tables(rules_file.as_deref())?;
        Ok(Self {
            keyword_tables,
            rules_source: rules_file,
        })
    }

    pub fn keyword_tables(&self) -> &KeywordTables {
        &self.keyword_tables
    }

    /// Path the keyword tables were loaded from, or `None` for the compiled-in defaults.
    pub fn rules_source(&self) -> Option<&Path> {
        self.rules_source.as_deref()
    }
}

/// Resolve keyword tables without reading environment variables.
///
/// With no override the compiled-in defaults are used.
pub fn resolve_keyword_tables(override_file: Option<&Path>) -> CoreResult<KeywordTables> {
    match override_file {
        Some(path) => {
            let tables = KeywordTables::from_file(path)?;
            tracing::info!(path = %path.display(), "loaded keyword rules override");
            Ok(tables)
        }
        None => Ok(KeywordTables::default()),
    }
}

/// Parse an optional rules-file setting. Empty or whitespace-only values mean "no override".
pub fn rules_file_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
