use super::ErrorRecord;
use crate::rules::{CompiledRule, PatternCatalog};

/// Classifies source lines against a [`PatternCatalog`] and pulls the quoted
/// message out of the ones that match.
///
/// Holds no mutable state, so one searcher can be shared across threads.
pub struct ErrorSearcher {
    catalog: PatternCatalog,
}

impl ErrorSearcher {
    pub fn new() -> Self {
        Self::with_catalog(PatternCatalog::builtin())
    }

    pub fn with_catalog(catalog: PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn is_error_line(&self, line: &str) -> bool {
        self.catalog.is_match(line)
    }

    pub fn matching_rule(&self, line: &str) -> Option<&CompiledRule> {
        self.catalog.first_match(line)
    }

    pub fn extract_message<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.catalog.extract(line)
    }

    /// Scan the full text of one file.
    ///
    /// Lines are numbered from 1, blank lines included. A record is produced
    /// for a line only when it classifies as error-bearing and its first
    /// quoted literal is not blank.
    pub fn search(&self, content: &str, file_path: &str) -> Vec<ErrorRecord> {
        let mut records = Vec::new();

        for (index, line) in content.split('\n').enumerate() {
            let line_content = line.trim();
            if line_content.is_empty() {
                continue;
            }

            let Some(rule) = self.matching_rule(line_content) else {
                continue;
            };

            match self.extract_message(line_content) {
                Some(message) if !message.trim().is_empty() => {
                    tracing::trace!(
                        "{}:{} matched rule {} ({})",
                        file_path,
                        index + 1,
                        rule.id(),
                        rule.category()
                    );
                    records.push(ErrorRecord {
                        message: message.to_string(),
                        file_path: file_path.to_string(),
                        line_number: index + 1,
                        full_line: line_content.to_string(),
                    });
                }
                _ => {}
            }
        }

        records
    }
}

impl Default for ErrorSearcher {
    fn default() -> Self {
        Self::new()
    }
}
