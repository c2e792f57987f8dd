use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifier reported for an indexed file (relative path without extension)
pub type FileId = String;

/// What to do with a file that cannot be read during a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorPolicy {
    /// Fail the whole build once every task has finished
    #[default]
    Abort,
    /// Log the failure, leave the file out and report it
    Skip,
}

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub on_read_error: ReadErrorPolicy,
    /// Index the empty token produced by leading or trailing separators
    pub keep_empty_tokens: bool,
    /// Draw progress bars on stderr
    pub show_progress: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            on_read_error: ReadErrorPolicy::Abort,
            keep_empty_tokens: false,
            show_progress: false,
        }
    }
}

/// A file left out of the index under [`ReadErrorPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Summary of a successful build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub files_indexed: usize,
    pub skipped: Vec<SkippedFile>,
    pub token_count: usize,
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_aborts_and_drops_empty_tokens() {
        let config = IndexConfig::default();
        assert_eq!(config.on_read_error, ReadErrorPolicy::Abort);
        assert!(!config.keep_empty_tokens);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_policy_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ReadErrorPolicy::Skip).unwrap(), "\"skip\"");
        let policy: ReadErrorPolicy = serde_json::from_str("\"abort\"").unwrap();
        assert_eq!(policy, ReadErrorPolicy::Abort);
    }
}
