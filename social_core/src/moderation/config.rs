//! Moderation configuration, loadable from TOML.

use serde::{Deserialize, Serialize};

use post_model::{BlogError, Result};

use super::{ContentFilter, ModerationHook, RedactionPolicy};

/// Configuration for the built-in moderation behaviors.
///
/// ```toml
/// banned_phrases = ["darn", "heck"]
/// report_threshold = 3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// Phrases replaced with the redaction marker on creation.
    pub banned_phrases: Vec<String>,

    /// Distinct reports needed before a post is auto-redacted.
    pub report_threshold: usize,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            banned_phrases: Vec::new(),
            report_threshold: RedactionPolicy::DEFAULT_THRESHOLD,
        }
    }
}

impl ModerationConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        toml::from_str(document)
            .map_err(|e| BlogError::InvalidArgument(format!("bad moderation config: {e}")))
    }

    /// Build the hook set this configuration describes: a content filter
    /// (when any phrase is configured) followed by the redaction policy.
    pub fn hooks(&self) -> Result<Vec<Box<dyn ModerationHook>>> {
        let mut hooks: Vec<Box<dyn ModerationHook>> = Vec::new();
        if !self.banned_phrases.is_empty() {
            hooks.push(Box::new(ContentFilter::new(self.banned_phrases.clone())?));
        }
        hooks.push(Box::new(RedactionPolicy::new(self.report_threshold)));
        Ok(hooks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ModerationConfig::default();
        assert!(config.banned_phrases.is_empty());
        assert_eq!(config.report_threshold, 5);
    }

    #[test]
    fn test_from_toml() {
        let config = ModerationConfig::from_toml_str(
            r#"
            banned_phrases = ["darn", "heck"]
            report_threshold = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.banned_phrases, ["darn", "heck"]);
        assert_eq!(config.report_threshold, 3);
        assert_eq!(config.hooks().unwrap().len(), 2);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = ModerationConfig::from_toml_str(r#"banned_phrases = ["darn"]"#).unwrap();
        assert_eq!(config.report_threshold, 5);
    }

    #[test]
    fn test_bad_toml_is_invalid_argument() {
        assert!(matches!(
            ModerationConfig::from_toml_str("report_threshold = \"lots\""),
            Err(BlogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_blank_phrase_rejected_when_building_hooks() {
        let config = ModerationConfig {
            banned_phrases: vec!["  ".into()],
            report_threshold: 5,
        };
        assert!(config.hooks().is_err());
    }
}
