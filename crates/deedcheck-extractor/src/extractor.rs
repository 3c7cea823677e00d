//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::rules::{standard_rules, FieldRule};
use deedcheck_domain::ExtractedFields;
use tracing::{debug, warn};

/// The Extractor pulls labelled fields out of a deed's OCR text
///
/// Rules run in order over the same text. Each rule owns one label, so a
/// later rule never overwrites what an earlier one found unless both were
/// registered for the same field.
pub struct FieldExtractor {
    rules: Vec<Box<dyn FieldRule>>,
    config: ExtractorConfig,
}

impl FieldExtractor {
    /// Create an Extractor with no rules
    pub fn empty(config: ExtractorConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Create an Extractor with the built-in rule set
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            rules: standard_rules()?,
            config,
        })
    }

    /// Built-in rule set with default configuration
    pub fn standard() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// Append a rule after the existing ones
    pub fn with_rule(mut self, rule: impl FieldRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the registered rules, in application order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract fields from `text`
    ///
    /// Never fails. Unrecognised input yields an empty field set.
    pub fn extract(&self, text: &str) -> ExtractedFields {
        let text = self.truncate(text);
        let mut fields = ExtractedFields::default();

        for rule in &self.rules {
            let matched = rule.apply(text, &mut fields);
            debug!(rule = rule.name(), matched, "Applied extraction rule");
        }

        fields
    }

    fn truncate<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.config.max_text_length) {
            Some((cut, _)) => {
                warn!(
                    "Input exceeds {} chars, extracting from truncated text",
                    self.config.max_text_length
                );
                &text[..cut]
            }
            None => text,
        }
    }
}

impl std::fmt::Debug for FieldExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldExtractor")
            .field("rules", &self.rule_names())
            .field("config", &self.config)
            .finish()
    }
}
