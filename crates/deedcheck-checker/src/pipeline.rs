//! Extract, resolve and check in one pass

use crate::checker::DeedChecker;
use crate::config::PipelineConfig;
use crate::report::ValidationReport;
use crate::CheckerError;
use deedcheck_domain::ExtractedFields;
use deedcheck_extractor::FieldExtractor;
use deedcheck_resolver::{CountyResolver, CountyTable};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Runs a deed through extraction, county resolution and the checks
///
/// All three stages are read-only after construction, so a pipeline can be
/// shared across threads and reused for any number of documents.
#[derive(Debug)]
pub struct DeedPipeline {
    extractor: FieldExtractor,
    resolver: CountyResolver,
    checker: DeedChecker,
}

impl DeedPipeline {
    /// Assemble a pipeline from its stages
    pub fn new(extractor: FieldExtractor, resolver: CountyResolver, checker: DeedChecker) -> Self {
        Self {
            extractor,
            resolver,
            checker,
        }
    }

    /// Standard rules and default thresholds over `table`
    pub fn with_defaults(table: Arc<CountyTable>) -> Result<Self, CheckerError> {
        Ok(Self::new(
            FieldExtractor::standard()?,
            CountyResolver::with_defaults(table),
            DeedChecker::default_config(),
        ))
    }

    /// Standard rules with thresholds from `config`
    pub fn from_config(table: Arc<CountyTable>, config: &PipelineConfig) -> Result<Self, CheckerError> {
        config.validate()?;
        Ok(Self::new(
            FieldExtractor::new(config.extractor.clone())?,
            CountyResolver::new(table, config.resolver.clone())?,
            DeedChecker::new(config.checker.clone())?,
        ))
    }

    /// Validate one OCR'd deed
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub fn process(&self, text: &str) -> ValidationReport {
        let fields = self.extract(text);
        debug!(
            doc_id = fields.doc_id.as_deref().unwrap_or("<none>"),
            "Fields extracted"
        );
        self.checker.check(&fields, &self.resolver)
    }

    /// Extraction stage only
    pub fn extract(&self, text: &str) -> ExtractedFields {
        self.extractor.extract(text)
    }

    /// Check stage
    pub fn checker(&self) -> &DeedChecker {
        &self.checker
    }
}
