//! Deed sanity checks

use crate::config::CheckerConfig;
use crate::finding::Finding;
use crate::report::{DeedRecord, ValidationReport};
use crate::words::parse_amount_words;
use crate::CheckerError;
use deedcheck_domain::ExtractedFields;
use deedcheck_resolver::CountyResolver;
use tracing::{debug, info};

/// The Deed Checker runs every sanity rule over a deed's extracted fields
///
/// Checks are independent and never short-circuit: each applicable rule
/// contributes its findings, and the verdict is computed from all of them.
#[derive(Debug, Clone)]
pub struct DeedChecker {
    config: CheckerConfig,
}

impl DeedChecker {
    /// Create a new checker with the given configuration
    pub fn new(config: CheckerConfig) -> Result<Self, CheckerError> {
        config.validate().map_err(CheckerError::Config)?;
        Ok(Self { config })
    }

    /// Create a checker with default configuration
    pub fn default_config() -> Self {
        Self {
            config: CheckerConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check a deed and assemble its report
    ///
    /// # Arguments
    ///
    /// * `fields` - Fields extracted from the deed
    /// * `resolver` - Resolver over the county reference table
    pub fn check(&self, fields: &ExtractedFields, resolver: &CountyResolver) -> ValidationReport {
        let mut deed = DeedRecord::from(fields);
        let mut findings = Vec::new();

        // 1. Completeness
        findings.extend(self.check_completeness(fields));

        // 2. County enrichment
        if let Some(finding) = self.enrich_county(fields, resolver, &mut deed) {
            findings.push(finding);
        }

        // 3. Date logic
        if let Some(finding) = self.check_dates(fields) {
            findings.push(finding);
        }

        // 4. Amount reconciliation
        if let Some(finding) = self.check_amounts(fields) {
            findings.push(finding);
        }

        let report = ValidationReport::new(deed, findings);
        info!(
            doc_id = report.deed.doc_id.as_deref().unwrap_or("<none>"),
            status = %report.status,
            errors = report.validation_summary.error_count,
            warnings = report.validation_summary.warning_count,
            "Deed checked"
        );
        report
    }

    /// One warning per missing required field
    fn check_completeness(&self, fields: &ExtractedFields) -> Vec<Finding> {
        let missing = fields.missing(&self.config.required_fields);
        debug!(missing = missing.len(), "Completeness check");
        missing.into_iter().map(Finding::MissingField).collect()
    }

    /// Resolve the county and copy its name and tax rate into the deed
    fn enrich_county(
        &self,
        fields: &ExtractedFields,
        resolver: &CountyResolver,
        deed: &mut DeedRecord,
    ) -> Option<Finding> {
        let raw = fields.county_raw.as_deref()?;
        let resolution = resolver.resolve(raw);
        debug!(
            county = raw,
            method = %resolution.method,
            confidence = resolution.confidence,
            "County enrichment"
        );

        let Some(record) = &resolution.matched_record else {
            return Some(Finding::CountyUnresolved {
                raw: raw.to_string(),
            });
        };

        deed.county_normalized = Some(record.name.clone());
        deed.tax_rate = Some(record.tax_rate);

        if resolution.is_low_confidence(self.config.low_confidence_threshold) {
            return Some(Finding::LowConfidenceCounty {
                raw: raw.to_string(),
                matched: record.name.clone(),
                confidence: resolution.confidence,
            });
        }
        None
    }

    /// A deed cannot be recorded before it is signed; equal dates pass
    fn check_dates(&self, fields: &ExtractedFields) -> Option<Finding> {
        let (signed, recorded) = (fields.date_signed?, fields.date_recorded?);
        debug!(%signed, %recorded, "Date logic check");

        if recorded < signed {
            return Some(Finding::DateLogic { signed, recorded });
        }
        None
    }

    /// Numeric and written amounts must agree within tolerance
    fn check_amounts(&self, fields: &ExtractedFields) -> Option<Finding> {
        let numeric = fields.amount_numeric?;
        let written = fields.amount_written.as_deref()?;

        let parsed = match parse_amount_words(written) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(written, error = %e, "Written amount not parseable");
                return Some(Finding::UnparsableWrittenAmount {
                    written: written.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let discrepancy = numeric.abs_diff(parsed);
        let exceeds = self
            .config
            .exceeds_tolerance(numeric.cents(), discrepancy.cents());
        debug!(
            numeric = %numeric,
            parsed = %parsed,
            discrepancy = %discrepancy,
            exceeds,
            "Amount reconciliation"
        );

        if !exceeds {
            return None;
        }

        // A zero numeral cannot carry a relative discrepancy; report it as total
        let percent = if numeric.cents() == 0 {
            100.0
        } else {
            discrepancy.cents() as f64 / numeric.cents() as f64 * 100.0
        };

        Some(Finding::AmountMismatch {
            numeric,
            written: written.to_string(),
            parsed,
            discrepancy,
            percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use deedcheck_domain::{Amount, CountyRecord, RequiredField};
    use deedcheck_resolver::CountyTable;
    use std::sync::Arc;

    fn create_test_resolver() -> CountyResolver {
        let table = CountyTable::new(vec![
            CountyRecord::new("Santa Clara", 0.012),
            CountyRecord::new("San Mateo", 0.011),
            CountyRecord::new("Alameda", 0.013),
        ])
        .unwrap();
        CountyResolver::with_defaults(Arc::new(table))
    }

    fn create_test_fields() -> ExtractedFields {
        ExtractedFields {
            doc_id: Some("DEED-TRUST-0042".to_string()),
            county_raw: Some("S. Clara".to_string()),
            state: Some("CA".to_string()),
            date_signed: NaiveDate::from_ymd_opt(2024, 1, 15),
            date_recorded: NaiveDate::from_ymd_opt(2024, 1, 15),
            grantor: Some("T.E.S.L.A. Holdings LLC".to_string()),
            grantee: Some("John & Sarah Connor".to_string()),
            amount_numeric: Some(Amount::from_cents(125_000_000)),
            amount_written: Some("One Million Two Hundred Fifty Thousand Dollars".to_string()),
            apn: Some("992-001-XA".to_string()),
            status: Some("PRELIMINARY".to_string()),
        }
    }

    #[test]
    fn test_valid_deed() {
        let checker = DeedChecker::default_config();
        let report = checker.check(&create_test_fields(), &create_test_resolver());

        assert!(report.is_approved());
        assert!(report.findings.is_empty());
        assert_eq!(report.deed.county_normalized.as_deref(), Some("Santa Clara"));
        assert_eq!(report.deed.tax_rate, Some(0.012));
    }

    #[test]
    fn test_recorded_before_signed() {
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();
        fields.date_recorded = NaiveDate::from_ymd_opt(2024, 1, 10);

        let report = checker.check(&fields, &create_test_resolver());

        assert!(!report.is_approved());
        assert_eq!(report.errors().len(), 1);
        match &report.findings[0] {
            Finding::DateLogic { signed, recorded } => {
                assert_eq!(signed.to_string(), "2024-01-15");
                assert_eq!(recorded.to_string(), "2024-01-10");
            }
            other => panic!("Expected DateLogic, got {:?}", other),
        }
    }

    #[test]
    fn test_amount_mismatch() {
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();
        fields.amount_written = Some("One Million Two Hundred Thousand Dollars".to_string());

        let report = checker.check(&fields, &create_test_resolver());

        assert!(!report.is_approved());
        match &report.findings[0] {
            Finding::AmountMismatch {
                parsed,
                discrepancy,
                percent,
                ..
            } => {
                assert_eq!(parsed.cents(), 120_000_000);
                assert_eq!(discrepancy.to_string(), "$50,000.00");
                assert!((percent - 4.0).abs() < 1e-9);
            }
            other => panic!("Expected AmountMismatch, got {:?}", other),
        }
        assert!(report.errors()[0].contains("$50,000.00 (4.00%)"));
    }

    #[test]
    fn test_small_discrepancy_within_tolerance() {
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();
        // $1,250,000.50 vs $1,250,000 is below the $1.00 floor
        fields.amount_numeric = Some(Amount::from_cents(125_000_050));

        let report = checker.check(&fields, &create_test_resolver());
        assert!(report.is_approved());
    }

    #[test]
    fn test_strict_config_rejects_small_discrepancy() {
        let checker = DeedChecker::new(CheckerConfig::strict()).unwrap();
        let mut fields = create_test_fields();
        fields.amount_numeric = Some(Amount::from_cents(125_000_050));

        let report = checker.check(&fields, &create_test_resolver());
        assert!(!report.is_approved());
    }

    #[test]
    fn test_lenient_config_accepts_four_percent() {
        let checker = DeedChecker::new(CheckerConfig::lenient()).unwrap();
        let mut fields = create_test_fields();
        fields.amount_written = Some("One Million Two Hundred Thousand Dollars".to_string());

        let report = checker.check(&fields, &create_test_resolver());
        assert!(report.is_approved());
    }

    #[test]
    fn test_unparsable_written_amount_is_warning() {
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();
        fields.amount_written = Some("One Point Two Five Million".to_string());

        let report = checker.check(&fields, &create_test_resolver());

        assert!(report.is_approved());
        assert_eq!(report.warnings().len(), 1);
        assert!(report.warnings()[0].starts_with("Could not verify written amount"));
        assert!(report.warnings()[0].contains("'point'"));
    }

    #[test]
    fn test_unresolved_county_is_warning() {
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();
        fields.county_raw = Some("Xyzzy".to_string());

        let report = checker.check(&fields, &create_test_resolver());

        assert!(report.is_approved());
        assert_eq!(
            report.findings,
            vec![Finding::CountyUnresolved {
                raw: "Xyzzy".to_string()
            }]
        );
        assert!(report.deed.county_normalized.is_none());
        assert!(report.deed.tax_rate.is_none());
    }

    #[test]
    fn test_low_confidence_county_is_warning() {
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();
        fields.county_raw = Some("Alamda".to_string());

        let report = checker.check(&fields, &create_test_resolver());

        assert!(report.is_approved());
        assert_eq!(report.deed.county_normalized.as_deref(), Some("Alameda"));
        assert_eq!(report.deed.tax_rate, Some(0.013));
        assert_eq!(report.warnings(), ["Low confidence county match: 86%"]);
    }

    #[test]
    fn test_low_confidence_bounds() {
        let table = CountyTable::new(vec![CountyRecord::new("Abcdefghij", 0.01)]).unwrap();
        let resolver = CountyResolver::with_defaults(Arc::new(table));
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();

        // Four edits in ten characters sits on the fuzzy threshold
        fields.county_raw = Some("Abcdefwxyz".to_string());
        let report = checker.check(&fields, &resolver);
        assert!(report.is_approved());
        assert_eq!(report.deed.county_normalized.as_deref(), Some("Abcdefghij"));
        assert_eq!(report.warnings(), ["Low confidence county match: 60%"]);

        // One edit sits on the low-confidence threshold
        fields.county_raw = Some("Abcdefghiz".to_string());
        let report = checker.check(&fields, &resolver);
        assert_eq!(report.deed.county_normalized.as_deref(), Some("Abcdefghij"));
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_amount_tolerance_bound() {
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();
        fields.amount_numeric = Some(Amount::from_cents(100_000_000));

        // Exactly 1% of $1,000,000.00
        fields.amount_written = Some("One Million Ten Thousand Dollars".to_string());
        let report = checker.check(&fields, &create_test_resolver());
        assert!(report.is_approved());
        assert!(!report
            .findings
            .iter()
            .any(|f| matches!(f, Finding::AmountMismatch { .. })));

        fields.amount_written = Some("One Million Ten Thousand Dollars and One Cent".to_string());
        let report = checker.check(&fields, &create_test_resolver());
        assert!(!report.is_approved());
        match &report.findings[..] {
            [Finding::AmountMismatch { discrepancy, .. }] => {
                assert_eq!(discrepancy.cents(), 1_000_001);
            }
            other => panic!("Expected one AmountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_are_independent_warnings() {
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();
        fields.doc_id = None;
        fields.apn = None;
        fields.date_signed = None;

        let report = checker.check(&fields, &create_test_resolver());

        assert!(report.is_approved());
        assert_eq!(
            report.warnings(),
            [
                "Missing required field: doc_id",
                "Missing required field: date_signed"
            ]
        );
    }

    #[test]
    fn test_configured_required_fields() {
        let mut config = CheckerConfig::default();
        config.required_fields.push(RequiredField::Apn);
        let checker = DeedChecker::new(config).unwrap();

        let mut fields = create_test_fields();
        fields.doc_id = None;
        fields.apn = None;

        let report = checker.check(&fields, &create_test_resolver());

        assert!(report.is_approved());
        assert_eq!(
            report.warnings(),
            ["Missing required field: doc_id", "Missing required field: apn"]
        );
    }

    #[test]
    fn test_all_checks_run() {
        let checker = DeedChecker::default_config();
        let mut fields = create_test_fields();
        fields.doc_id = None;
        fields.county_raw = Some("Alamda".to_string());
        fields.date_recorded = NaiveDate::from_ymd_opt(2023, 12, 31);
        fields.amount_written = Some("Two Million Dollars".to_string());

        let report = checker.check(&fields, &create_test_resolver());

        assert_eq!(report.validation_summary.error_count, 2);
        assert_eq!(report.validation_summary.warning_count, 2);
        assert!(report.errors()[0].contains("Date logic violation"));
        assert!(report.errors()[1].contains("Amount mismatch"));
    }

    #[test]
    fn test_empty_fields() {
        let checker = DeedChecker::default_config();
        let report = checker.check(&ExtractedFields::default(), &create_test_resolver());

        assert!(report.is_approved());
        assert_eq!(report.warnings().len(), RequiredField::DEFAULT.len());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = CheckerConfig {
            low_confidence_threshold: -1.0,
            ..Default::default()
        };
        assert!(matches!(DeedChecker::new(config), Err(CheckerError::Config(_))));
    }
}
