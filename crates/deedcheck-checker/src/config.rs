//! Checker configuration

use deedcheck_domain::RequiredField;
use deedcheck_extractor::ExtractorConfig;
use deedcheck_resolver::ResolverConfig;
use serde::{Deserialize, Serialize};

use crate::CheckerError;

const PPM: u128 = 1_000_000;

/// Thresholds for the deed sanity checks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// County matches below this confidence (0.0-1.0) raise a warning
    pub low_confidence_threshold: f64,

    /// Allowed numeric/written discrepancy as a fraction of the numeric amount
    pub amount_relative_tolerance: f64,

    /// Allowed numeric/written discrepancy in dollars, whatever the amount
    pub amount_absolute_tolerance: f64,

    /// Fields whose absence raises a completeness warning, in report order
    pub required_fields: Vec<RequiredField>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            low_confidence_threshold: 0.9,
            amount_relative_tolerance: 0.01,
            amount_absolute_tolerance: 1.0,
            required_fields: RequiredField::DEFAULT.to_vec(),
        }
    }
}

impl CheckerConfig {
    /// Create a strict configuration (any discrepancy above one cent rejects)
    ///
    /// Also requires the parties, the written amount and the parcel number.
    pub fn strict() -> Self {
        let mut required_fields = RequiredField::DEFAULT.to_vec();
        required_fields.extend([
            RequiredField::Grantor,
            RequiredField::Grantee,
            RequiredField::AmountWritten,
            RequiredField::Apn,
        ]);

        Self {
            low_confidence_threshold: 0.95,
            amount_relative_tolerance: 0.0,
            amount_absolute_tolerance: 0.01,
            required_fields,
        }
    }

    /// Create a lenient configuration (tolerates rounding in the written form)
    pub fn lenient() -> Self {
        Self {
            low_confidence_threshold: 0.8,
            amount_relative_tolerance: 0.05,
            amount_absolute_tolerance: 100.0,
            ..Self::default()
        }
    }

    /// Absolute tolerance in whole cents
    pub fn absolute_tolerance_cents(&self) -> u64 {
        (self.amount_absolute_tolerance * 100.0).round() as u64
    }

    /// Relative tolerance in parts per million
    pub fn relative_tolerance_ppm(&self) -> u128 {
        (self.amount_relative_tolerance * PPM as f64).round() as u128
    }

    /// Whether `discrepancy_cents` on `numeric_cents` is beyond both bounds
    ///
    /// Both sides are compared in integers, so a discrepancy of exactly
    /// the relative or absolute bound is accepted.
    pub fn exceeds_tolerance(&self, numeric_cents: u64, discrepancy_cents: u64) -> bool {
        if discrepancy_cents <= self.absolute_tolerance_cents() {
            return false;
        }
        match u128::from(numeric_cents).checked_mul(self.relative_tolerance_ppm()) {
            Some(bound) => u128::from(discrepancy_cents) * PPM > bound,
            None => false,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.low_confidence_threshold) {
            return Err(format!(
                "low_confidence_threshold must be within [0.0, 1.0], got {}",
                self.low_confidence_threshold
            ));
        }
        if !self.amount_relative_tolerance.is_finite() || self.amount_relative_tolerance < 0.0 {
            return Err(format!(
                "amount_relative_tolerance must be a non-negative number, got {}",
                self.amount_relative_tolerance
            ));
        }
        if !self.amount_absolute_tolerance.is_finite() || self.amount_absolute_tolerance < 0.0 {
            return Err(format!(
                "amount_absolute_tolerance must be a non-negative number, got {}",
                self.amount_absolute_tolerance
            ));
        }
        for (i, field) in self.required_fields.iter().enumerate() {
            if self.required_fields[..i].contains(field) {
                return Err(format!("required_fields lists '{}' twice", field));
            }
        }
        Ok(())
    }
}

/// Configuration for the whole pipeline, one section per stage
///
/// ```toml
/// [extractor]
/// max_text_length = 100000
///
/// [resolver]
/// fuzzy_threshold = 0.6
///
/// [checker]
/// low_confidence_threshold = 0.9
/// amount_relative_tolerance = 0.01
/// amount_absolute_tolerance = 1.0
/// required_fields = ["doc_id", "county_raw", "date_signed", "date_recorded", "amount_numeric"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Field extraction settings
    pub extractor: ExtractorConfig,

    /// County resolution settings
    pub resolver: ResolverConfig,

    /// Sanity check settings
    pub checker: CheckerConfig,
}

impl PipelineConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), CheckerError> {
        self.extractor
            .validate()
            .map_err(|e| CheckerError::Config(format!("[extractor] {}", e)))?;
        self.resolver
            .validate()
            .map_err(|e| CheckerError::Config(format!("[resolver] {}", e)))?;
        self.checker
            .validate()
            .map_err(|e| CheckerError::Config(format!("[checker] {}", e)))?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, CheckerError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| CheckerError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, CheckerError> {
        toml::to_string_pretty(self)
            .map_err(|e| CheckerError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CheckerConfig::default();
        assert_eq!(config.low_confidence_threshold, 0.9);
        assert_eq!(config.amount_relative_tolerance, 0.01);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(CheckerConfig::strict().validate().is_ok());
        assert!(CheckerConfig::lenient().validate().is_ok());
        assert_eq!(CheckerConfig::strict().low_confidence_threshold, 0.95);
    }

    #[test]
    fn test_tolerance_uses_larger_bound() {
        let config = CheckerConfig::default();
        // 1% of $1,250,000.00
        assert!(!config.exceeds_tolerance(125_000_000, 1_250_000));
        assert!(config.exceeds_tolerance(125_000_000, 1_250_001));
        // $1.00 floor on a $10.00 amount
        assert!(!config.exceeds_tolerance(1_000, 100));
        assert!(config.exceeds_tolerance(1_000, 101));
    }

    #[test]
    fn test_tolerance_bound_is_exact() {
        let config = CheckerConfig {
            amount_relative_tolerance: 0.03,
            amount_absolute_tolerance: 0.0,
            ..CheckerConfig::default()
        };
        assert!(!config.exceeds_tolerance(10_000, 300));
        assert!(config.exceeds_tolerance(10_000, 301));
        assert_eq!(config.relative_tolerance_ppm(), 30_000);

        // 0.29 * 100.0 is 28.999999999999996 in f64
        let config = CheckerConfig {
            amount_relative_tolerance: 0.29,
            amount_absolute_tolerance: 0.0,
            ..CheckerConfig::default()
        };
        assert!(!config.exceeds_tolerance(100, 29));
        assert!(config.exceeds_tolerance(100, 30));

        let config = CheckerConfig {
            amount_relative_tolerance: 0.0,
            amount_absolute_tolerance: 0.29,
            ..CheckerConfig::default()
        };
        assert_eq!(config.absolute_tolerance_cents(), 29);
        assert!(!config.exceeds_tolerance(0, 29));
        assert!(config.exceeds_tolerance(0, 30));
    }

    #[test]
    fn test_huge_relative_tolerance_never_exceeds() {
        let config = CheckerConfig {
            amount_relative_tolerance: 1e30,
            ..CheckerConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.exceeds_tolerance(u64::MAX, u64::MAX));
    }

    #[test]
    fn test_invalid_values() {
        let mut config = CheckerConfig::default();
        config.low_confidence_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = CheckerConfig::default();
        config.amount_relative_tolerance = -0.01;
        assert!(config.validate().is_err());

        let mut config = CheckerConfig::default();
        config.amount_absolute_tolerance = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = CheckerConfig::default();
        config.required_fields.push(RequiredField::DocId);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_required_fields_from_toml() {
        let config =
            PipelineConfig::from_toml("[checker]\nrequired_fields = [\"doc_id\", \"apn\"]\n").unwrap();
        assert_eq!(
            config.checker.required_fields,
            vec![RequiredField::DocId, RequiredField::Apn]
        );
        assert_eq!(config.checker.amount_relative_tolerance, 0.01);
    }

    #[test]
    fn test_strict_requires_more_fields() {
        let strict = CheckerConfig::strict();
        assert!(strict.required_fields.contains(&RequiredField::Apn));
        assert_eq!(CheckerConfig::lenient().required_fields, RequiredField::DEFAULT.to_vec());
    }

    #[test]
    fn test_pipeline_toml_partial_sections() {
        let config = PipelineConfig::from_toml("[resolver]\nfuzzy_threshold = 0.7\n").unwrap();
        assert_eq!(config.resolver.fuzzy_threshold, 0.7);
        assert_eq!(config.checker.low_confidence_threshold, 0.9);
        assert_eq!(config.extractor.max_text_length, 100_000);
    }

    #[test]
    fn test_pipeline_toml_rejects_invalid_values() {
        let result = PipelineConfig::from_toml("[checker]\nlow_confidence_threshold = 3.0\n");
        assert!(matches!(result, Err(CheckerError::Config(msg)) if msg.contains("[checker]")));
    }

    #[test]
    fn test_pipeline_toml_round_trip() {
        let config = PipelineConfig {
            checker: CheckerConfig::lenient(),
            ..Default::default()
        };
        let parsed = PipelineConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.checker.amount_absolute_tolerance, 100.0);
        assert_eq!(parsed.checker.required_fields, RequiredField::DEFAULT.to_vec());
    }
}
