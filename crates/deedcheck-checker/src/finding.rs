//! Findings raised by the deed checks

use chrono::NaiveDate;
use deedcheck_domain::{Amount, RequiredField};
use std::fmt;

/// How a finding affects the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rejects the deed
    Critical,

    /// Routes the deed to manual review without rejecting it
    Warning,
}

/// One anomaly found in a deed
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// A required field was not extracted
    MissingField(RequiredField),

    /// The county name did not match any reference record
    CountyUnresolved {
        /// County as written
        raw: String,
    },

    /// The county matched, but not confidently
    LowConfidenceCounty {
        /// County as written
        raw: String,
        /// Matched record name
        matched: String,
        /// Match confidence (0.0-1.0)
        confidence: f64,
    },

    /// The written amount is outside the number-words grammar
    UnparsableWrittenAmount {
        /// Written amount as extracted
        written: String,
        /// Why it could not be read
        reason: String,
    },

    /// The deed was recorded before it was signed
    DateLogic {
        /// Signing date
        signed: NaiveDate,
        /// Recording date
        recorded: NaiveDate,
    },

    /// Numeric and written amounts disagree beyond tolerance
    AmountMismatch {
        /// Amount as a numeral
        numeric: Amount,
        /// Amount as written
        written: String,
        /// Value of the written amount
        parsed: Amount,
        /// Absolute difference
        discrepancy: Amount,
        /// Difference as a percentage of the numeric amount
        percent: f64,
    },
}

impl Finding {
    /// Severity of this finding
    pub fn severity(&self) -> Severity {
        match self {
            Finding::DateLogic { .. } | Finding::AmountMismatch { .. } => Severity::Critical,
            Finding::MissingField(_)
            | Finding::CountyUnresolved { .. }
            | Finding::LowConfidenceCounty { .. }
            | Finding::UnparsableWrittenAmount { .. } => Severity::Warning,
        }
    }

    /// Whether this finding rejects the deed
    pub fn is_critical(&self) -> bool {
        self.severity() == Severity::Critical
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MissingField(field) => write!(f, "Missing required field: {}", field),
            Finding::CountyUnresolved { raw } => {
                write!(f, "County could not be resolved: '{}'", raw)
            }
            Finding::LowConfidenceCounty { confidence, .. } => {
                write!(f, "Low confidence county match: {:.0}%", confidence * 100.0)
            }
            Finding::UnparsableWrittenAmount { written, reason } => {
                write!(f, "Could not verify written amount '{}': {}", written, reason)
            }
            Finding::DateLogic { signed, recorded } => write!(
                f,
                "CRITICAL: Date logic violation: recorded {} is before signed {}; \
                 a deed cannot be recorded before it is signed",
                recorded.format("%Y-%m-%d"),
                signed.format("%Y-%m-%d")
            ),
            Finding::AmountMismatch {
                numeric,
                written,
                parsed,
                discrepancy,
                percent,
            } => write!(
                f,
                "CRITICAL: Amount mismatch: numeric {} vs written '{}' ({}); \
                 discrepancy {} ({:.2}%)",
                numeric, written, parsed, discrepancy, percent
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severities() {
        assert_eq!(
            Finding::MissingField(RequiredField::DocId).severity(),
            Severity::Warning
        );
        let date = Finding::DateLogic {
            signed: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            recorded: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        };
        assert!(date.is_critical());
    }

    #[test]
    fn test_date_logic_message() {
        let finding = Finding::DateLogic {
            signed: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            recorded: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        };
        assert_eq!(
            finding.to_string(),
            "CRITICAL: Date logic violation: recorded 2024-01-10 is before signed 2024-01-15; \
             a deed cannot be recorded before it is signed"
        );
    }

    #[test]
    fn test_amount_mismatch_message() {
        let finding = Finding::AmountMismatch {
            numeric: Amount::from_cents(125_000_000),
            written: "One Million Two Hundred Thousand Dollars".to_string(),
            parsed: Amount::from_cents(120_000_000),
            discrepancy: Amount::from_cents(5_000_000),
            percent: 4.0,
        };
        assert_eq!(
            finding.to_string(),
            "CRITICAL: Amount mismatch: numeric $1,250,000.00 vs written \
             'One Million Two Hundred Thousand Dollars' ($1,200,000.00); \
             discrepancy $50,000.00 (4.00%)"
        );
    }

    #[test]
    fn test_low_confidence_rounds_percentage() {
        let finding = Finding::LowConfidenceCounty {
            raw: "Santa Clarita".to_string(),
            matched: "Santa Clara".to_string(),
            confidence: 1.0 - 2.0 / 13.0,
        };
        assert_eq!(finding.to_string(), "Low confidence county match: 85%");
    }

    #[test]
    fn test_missing_field_message() {
        let finding = Finding::MissingField(RequiredField::DateRecorded);
        assert_eq!(finding.to_string(), "Missing required field: date_recorded");
    }
}
