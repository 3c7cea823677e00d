//! Validation report assembly

use crate::finding::{Finding, Severity};
use chrono::NaiveDate;
use deedcheck_domain::{Amount, ExtractedFields};
use serde::Serialize;

/// Overall verdict for a deed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// No critical findings
    Approved,

    /// At least one critical finding
    Rejected,
}

impl ReportStatus {
    /// Status as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Approved => "APPROVED",
            ReportStatus::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit view of a deed: extracted fields plus county enrichment
///
/// Absent values are omitted from the serialized form, except `doc_id`,
/// which downstream consumers key on and is always emitted (null if missing).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeedRecord {
    /// Document identifier
    pub doc_id: Option<String>,

    /// County as written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_raw: Option<String>,

    /// Canonical county name from the reference table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_normalized: Option<String>,

    /// Two-letter state code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Signing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_signed: Option<NaiveDate>,

    /// Recording date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_recorded: Option<NaiveDate>,

    /// Seller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grantor: Option<String>,

    /// Buyer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grantee: Option<String>,

    /// Amount as a numeral
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_numeric: Option<Amount>,

    /// Amount as written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_written: Option<String>,

    /// Assessor's parcel number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn: Option<String>,

    /// Document status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Tax rate of the resolved county
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
}

impl From<&ExtractedFields> for DeedRecord {
    fn from(fields: &ExtractedFields) -> Self {
        Self {
            doc_id: fields.doc_id.clone(),
            county_raw: fields.county_raw.clone(),
            county_normalized: None,
            state: fields.state.clone(),
            date_signed: fields.date_signed,
            date_recorded: fields.date_recorded,
            grantor: fields.grantor.clone(),
            grantee: fields.grantee.clone(),
            amount_numeric: fields.amount_numeric,
            amount_written: fields.amount_written.clone(),
            apn: fields.apn.clone(),
            status: fields.status.clone(),
            tax_rate: None,
        }
    }
}

/// Rendered findings, split by severity
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationSummary {
    /// Critical findings, in check order
    pub errors: Vec<String>,

    /// Non-blocking findings, in check order
    pub warnings: Vec<String>,

    /// Number of errors
    pub error_count: usize,

    /// Number of warnings
    pub warning_count: usize,
}

/// Final, self-describing result for one deed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// APPROVED unless there is at least one error
    pub status: ReportStatus,

    /// Audit view of the deed
    pub deed: DeedRecord,

    /// Errors and warnings as strings
    pub validation_summary: ValidationSummary,

    /// Typed findings behind the summary strings
    #[serde(skip)]
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Assemble a report; the status follows from the findings
    pub fn new(deed: DeedRecord, findings: Vec<Finding>) -> Self {
        let mut summary = ValidationSummary::default();
        for finding in &findings {
            match finding.severity() {
                Severity::Critical => summary.errors.push(finding.to_string()),
                Severity::Warning => summary.warnings.push(finding.to_string()),
            }
        }
        summary.error_count = summary.errors.len();
        summary.warning_count = summary.warnings.len();

        let status = if summary.errors.is_empty() {
            ReportStatus::Approved
        } else {
            ReportStatus::Rejected
        };

        Self {
            status,
            deed,
            validation_summary: summary,
            findings,
        }
    }

    /// Whether the deed was approved
    pub fn is_approved(&self) -> bool {
        self.status == ReportStatus::Approved
    }

    /// Error strings
    pub fn errors(&self) -> &[String] {
        &self.validation_summary.errors
    }

    /// Warning strings
    pub fn warnings(&self) -> &[String] {
        &self.validation_summary.warnings
    }

    /// Pretty-printed JSON for downstream consumers
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
