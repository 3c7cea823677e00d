//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use deedcheck_checker::{DeedRecord, ReportStatus, ValidationReport};
use deedcheck_domain::ExtractedFields;
use deedcheck_resolver::ResolutionResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a validation report.
    pub fn format_report(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(report.to_json_pretty()?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report.status.to_string()),
        }
    }

    /// Format extracted fields.
    pub fn format_fields(&self, fields: &ExtractedFields) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(fields)?),
            OutputFormat::Table => {
                if fields.is_empty() {
                    return Ok(self.colorize("No fields found.", "yellow"));
                }
                Ok(field_table(&deed_rows(&DeedRecord::from(fields))))
            }
            OutputFormat::Quiet => Ok(fields.doc_id.clone().unwrap_or_default()),
        }
    }

    /// Format a county resolution.
    pub fn format_resolution(&self, input: &str, result: &ResolutionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "input": input,
                    "matched_record": result.matched_record,
                    "confidence": result.confidence,
                    "method": result.method,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let Some(record) = &result.matched_record else {
                    return Ok(self.warning(&format!("No county matches '{}'", input)));
                };
                let rows = vec![
                    ("Input", Some(input.to_string())),
                    ("County", Some(record.name.clone())),
                    ("Tax rate", Some(record.tax_rate.to_string())),
                    ("Confidence", Some(format!("{:.2}", result.confidence))),
                    ("Method", Some(result.method.to_string())),
                ];
                Ok(field_table(&rows))
            }
            OutputFormat::Quiet => Ok(result
                .matched_record
                .as_ref()
                .map(|r| r.name.clone())
                .unwrap_or_default()),
        }
    }

    /// Format a report as a table followed by its findings.
    fn format_report_table(&self, report: &ValidationReport) -> String {
        let mut lines = vec![field_table(&deed_rows(&report.deed))];

        let summary = &report.validation_summary;
        let verdict = format!(
            "{} ({} error(s), {} warning(s))",
            report.status, summary.error_count, summary.warning_count
        );
        lines.push(match report.status {
            ReportStatus::Approved => self.success(&verdict),
            ReportStatus::Rejected => self.error(&verdict),
        });

        for error in &summary.errors {
            lines.push(self.colorize(&format!("  {}", error), "red"));
        }
        for warning in &summary.warnings {
            lines.push(self.warning(warning));
        }

        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Display rows for a deed, in report order.
fn deed_rows(deed: &DeedRecord) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("Document", deed.doc_id.clone()),
        ("County (raw)", deed.county_raw.clone()),
        ("County", deed.county_normalized.clone()),
        ("State", deed.state.clone()),
        ("Signed", deed.date_signed.map(|d| d.to_string())),
        ("Recorded", deed.date_recorded.map(|d| d.to_string())),
        ("Grantor", deed.grantor.clone()),
        ("Grantee", deed.grantee.clone()),
        ("Amount", deed.amount_numeric.map(|a| a.to_string())),
        ("Amount (written)", deed.amount_written.clone()),
        ("APN", deed.apn.clone()),
        ("Status", deed.status.clone()),
        ("Tax rate", deed.tax_rate.map(|r| r.to_string())),
    ]
}

fn field_table(rows: &[(&str, Option<String>)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);

    for (label, value) in rows {
        builder.push_record([*label, value.as_deref().unwrap_or("-")]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
