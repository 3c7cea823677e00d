//! Extraction rules
//!
//! Each rule looks for one label in the text and, when it finds a readable
//! value, writes it into [`ExtractedFields`]. Rules never fail: a label that
//! is missing or a value that does not fit its shape leaves the field unset.

use crate::error::ExtractorError;
use chrono::NaiveDate;
use deedcheck_domain::{Amount, ExtractedFields};
use regex::Regex;

/// A single field extraction rule
pub trait FieldRule: Send + Sync {
    /// Rule name used in logs
    fn name(&self) -> &'static str;

    /// Apply the rule to `text`, returning whether anything was written
    fn apply(&self, text: &str, fields: &mut ExtractedFields) -> bool;
}

/// Setter for a text-valued field
pub type TextSetter = fn(&mut ExtractedFields, String);

/// Setter for a date-valued field
pub type DateSetter = fn(&mut ExtractedFields, NaiveDate);

/// Captures a whitespace-free token
pub const TOKEN_VALUE: &str = r"([^\s|()]+)";

/// Captures free text up to a line break, pipe or parenthesis
pub const TEXT_VALUE: &str = r"([^|\n()]+)";

/// Captures exactly two letters
pub const STATE_VALUE: &str = r"([A-Za-z]{2})\b";

/// Build a case-insensitive `Label: value` pattern
///
/// The label may carry one parenthesised qualifier before the colon,
/// e.g. `Grantor (Seller): ...`.
pub fn labeled_pattern(rule: &str, label: &str, value: &str) -> Result<Regex, ExtractorError> {
    let pattern = format!(r"(?i)\b{label}(?:[ \t]*\([^)\n]*\))?[ \t]*:[ \t]*{value}");
    Regex::new(&pattern).map_err(|source| ExtractorError::InvalidPattern {
        rule: rule.to_string(),
        source,
    })
}

fn clean(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Rule for a field captured as text
pub struct TextRule {
    name: &'static str,
    pattern: Regex,
    setter: TextSetter,
    uppercase: bool,
}

impl TextRule {
    /// Create a rule for `label`, capturing with `value`
    pub fn new(
        name: &'static str,
        label: &str,
        value: &str,
        setter: TextSetter,
    ) -> Result<Self, ExtractorError> {
        Ok(Self {
            name,
            pattern: labeled_pattern(name, label, value)?,
            setter,
            uppercase: false,
        })
    }

    /// Upper-case the captured value
    pub fn uppercased(mut self) -> Self {
        self.uppercase = true;
        self
    }
}

impl FieldRule for TextRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str, fields: &mut ExtractedFields) -> bool {
        let value = self
            .pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| clean(m.as_str()));

        match value {
            Some(v) => {
                let v = if self.uppercase { v.to_uppercase() } else { v };
                (self.setter)(fields, v);
                true
            }
            None => false,
        }
    }
}

/// Rule for a `YYYY-MM-DD` date field
pub struct DateRule {
    name: &'static str,
    pattern: Regex,
    shape: Regex,
    setter: DateSetter,
}

impl DateRule {
    /// Create a date rule for `label`
    pub fn new(name: &'static str, label: &str, setter: DateSetter) -> Result<Self, ExtractorError> {
        let shape = Regex::new(r"^\d{4}-\d{2}-\d{2}$").map_err(|source| {
            ExtractorError::InvalidPattern {
                rule: name.to_string(),
                source,
            }
        })?;

        Ok(Self {
            name,
            pattern: labeled_pattern(name, label, TEXT_VALUE)?,
            shape,
            setter,
        })
    }

    fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if !self.shape.is_match(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

impl FieldRule for DateRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str, fields: &mut ExtractedFields) -> bool {
        let date = self
            .pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| self.parse(m.as_str()));

        match date {
            Some(d) => {
                (self.setter)(fields, d);
                true
            }
            None => false,
        }
    }
}

/// Rule for the `Amount: <numeral> (<words>)` line
///
/// Fills `amount_numeric` and `amount_written` independently: an unreadable
/// numeral does not discard the written form and vice versa.
pub struct AmountRule {
    pattern: Regex,
}

impl AmountRule {
    /// Create the amount rule
    pub fn new() -> Result<Self, ExtractorError> {
        Ok(Self {
            pattern: labeled_pattern("amount", "Amount", r"([^|\n()]*)(?:\(([^)\n]*)\))?")?,
        })
    }
}

impl FieldRule for AmountRule {
    fn name(&self) -> &'static str {
        "amount"
    }

    fn apply(&self, text: &str, fields: &mut ExtractedFields) -> bool {
        let Some(caps) = self.pattern.captures(text) else {
            return false;
        };

        let numeric = caps
            .get(1)
            .and_then(|m| m.as_str().trim().parse::<Amount>().ok());
        let written = caps.get(2).and_then(|m| clean(m.as_str()));

        let matched = numeric.is_some() || written.is_some();
        if numeric.is_some() {
            fields.amount_numeric = numeric;
        }
        if written.is_some() {
            fields.amount_written = written;
        }
        matched
    }
}

/// The built-in rule set, in application order
pub fn standard_rules() -> Result<Vec<Box<dyn FieldRule>>, ExtractorError> {
    let rules: Vec<Box<dyn FieldRule>> = vec![
        Box::new(TextRule::new(
            "doc_id",
            r"Doc(?:ument)?(?:[ \t]*(?:ID|No\.?|Number|#))?",
            TOKEN_VALUE,
            |f, v| f.doc_id = Some(v),
        )?),
        Box::new(TextRule::new("county", "County", TEXT_VALUE, |f, v| {
            f.county_raw = Some(v)
        })?),
        Box::new(
            TextRule::new("state", "State", STATE_VALUE, |f, v| f.state = Some(v))?.uppercased(),
        ),
        Box::new(DateRule::new("date_signed", r"Date[ \t]+Signed", |f, d| {
            f.date_signed = Some(d)
        })?),
        Box::new(DateRule::new("date_recorded", r"Date[ \t]+Recorded", |f, d| {
            f.date_recorded = Some(d)
        })?),
        Box::new(TextRule::new("grantor", "Grantor", TEXT_VALUE, |f, v| {
            f.grantor = Some(v)
        })?),
        Box::new(TextRule::new("grantee", "Grantee", TEXT_VALUE, |f, v| {
            f.grantee = Some(v)
        })?),
        Box::new(AmountRule::new()?),
        Box::new(TextRule::new("apn", "APN", TEXT_VALUE, |f, v| f.apn = Some(v))?),
        Box::new(TextRule::new("status", "Status", TEXT_VALUE, |f, v| {
            f.status = Some(v)
        })?),
    ];
    Ok(rules)
}
