//! Extracted deed fields and the completeness set

use crate::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields pulled out of one deed's OCR text
///
/// Every field is optional. A field is `None` when its label was not found or
/// its value could not be read; absence is reported later as a completeness
/// warning, never as an extraction failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedFields {
    /// Document identifier token
    pub doc_id: Option<String>,

    /// County name exactly as written (possibly abbreviated or misspelled)
    pub county_raw: Option<String>,

    /// Two-letter state code
    pub state: Option<String>,

    /// Date the deed was signed
    pub date_signed: Option<NaiveDate>,

    /// Date the deed was recorded
    pub date_recorded: Option<NaiveDate>,

    /// Seller
    pub grantor: Option<String>,

    /// Buyer
    pub grantee: Option<String>,

    /// Amount written as a currency numeral
    pub amount_numeric: Option<Amount>,

    /// Amount spelled out in English words
    pub amount_written: Option<String>,

    /// Assessor's parcel number
    pub apn: Option<String>,

    /// Document status token
    pub status: Option<String>,
}

impl ExtractedFields {
    /// Required fields from `required` that are absent, in the given order
    pub fn missing(&self, required: &[RequiredField]) -> Vec<RequiredField> {
        required
            .iter()
            .copied()
            .filter(|field| !field.is_present(self))
            .collect()
    }

    /// True when nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Fields a deed can be checked for
///
/// [`RequiredField::DEFAULT`] is the completeness set every deed is held to;
/// the remaining variants can be added to it through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// `doc_id`
    DocId,
    /// `county_raw`
    CountyRaw,
    /// `state`
    State,
    /// `date_signed`
    DateSigned,
    /// `date_recorded`
    DateRecorded,
    /// `grantor`
    Grantor,
    /// `grantee`
    Grantee,
    /// `amount_numeric`
    AmountNumeric,
    /// `amount_written`
    AmountWritten,
    /// `apn`
    Apn,
    /// `status`
    Status,
}

impl RequiredField {
    /// The standard completeness set, in report order
    pub const DEFAULT: [RequiredField; 5] = [
        RequiredField::DocId,
        RequiredField::CountyRaw,
        RequiredField::DateSigned,
        RequiredField::DateRecorded,
        RequiredField::AmountNumeric,
    ];

    /// Field name as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::DocId => "doc_id",
            RequiredField::CountyRaw => "county_raw",
            RequiredField::State => "state",
            RequiredField::DateSigned => "date_signed",
            RequiredField::DateRecorded => "date_recorded",
            RequiredField::Grantor => "grantor",
            RequiredField::Grantee => "grantee",
            RequiredField::AmountNumeric => "amount_numeric",
            RequiredField::AmountWritten => "amount_written",
            RequiredField::Apn => "apn",
            RequiredField::Status => "status",
        }
    }

    /// Whether `fields` carries a value for this field
    pub fn is_present(&self, fields: &ExtractedFields) -> bool {
        match self {
            RequiredField::DocId => fields.doc_id.is_some(),
            RequiredField::CountyRaw => fields.county_raw.is_some(),
            RequiredField::State => fields.state.is_some(),
            RequiredField::DateSigned => fields.date_signed.is_some(),
            RequiredField::DateRecorded => fields.date_recorded.is_some(),
            RequiredField::Grantor => fields.grantor.is_some(),
            RequiredField::Grantee => fields.grantee.is_some(),
            RequiredField::AmountNumeric => fields.amount_numeric.is_some(),
            RequiredField::AmountWritten => fields.amount_written.is_some(),
            RequiredField::Apn => fields.apn.is_some(),
            RequiredField::Status => fields.status.is_some(),
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
