//! County reference records

use serde::{Deserialize, Serialize};

/// One row of the county reference table
///
/// Loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    /// Canonical county name, unique within a table
    pub name: String,

    /// Property tax rate as a decimal fraction (0.012 = 1.2%)
    pub tax_rate: f64,
}

impl CountyRecord {
    /// Create a new record
    pub fn new(name: impl Into<String>, tax_rate: f64) -> Self {
        Self {
            name: name.into(),
            tax_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let record: CountyRecord =
            serde_json::from_str(r#"{"name": "Santa Clara", "tax_rate": 0.012}"#).unwrap();
        assert_eq!(record, CountyRecord::new("Santa Clara", 0.012));
    }
}
