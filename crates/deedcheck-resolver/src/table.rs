//! County reference table

use crate::error::ResolverError;
use crate::normalize::normalize;
use deedcheck_domain::CountyRecord;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Ordered, immutable list of county records
///
/// Record order is significant: it breaks ties between equally similar
/// fuzzy matches, so tables must be loaded in a stable order.
#[derive(Debug, Clone)]
pub struct CountyTable {
    records: Vec<CountyRecord>,
    normalized: Vec<String>,
}

impl CountyTable {
    /// Build a table from already-parsed records
    ///
    /// # Errors
    ///
    /// Fails on an empty list, a blank name, a duplicate name (after
    /// normalisation) or a tax rate that is not a finite fraction in [0, 1].
    pub fn new(records: Vec<CountyRecord>) -> Result<Self, ResolverError> {
        if records.is_empty() {
            return Err(ResolverError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        let mut normalized = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let key = normalize(&record.name);
            if key.is_empty() {
                return Err(ResolverError::BlankName { index });
            }
            if !record.tax_rate.is_finite() || !(0.0..=1.0).contains(&record.tax_rate) {
                return Err(ResolverError::InvalidTaxRate {
                    name: record.name.clone(),
                    rate: record.tax_rate,
                });
            }
            if !seen.insert(key.clone()) {
                return Err(ResolverError::DuplicateName(record.name.clone()));
            }
            normalized.push(key);
        }

        Ok(Self {
            records,
            normalized,
        })
    }

    /// Parse a JSON array of `{"name": ..., "tax_rate": ...}` records
    pub fn from_json_str(json: &str) -> Result<Self, ResolverError> {
        let records: Vec<CountyRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a JSON table from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResolverError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ResolverError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json_str(&contents)?;
        info!("Loaded {} counties from {}", table.len(), path.display());
        Ok(table)
    }

    /// Records in table order
    pub fn records(&self) -> &[CountyRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed table
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by name, ignoring case and spacing
    pub fn get(&self, name: &str) -> Option<&CountyRecord> {
        let key = normalize(name);
        self.normalized
            .iter()
            .position(|n| *n == key)
            .map(|i| &self.records[i])
    }

    /// Records paired with their normalised names
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&CountyRecord, &str)> {
        self.records
            .iter()
            .zip(self.normalized.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let table = CountyTable::from_json_str(
            r#"[{"name": "Santa Clara", "tax_rate": 0.012}, {"name": "San Mateo", "tax_rate": 0.011}]"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].name, "San Mateo");
    }

    #[test]
    fn test_lookup_ignores_case_and_spacing() {
        let table = CountyTable::new(vec![CountyRecord::new("Santa Clara", 0.012)]).unwrap();
        assert_eq!(table.get("  santa  CLARA ").map(|r| r.tax_rate), Some(0.012));
        assert!(table.get("Santa Cruz").is_none());
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert!(matches!(CountyTable::new(vec![]), Err(ResolverError::Empty)));
        assert!(matches!(CountyTable::from_json_str("[]"), Err(ResolverError::Empty)));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = CountyTable::new(vec![
            CountyRecord::new("Marin", 0.011),
            CountyRecord::new("MARIN county", 0.011),
        ]);
        assert!(matches!(result, Err(ResolverError::DuplicateName(name)) if name == "MARIN county"));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = CountyTable::new(vec![
            CountyRecord::new("Marin", 0.011),
            CountyRecord::new("   ", 0.011),
        ]);
        assert!(matches!(result, Err(ResolverError::BlankName { index: 1 })));
    }

    #[test]
    fn test_invalid_tax_rates_are_rejected() {
        for rate in [-0.01, 1.5, f64::NAN, f64::INFINITY] {
            let result = CountyTable::new(vec![CountyRecord::new("Marin", rate)]);
            assert!(matches!(result, Err(ResolverError::InvalidTaxRate { .. })));
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            CountyTable::from_json_str(r#"[{"name": "Marin"}]"#),
            Err(ResolverError::Parse(_))
        ));
        assert!(matches!(
            CountyTable::from_json_str("not json"),
            Err(ResolverError::Parse(_))
        ));
    }
}
