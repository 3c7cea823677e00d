//! County resolution logic

use crate::config::ResolverConfig;
use crate::error::ResolverError;
use crate::normalize::{expansions, initialism, initials_of, normalize};
use crate::table::CountyTable;
use deedcheck_domain::CountyRecord;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Confidence reported for an exact match
pub const EXACT_CONFIDENCE: f64 = 1.0;

/// Confidence reported for an alias-expanded match
pub const ALIAS_CONFIDENCE: f64 = 0.95;

/// How a county token was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Same name, ignoring case and spacing
    Exact,

    /// Same name once abbreviations were expanded
    Alias,

    /// Closest name by edit distance
    Fuzzy,

    /// Nothing close enough
    Unmatched,
}

impl MatchMethod {
    /// Method name as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::Exact => "exact",
            MatchMethod::Alias => "alias",
            MatchMethod::Fuzzy => "fuzzy",
            MatchMethod::Unmatched => "unmatched",
        }
    }
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving one county token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionResult {
    /// Matched record, if any
    pub matched_record: Option<CountyRecord>,

    /// Match confidence (0.0-1.0)
    pub confidence: f64,

    /// Strategy that produced the match
    pub method: MatchMethod,
}

impl ResolutionResult {
    fn matched(record: &CountyRecord, confidence: f64, method: MatchMethod) -> Self {
        Self {
            matched_record: Some(record.clone()),
            confidence,
            method,
        }
    }

    /// The unmatched result
    pub fn unmatched() -> Self {
        Self {
            matched_record: None,
            confidence: 0.0,
            method: MatchMethod::Unmatched,
        }
    }

    /// Whether a record was found
    pub fn is_matched(&self) -> bool {
        self.matched_record.is_some()
    }

    /// Whether a record was found with confidence below `threshold`
    pub fn is_low_confidence(&self, threshold: f64) -> bool {
        self.is_matched() && self.confidence < threshold
    }
}

/// Resolves free-text county names against a reference table
///
/// Strategies run in order and the first hit wins: exact, alias, fuzzy.
/// The table is shared read-only, so one resolver can serve many threads.
#[derive(Debug, Clone)]
pub struct CountyResolver {
    table: Arc<CountyTable>,
    config: ResolverConfig,
}

impl CountyResolver {
    /// Create a new resolver
    pub fn new(table: Arc<CountyTable>, config: ResolverConfig) -> Result<Self, ResolverError> {
        config.validate().map_err(ResolverError::Config)?;
        Ok(Self { table, config })
    }

    /// Create a resolver with default configuration
    pub fn with_defaults(table: Arc<CountyTable>) -> Self {
        Self {
            table,
            config: ResolverConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a county token
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use deedcheck_domain::CountyRecord;
    /// use deedcheck_resolver::{CountyResolver, CountyTable, MatchMethod};
    ///
    /// let table = CountyTable::new(vec![CountyRecord::new("Santa Clara", 0.012)]).unwrap();
    /// let resolver = CountyResolver::with_defaults(Arc::new(table));
    ///
    /// let result = resolver.resolve("S. Clara");
    /// assert_eq!(result.method, MatchMethod::Alias);
    /// assert_eq!(result.confidence, 0.95);
    /// ```
    pub fn resolve(&self, raw: &str) -> ResolutionResult {
        let input = normalize(raw);
        if input.is_empty() {
            debug!("Empty county token");
            return ResolutionResult::unmatched();
        }

        if let Some(record) = self.exact(&input) {
            debug!(county = %record.name, "Exact county match");
            return ResolutionResult::matched(record, EXACT_CONFIDENCE, MatchMethod::Exact);
        }

        let expanded = expansions(&input);
        if let Some(record) = expanded.iter().find_map(|candidate| self.exact(candidate)) {
            debug!(county = %record.name, "Alias county match");
            return ResolutionResult::matched(record, ALIAS_CONFIDENCE, MatchMethod::Alias);
        }

        if let Some(record) = self.by_initials(&input) {
            debug!(county = %record.name, "Initialism county match");
            return ResolutionResult::matched(record, ALIAS_CONFIDENCE, MatchMethod::Alias);
        }

        let mut candidates = Vec::with_capacity(expanded.len() + 1);
        candidates.push(input.as_str());
        candidates.extend(expanded.iter().map(String::as_str));

        match self.closest(&candidates) {
            Some((record, score)) if score >= self.config.fuzzy_threshold => {
                debug!(county = %record.name, score, "Fuzzy county match");
                ResolutionResult::matched(record, score, MatchMethod::Fuzzy)
            }
            best => {
                debug!(
                    input = %input,
                    best_score = best.map(|(_, s)| s).unwrap_or(0.0),
                    "No county match"
                );
                ResolutionResult::unmatched()
            }
        }
    }

    fn exact(&self, candidate: &str) -> Option<&CountyRecord> {
        self.table
            .entries()
            .find(|(_, name)| *name == candidate)
            .map(|(record, _)| record)
    }

    fn by_initials(&self, input: &str) -> Option<&CountyRecord> {
        let letters = initialism(input)?;
        self.table
            .entries()
            .find(|(_, name)| initials_of(name).as_deref() == Some(letters.as_str()))
            .map(|(record, _)| record)
    }

    /// Best record by normalised Levenshtein similarity; earliest wins ties
    fn closest(&self, candidates: &[&str]) -> Option<(&CountyRecord, f64)> {
        let mut best: Option<(&CountyRecord, f64)> = None;

        for (record, name) in self.table.entries() {
            let score = candidates
                .iter()
                .map(|c| similarity(c, name))
                .fold(0.0_f64, f64::max);

            if best.map_or(true, |(_, top)| score > top) {
                best = Some((record, score));
            }
        }

        best
    }
}

/// Similarity ratio in [0, 1]: `1 - levenshtein(a, b) / max(len(a), len(b))`
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}
