//! Name normalisation and abbreviation expansion

/// Upper bound on alias combinations tried for one input
const MAX_EXPANSIONS: usize = 64;

/// Token-level abbreviations and their canonical expansions, in try order
const ALIASES: &[(&str, &[&str])] = &[
    ("S", &["SANTA", "SAN", "SAINT"]),
    ("ST", &["SAINT", "SANTA"]),
    ("STA", &["SANTA"]),
    ("MT", &["MOUNT"]),
    ("FT", &["FORT"]),
    ("PT", &["POINT"]),
];

/// Canonical form used for every comparison
///
/// Upper-cases, separates dot-glued tokens (`S.Clara` -> `S. CLARA`),
/// collapses whitespace and drops a trailing `COUNTY` word.
pub fn normalize(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 4);
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        spaced.extend(c.to_uppercase());
        if c == '.' && chars.peek().is_some_and(|n| n.is_alphanumeric()) {
            spaced.push(' ');
        }
    }

    let mut tokens: Vec<&str> = spaced.split_whitespace().collect();
    if tokens.len() > 1 && tokens.last() == Some(&"COUNTY") {
        tokens.pop();
    }
    tokens.join(" ")
}

fn aliases_for(token: &str) -> Option<&'static [&'static str]> {
    let bare = token.trim_end_matches('.');
    ALIASES
        .iter()
        .find(|(abbrev, _)| *abbrev == bare)
        .map(|(_, expansions)| *expansions)
}

/// Every alias expansion of a normalised name, in deterministic order
///
/// Returns an empty list when no token is an abbreviation. The input itself
/// is never part of the result.
pub fn expansions(normalized: &str) -> Vec<String> {
    let tokens: Vec<&str> = normalized.split(' ').filter(|t| !t.is_empty()).collect();
    if !tokens.iter().any(|t| aliases_for(t).is_some()) {
        return Vec::new();
    }

    let mut combos: Vec<Vec<&str>> = vec![Vec::new()];
    for token in &tokens {
        let options: Vec<&str> = match aliases_for(token) {
            Some(expanded) => expanded.to_vec(),
            None => vec![*token],
        };

        let mut next = Vec::with_capacity(combos.len() * options.len());
        for prefix in &combos {
            for option in &options {
                if next.len() == MAX_EXPANSIONS {
                    break;
                }
                let mut combo = prefix.clone();
                combo.push(*option);
                next.push(combo);
            }
        }
        combos = next;
    }

    combos.into_iter().map(|words| words.join(" ")).collect()
}

/// Letters of an initialism such as `S.C.` or `SC`
///
/// `None` unless the input is made of short fragments only; a regular word
/// is never read as an initialism.
pub fn initialism(normalized: &str) -> Option<String> {
    let fragments: Vec<&str> = normalized
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();

    if fragments.is_empty() || fragments.iter().any(|f| f.chars().count() > 2) {
        return None;
    }

    let letters: String = fragments.concat();
    if letters.chars().count() < 2 || !letters.chars().all(|c| c.is_alphabetic()) {
        return None;
    }
    Some(letters)
}

/// Initials of a multi-word normalised name
pub fn initials_of(normalized: &str) -> Option<String> {
    let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();
    if words.len() < 2 {
        return None;
    }
    Some(words.iter().filter_map(|w| w.chars().next()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_and_whitespace() {
        assert_eq!(normalize("  santa   clara "), "SANTA CLARA");
        assert_eq!(normalize("Santa Clara County"), "SANTA CLARA");
        assert_eq!(normalize("County"), "COUNTY");
        assert_eq!(normalize("S.Clara"), "S. CLARA");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_expansions_in_alias_order() {
        assert_eq!(
            expansions("S. CLARA"),
            vec!["SANTA CLARA", "SAN CLARA", "SAINT CLARA"]
        );
        assert_eq!(expansions("ST CLAIR"), vec!["SAINT CLAIR", "SANTA CLAIR"]);
        assert_eq!(expansions("MT. SHASTA"), vec!["MOUNT SHASTA"]);
    }

    #[test]
    fn test_no_expansion_for_plain_names() {
        assert!(expansions("ALAMEDA").is_empty());
        assert!(expansions("").is_empty());
    }

    #[test]
    fn test_expansions_are_bounded() {
        let many = vec!["S."; 10].join(" ");
        assert_eq!(expansions(&many).len(), MAX_EXPANSIONS);
    }

    #[test]
    fn test_initialism() {
        assert_eq!(initialism("S. C."), Some("SC".to_string()));
        assert_eq!(initialism("SC"), Some("SC".to_string()));
        assert_eq!(initialism("S. CLARA"), None);
        assert_eq!(initialism("S"), None);
        assert_eq!(initialism("4 2"), None);
    }

    #[test]
    fn test_initials_of() {
        assert_eq!(initials_of("SANTA CLARA"), Some("SC".to_string()));
        assert_eq!(initials_of("SAN LUIS OBISPO"), Some("SLO".to_string()));
        assert_eq!(initials_of("ALAMEDA"), None);
    }
}
