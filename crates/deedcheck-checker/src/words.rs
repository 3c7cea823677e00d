//! English amount-words grammar
//!
//! Reads amounts such as `One Million Two Hundred Fifty Thousand Dollars`
//! or `Twelve Hundred and 50/100 Dollars` into an exact [`Amount`].
//!
//! ```text
//! amount  := number [currency] [cents]
//! cents   := number ("cent" | "cents") | NN/100
//! number  := "zero" | group (scale group)*      scales strictly decreasing
//! group   := [unit | teen | tens [unit]] ["hundred" [...]]
//! ```
//!
//! `and`, `only` and `exactly` are ignored anywhere, as is a `US`/`U.S.`
//! qualifier. A currency word may repeat, as in `One Hundred Dollars USD`.

use deedcheck_domain::Amount;
use thiserror::Error;

/// Why a written amount could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordsError {
    /// No number words at all
    #[error("no amount words found")]
    Empty,

    /// Word outside the vocabulary
    #[error("unrecognised word '{0}'")]
    UnknownWord(String),

    /// Known word in a position the grammar does not allow
    #[error("unexpected '{0}'")]
    Misplaced(String),

    /// Cents clause is not a value below one hundred
    #[error("invalid cents '{0}'")]
    InvalidCents(String),

    /// Value does not fit in u64 cents
    #[error("amount is too large")]
    Overflow,
}

const FILLER: &[&str] = &["and", "only", "exactly"];
const CURRENCY: &[&str] = &["dollar", "dollars", "usd"];
const QUALIFIER: &[&str] = &["us", "u.s"];
const CENTS: &[&str] = &["cent", "cents"];

fn small_value(word: &str) -> Option<u64> {
    let value = match word {
        "a" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(value)
}

fn tens_value(word: &str) -> Option<u64> {
    let value = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" | "fourty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

fn scale_value(word: &str) -> Option<u64> {
    let value = match word {
        "thousand" => 1_000,
        "million" => 1_000_000,
        "billion" => 1_000_000_000,
        "trillion" => 1_000_000_000_000,
        _ => return None,
    };
    Some(value)
}

/// Accumulates one spelled-out number
#[derive(Debug, Default)]
struct WordNumber {
    total: u64,
    group: u64,
    last_scale: Option<u64>,
    seen: bool,
    zero: bool,
}

impl WordNumber {
    fn push(&mut self, word: &str) -> Result<(), WordsError> {
        let misplaced = || WordsError::Misplaced(word.to_string());

        if self.zero {
            return Err(misplaced());
        }

        if word == "zero" {
            if self.seen {
                return Err(misplaced());
            }
            self.zero = true;
            self.seen = true;
            return Ok(());
        }

        let rem = self.group % 100;

        if let Some(v) = small_value(word) {
            let after_tens = rem >= 20 && rem % 10 == 0 && v < 10;
            if rem != 0 && !after_tens {
                return Err(misplaced());
            }
            self.group += v;
        } else if let Some(v) = tens_value(word) {
            if rem != 0 {
                return Err(misplaced());
            }
            self.group += v;
        } else if word == "hundred" {
            if self.group == 0 || self.group >= 100 {
                return Err(misplaced());
            }
            self.group *= 100;
        } else if let Some(scale) = scale_value(word) {
            if self.group == 0 || self.last_scale.is_some_and(|last| scale >= last) {
                return Err(misplaced());
            }
            let part = self.group.checked_mul(scale).ok_or(WordsError::Overflow)?;
            self.total = self.total.checked_add(part).ok_or(WordsError::Overflow)?;
            self.last_scale = Some(scale);
            self.group = 0;
        } else {
            return Err(WordsError::UnknownWord(word.to_string()));
        }

        self.seen = true;
        Ok(())
    }

    fn value(&self) -> Result<u64, WordsError> {
        self.total.checked_add(self.group).ok_or(WordsError::Overflow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Dollars,
    Cents,
    Done,
}

/// `NN/100` cents notation; `None` if `word` is not a fraction at all
fn parse_fraction(word: &str) -> Result<Option<u64>, WordsError> {
    let Some((numerator, denominator)) = word.split_once('/') else {
        return Ok(None);
    };

    let invalid = || WordsError::InvalidCents(word.to_string());
    if denominator != "100" || numerator.is_empty() || numerator.len() > 2 {
        return Err(invalid());
    }
    numerator.parse::<u64>().map(Some).map_err(|_| invalid())
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == ',')
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric() && c != '/')
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
}

/// Parse an amount written in English words
///
/// # Examples
///
/// ```
/// use deedcheck_checker::parse_amount_words;
///
/// let amount = parse_amount_words("One Million Two Hundred Fifty Thousand Dollars").unwrap();
/// assert_eq!(amount.to_string(), "$1,250,000.00");
///
/// assert!(parse_amount_words("About a million bucks").is_err());
/// ```
pub fn parse_amount_words(text: &str) -> Result<Amount, WordsError> {
    let mut dollars = WordNumber::default();
    let mut cents = WordNumber::default();
    let mut fraction: Option<u64> = None;
    let mut phase = Phase::Dollars;

    for token in tokenize(text) {
        let word = token.as_str();
        if FILLER.contains(&word) || QUALIFIER.contains(&word) {
            continue;
        }

        match phase {
            Phase::Dollars => {
                if CURRENCY.contains(&word) {
                    if !dollars.seen {
                        return Err(WordsError::Misplaced(token));
                    }
                    phase = Phase::Cents;
                } else if CENTS.contains(&word) {
                    return Err(WordsError::Misplaced(token));
                } else if let Some(value) = parse_fraction(word)? {
                    if !dollars.seen {
                        return Err(WordsError::Misplaced(token));
                    }
                    fraction = Some(value);
                    phase = Phase::Done;
                } else {
                    dollars.push(word)?;
                }
            }
            Phase::Cents => {
                if CENTS.contains(&word) {
                    if !cents.seen {
                        return Err(WordsError::Misplaced(token));
                    }
                    phase = Phase::Done;
                } else if CURRENCY.contains(&word) {
                    if cents.seen {
                        return Err(WordsError::Misplaced(token));
                    }
                } else if let Some(value) = parse_fraction(word)? {
                    if cents.seen {
                        return Err(WordsError::Misplaced(token));
                    }
                    fraction = Some(value);
                    phase = Phase::Done;
                } else {
                    cents.push(word)?;
                }
            }
            Phase::Done => {
                if !CURRENCY.contains(&word) {
                    return Err(WordsError::Misplaced(token));
                }
            }
        }
    }

    if !dollars.seen {
        return Err(WordsError::Empty);
    }

    let cents_value = match fraction {
        Some(value) => value,
        None if cents.seen => {
            let value = cents.value()?;
            if value >= 100 {
                return Err(WordsError::InvalidCents(value.to_string()));
            }
            value
        }
        None => 0,
    };

    dollars
        .value()?
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents_value))
        .map(Amount::from_cents)
        .ok_or(WordsError::Overflow)
}
