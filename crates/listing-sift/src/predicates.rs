//! Independent name predicates.
//!
//! Each function tests one rule and treats an empty rule value as a pass.
//! Names and suffixes are expected lower-cased, as the evaluator passes them;
//! rule values are lower-cased here.

use crate::rules::{split_list, status_unconstrained, DigitRule, HyphenRule, Matcher};

/// Checks the name length (in characters) against optional bounds.
pub fn length_within(name: &str, min: Option<usize>, max: Option<usize>) -> bool {
    let len = name.chars().count();
    min.is_none_or(|min| len >= min) && max.is_none_or(|max| len <= max)
}

/// Checks the contains rule, compiling the pattern on the spot.
pub fn contains_pattern(name: &str, pattern: &str) -> bool {
    pattern.is_empty() || Matcher::new(pattern).is_match(name)
}

/// Checks the contains rule with a prebuilt matcher.
pub fn matches_with(name: &str, matcher: Option<&Matcher>) -> bool {
    matcher.is_none_or(|m| m.is_match(name))
}

/// Checks a literal, case-insensitive name prefix.
pub fn starts_with(name: &str, prefix: &str) -> bool {
    prefix.is_empty() || name.starts_with(&prefix.to_lowercase())
}

/// Checks a literal, case-insensitive name ending.
pub fn ends_with(name: &str, ending: &str) -> bool {
    ending.is_empty() || name.ends_with(&ending.to_lowercase())
}

/// Checks a comma separated exclusion list.
pub fn excludes_words(name: &str, list: &str) -> bool {
    split_list(list).all(|word| !name.contains(&word))
}

/// Checks pre-split exclusion words.
pub fn excludes_any(name: &str, words: &[String]) -> bool {
    words.iter().all(|word| !name.contains(word.as_str()))
}

/// Checks the hyphen count rule.
pub fn hyphens_allowed(name: &str, rule: HyphenRule) -> bool {
    rule.admits(name.matches('-').count())
}

/// Rejects `--` when `enabled`.
pub fn no_double_hyphen(name: &str, enabled: bool) -> bool {
    !enabled || !name.contains("--")
}

/// Checks the digit count rule.
pub fn digits_allowed(name: &str, rule: DigitRule) -> bool {
    let digits = name.chars().filter(char::is_ascii_digit).count();
    rule.admits(digits, name.chars().count())
}

/// Classifies each character of a name: digit `n`, vowel `v`, other
/// lower-case letter `c`, anything else `?`.
///
/// ```
/// use listing_sift::predicates::classify;
///
/// assert_eq!(classify("ab-3"), "vc?n");
/// ```
pub fn classify(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            '0'..='9' => 'n',
            'a' | 'e' | 'i' | 'o' | 'u' => 'v',
            'a'..='z' => 'c',
            _ => '?',
        })
        .collect()
}

/// Checks a positional shape pattern.
///
/// The pattern must be as long as the name. `l` accepts either letter class;
/// every other pattern character must equal the classification exactly.
pub fn shape_matches(name: &str, shape: &str) -> bool {
    if shape.is_empty() {
        return true;
    }
    let shape = shape.to_lowercase();
    let classes = classify(name);
    if shape.chars().count() != classes.chars().count() {
        return false;
    }
    shape.chars().zip(classes.chars()).all(|(want, got)| match want {
        'l' => got == 'c' || got == 'v',
        _ => want == got,
    })
}

/// Checks a comma separated suffix allow-list.
pub fn suffix_allowed(suffix: &str, list: &str) -> bool {
    let entries: Vec<String> = split_list(list).collect();
    suffix_in(suffix, &entries)
}

/// Checks a pre-split suffix allow-list. An empty list admits everything.
///
/// Entries match by exact equality, with or without a leading dot; `uk` does
/// not match `co.uk`.
pub fn suffix_in(suffix: &str, entries: &[String]) -> bool {
    entries.is_empty()
        || entries
            .iter()
            .any(|entry| entry == suffix || entry.strip_prefix('.') == Some(suffix))
}

/// Checks the status rule. `Any` or empty admits every status.
///
/// Otherwise the texts must be equal ignoring case; whitespace counts.
pub fn status_matches(status: &str, required: &str) -> bool {
    status_unconstrained(required) || status.to_lowercase() == required.to_lowercase()
}
