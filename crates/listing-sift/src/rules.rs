//! Rule set types: the declarative filter configuration for one pass.
//!
//! A [`RuleSet`] is a flat bag of optional criteria. Every field left empty
//! (or at its `Any` value) is skipped during evaluation, so
//! `RuleSet::default()` admits every record.
//!
//! The struct deserializes from the shape the listing extension stores, so a
//! saved filter state can be handed over as JSON:
//!
//! ```
//! use listing_sift::{HyphenRule, RuleSet};
//!
//! let rules = RuleSet::from_json(r#"{
//!     "matchText": "shop",
//!     "minLength": "",
//!     "maxLength": 12,
//!     "hyphenSetting": "max1",
//!     "tldFilter": "com, .io"
//! }"#).unwrap();
//!
//! assert_eq!(rules.contains, "shop");
//! assert_eq!(rules.min_length, None);
//! assert_eq!(rules.max_length, Some(12));
//! assert_eq!(rules.hyphen_rule, HyphenRule::Max1);
//! ```

use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SiftError};

/// Upper bound on hyphens in the name.
///
/// `Max1` and `Max2` are inclusive limits: `Max1` admits zero or one hyphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HyphenRule {
    /// No constraint.
    #[default]
    Any,
    /// No hyphens at all.
    None,
    /// At most one hyphen.
    Max1,
    /// At most two hyphens.
    Max2,
}

impl HyphenRule {
    /// Returns `true` if `count` hyphens satisfy this rule.
    pub fn admits(self, count: usize) -> bool {
        match self {
            HyphenRule::Any => true,
            HyphenRule::None => count == 0,
            HyphenRule::Max1 => count <= 1,
            HyphenRule::Max2 => count <= 2,
        }
    }

    /// Returns the token used in serialized rule sets.
    pub fn as_str(self) -> &'static str {
        match self {
            HyphenRule::Any => "any",
            HyphenRule::None => "none",
            HyphenRule::Max1 => "max1",
            HyphenRule::Max2 => "max2",
        }
    }
}

impl std::fmt::Display for HyphenRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HyphenRule {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" | "" => Ok(HyphenRule::Any),
            "none" => Ok(HyphenRule::None),
            "max1" => Ok(HyphenRule::Max1),
            "max2" => Ok(HyphenRule::Max2),
            _ => Err(SiftError::InvalidRule {
                kind: "hyphen rule",
                value: s.to_string(),
            }),
        }
    }
}

/// Constraint on ASCII digits in the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitRule {
    /// No constraint.
    #[default]
    Any,
    /// No digits at all.
    None,
    /// At most one digit.
    Max1,
    /// At most two digits.
    Max2,
    /// Every character must be a digit.
    #[serde(alias = "digitsOnly")]
    Only,
}

impl DigitRule {
    /// Returns `true` if a name of `len` characters holding `count` digits
    /// satisfies this rule.
    pub fn admits(self, count: usize, len: usize) -> bool {
        match self {
            DigitRule::Any => true,
            DigitRule::None => count == 0,
            DigitRule::Max1 => count <= 1,
            DigitRule::Max2 => count <= 2,
            DigitRule::Only => count == len,
        }
    }

    /// Returns the token used in serialized rule sets.
    pub fn as_str(self) -> &'static str {
        match self {
            DigitRule::Any => "any",
            DigitRule::None => "none",
            DigitRule::Max1 => "max1",
            DigitRule::Max2 => "max2",
            DigitRule::Only => "only",
        }
    }
}

impl std::fmt::Display for DigitRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DigitRule {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" | "" => Ok(DigitRule::Any),
            "none" => Ok(DigitRule::None),
            "max1" => Ok(DigitRule::Max1),
            "max2" => Ok(DigitRule::Max2),
            "only" | "digitsonly" => Ok(DigitRule::Only),
            _ => Err(SiftError::InvalidRule {
                kind: "digit rule",
                value: s.to_string(),
            }),
        }
    }
}

/// User-configured filter criteria for one evaluation pass.
///
/// Read-only during evaluation. String rules are compared case-insensitively;
/// list rules (`exclude_words`, `allowed_suffixes`) are comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleSet {
    /// Substring or regular expression the name must match.
    #[serde(alias = "matchText")]
    pub contains: String,
    /// Literal prefix of the name.
    pub starts_with: String,
    /// Literal suffix of the name (not the domain suffix).
    pub ends_with: String,
    /// Comma separated words the name must not contain.
    #[serde(alias = "blacklist")]
    pub exclude_words: String,

    /// Minimum name length in characters.
    #[serde(deserialize_with = "de_bound")]
    pub min_length: Option<usize>,
    /// Maximum name length in characters.
    #[serde(deserialize_with = "de_bound")]
    pub max_length: Option<usize>,
    /// Hyphen count limit.
    #[serde(alias = "hyphenSetting")]
    pub hyphen_rule: HyphenRule,
    /// Reject names containing `--`.
    pub no_consecutive_hyphens: bool,
    /// Digit count limit.
    #[serde(alias = "numberSetting")]
    pub digit_rule: DigitRule,

    /// Positional shape over `c`, `v`, `n`, `l` and literal characters.
    #[serde(alias = "pattern")]
    pub shape: String,

    /// Comma separated domain suffixes, with or without a leading dot.
    #[serde(alias = "tldFilter")]
    pub allowed_suffixes: String,
    /// Status the row must carry; empty or `Any` disables the check.
    #[serde(alias = "statusFilter")]
    pub required_status: String,
}

// Accepts a number, a numeric string, or "" / null for "unset".
fn de_bound<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(usize),
        Text(String),
        Null(()),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(Some(n)),
        Raw::Text(s) if s.trim().is_empty() => Ok(None),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid length bound '{s}'"))),
        Raw::Null(()) => Ok(None),
    }
}

impl RuleSet {
    /// Creates an empty rule set that admits every record.
    pub fn new() -> Self {
        RuleSet::default()
    }

    /// Decodes a rule set from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes this rule set as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns `true` if no rule is active.
    pub fn is_empty(&self) -> bool {
        self.contains.is_empty()
            && self.starts_with.is_empty()
            && self.ends_with.is_empty()
            && split_list(&self.exclude_words).next().is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.hyphen_rule == HyphenRule::Any
            && !self.no_consecutive_hyphens
            && self.digit_rule == DigitRule::Any
            && self.shape.is_empty()
            && split_list(&self.allowed_suffixes).next().is_none()
            && status_unconstrained(&self.required_status)
    }

    /// Precompiles the derived parts of this rule set.
    ///
    /// The result only speeds up repeated evaluation; see
    /// [`filter_domain_compiled`](crate::filter_domain_compiled).
    pub fn compile(&self) -> CompiledRules<'_> {
        CompiledRules::new(self)
    }

    // ========================================================================
    // Builder
    // ========================================================================

    /// Sets the contains pattern.
    pub fn with_contains(mut self, pattern: &str) -> Self {
        self.contains = pattern.to_string();
        self
    }

    /// Sets the required name prefix.
    pub fn with_starts_with(mut self, prefix: &str) -> Self {
        self.starts_with = prefix.to_string();
        self
    }

    /// Sets the required name ending.
    pub fn with_ends_with(mut self, ending: &str) -> Self {
        self.ends_with = ending.to_string();
        self
    }

    /// Sets the comma separated exclusion list.
    pub fn with_exclude_words(mut self, words: &str) -> Self {
        self.exclude_words = words.to_string();
        self
    }

    /// Sets the minimum name length.
    pub fn with_min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Sets the maximum name length.
    pub fn with_max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Sets the hyphen rule.
    pub fn with_hyphen_rule(mut self, rule: HyphenRule) -> Self {
        self.hyphen_rule = rule;
        self
    }

    /// Rejects names containing `--`.
    pub fn with_no_consecutive_hyphens(mut self) -> Self {
        self.no_consecutive_hyphens = true;
        self
    }

    /// Sets the digit rule.
    pub fn with_digit_rule(mut self, rule: DigitRule) -> Self {
        self.digit_rule = rule;
        self
    }

    /// Sets the shape pattern.
    pub fn with_shape(mut self, shape: &str) -> Self {
        self.shape = shape.to_string();
        self
    }

    /// Sets the comma separated suffix allow-list.
    pub fn with_allowed_suffixes(mut self, suffixes: &str) -> Self {
        self.allowed_suffixes = suffixes.to_string();
        self
    }

    /// Sets the required status.
    pub fn with_required_status(mut self, status: &str) -> Self {
        self.required_status = status.to_string();
        self
    }
}

/// Splits a comma separated rule value into trimmed, lower-cased, non-empty
/// entries.
pub fn split_list(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
}

/// Returns `true` if a required-status value imposes no constraint.
pub fn status_unconstrained(required: &str) -> bool {
    let required = required.trim();
    required.is_empty() || required.eq_ignore_ascii_case("any")
}

/// Name matcher for the contains rule.
///
/// The pattern is tried as a case-insensitive regular expression first; if
/// it does not compile, matching degrades to case-insensitive substring
/// containment of the literal pattern text.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Compiled case-insensitive regex.
    Regex(Regex),
    /// Lower-cased literal substring.
    Literal(String),
}

impl Matcher {
    /// Builds a matcher, falling back to substring matching on a bad pattern.
    pub fn new(pattern: &str) -> Self {
        match Self::strict(pattern) {
            Ok(regex) => Matcher::Regex(regex),
            Err(err) => {
                tracing::debug!(pattern, error = %err, "contains pattern is not a valid regex, matching as substring");
                Matcher::Literal(pattern.to_lowercase())
            }
        }
    }

    /// Compiles the pattern as a case-insensitive regex, surfacing errors.
    pub fn strict(pattern: &str) -> Result<Regex> {
        Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
    }

    /// Returns `true` if the matcher took the substring fallback.
    pub fn is_literal(&self) -> bool {
        matches!(self, Matcher::Literal(_))
    }

    /// Tests a name against this matcher.
    pub fn is_match(&self, name: &str) -> bool {
        match self {
            Matcher::Regex(regex) => regex.is_match(name),
            Matcher::Literal(needle) => name.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Derived, precomputed view of a [`RuleSet`].
///
/// Holds the compiled contains matcher and the parsed list rules so they are
/// not rebuilt for every row. Evaluating with or without it gives the same
/// answer.
#[derive(Debug, Clone)]
pub struct CompiledRules<'r> {
    rules: &'r RuleSet,
    contains: Option<Matcher>,
    starts_with: String,
    ends_with: String,
    exclude_words: Vec<String>,
    shape: String,
    allowed_suffixes: Vec<String>,
}

impl<'r> CompiledRules<'r> {
    /// Compiles the derived parts of `rules`.
    pub fn new(rules: &'r RuleSet) -> Self {
        CompiledRules {
            rules,
            contains: (!rules.contains.is_empty()).then(|| Matcher::new(&rules.contains)),
            starts_with: rules.starts_with.to_lowercase(),
            ends_with: rules.ends_with.to_lowercase(),
            exclude_words: split_list(&rules.exclude_words).collect(),
            shape: rules.shape.to_lowercase(),
            allowed_suffixes: split_list(&rules.allowed_suffixes).collect(),
        }
    }

    /// The rule set this was compiled from.
    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// The contains matcher, if a pattern is set.
    pub fn contains(&self) -> Option<&Matcher> {
        self.contains.as_ref()
    }

    /// Lower-cased prefix rule.
    pub fn starts_with(&self) -> &str {
        &self.starts_with
    }

    /// Lower-cased ending rule.
    pub fn ends_with(&self) -> &str {
        &self.ends_with
    }

    /// Parsed exclusion words.
    pub fn exclude_words(&self) -> &[String] {
        &self.exclude_words
    }

    /// Lower-cased shape pattern.
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// Parsed suffix allow-list.
    pub fn allowed_suffixes(&self) -> &[String] {
        &self.allowed_suffixes
    }
}
