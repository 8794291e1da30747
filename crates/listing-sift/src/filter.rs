//! The predicate evaluator: decides whether a record stays visible.
//!
//! Predicates run in a fixed order and stop at the first failure:
//!
//! 1. length bounds
//! 2. contains (regex, or substring when the pattern does not compile)
//! 3. prefix / ending
//! 4. exclusion words
//! 5. hyphen count, then consecutive hyphens
//! 6. digit count
//! 7. shape pattern
//! 8. suffix allow-list
//! 9. status
//!
//! The order only bounds cost; the result is the plain conjunction.
//! Name and suffix are lower-cased here, so hand-built records compare
//! case-insensitively too.

use std::borrow::Cow;

use crate::domain::Record;
use crate::predicates::{
    contains_pattern, digits_allowed, ends_with, excludes_any, excludes_words, hyphens_allowed,
    length_within, matches_with, no_double_hyphen, shape_matches, starts_with, status_matches,
    suffix_allowed, suffix_in,
};
use crate::rules::{CompiledRules, RuleSet};

/// Tests a record against a rule set, deriving everything on the fly.
///
/// ```
/// use listing_sift::{filter_domain, HyphenRule, Record, RuleSet};
///
/// let rules = RuleSet::new()
///     .with_max_length(6)
///     .with_hyphen_rule(HyphenRule::None)
///     .with_allowed_suffixes("com, .io");
///
/// assert!(filter_domain(&Record::new("dofa.io", "Available"), &rules));
/// assert!(!filter_domain(&Record::new("do-fa.io", "Available"), &rules));
/// assert!(!filter_domain(&Record::new("dofa.net", "Available"), &rules));
/// ```
pub fn filter_domain(record: &Record, rules: &RuleSet) -> bool {
    let name = lowered(&record.name);
    let name = name.as_ref();
    length_within(name, rules.min_length, rules.max_length)
        && contains_pattern(name, &rules.contains)
        && starts_with(name, &rules.starts_with)
        && ends_with(name, &rules.ends_with)
        && excludes_words(name, &rules.exclude_words)
        && hyphens_allowed(name, rules.hyphen_rule)
        && no_double_hyphen(name, rules.no_consecutive_hyphens)
        && digits_allowed(name, rules.digit_rule)
        && shape_matches(name, &rules.shape)
        && suffix_allowed(&lowered(&record.suffix), &rules.allowed_suffixes)
        && status_matches(&record.status, &rules.required_status)
}

/// Tests a record against precompiled rules.
///
/// Gives the same answer as [`filter_domain`] on the source rule set.
pub fn filter_domain_compiled(record: &Record, compiled: &CompiledRules<'_>) -> bool {
    let rules = compiled.rules();
    let name = lowered(&record.name);
    let name = name.as_ref();
    length_within(name, rules.min_length, rules.max_length)
        && matches_with(name, compiled.contains())
        && name.starts_with(compiled.starts_with())
        && name.ends_with(compiled.ends_with())
        && excludes_any(name, compiled.exclude_words())
        && hyphens_allowed(name, rules.hyphen_rule)
        && no_double_hyphen(name, rules.no_consecutive_hyphens)
        && digits_allowed(name, rules.digit_rule)
        && shape_matches(name, compiled.shape())
        && suffix_in(&lowered(&record.suffix), compiled.allowed_suffixes())
        && status_matches(&record.status, &rules.required_status)
}

fn lowered(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_uppercase) {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}
