//! Property-based tests for listing-sift using proptest.

use chrono::NaiveDate;
use listing_sift::{
    filter_domain, filter_domain_compiled, heat_color, sort_rows, DigitRule, Dir, Field,
    HyphenRule, ListingRow, Record, Row, RuleSet, SortContext, TablePass,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn ctx() -> SortContext {
    SortContext::at(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap())
}

fn domain_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9-]{0,12}", prop_oneof![Just("com"), Just("io"), Just("net"), Just("co.uk")])
        .prop_map(|(name, suffix)| format!("{name}.{suffix}"))
}

fn hyphen_strategy() -> impl Strategy<Value = HyphenRule> {
    prop_oneof![
        Just(HyphenRule::Any),
        Just(HyphenRule::None),
        Just(HyphenRule::Max1),
        Just(HyphenRule::Max2),
    ]
}

fn digit_strategy() -> impl Strategy<Value = DigitRule> {
    prop_oneof![
        Just(DigitRule::Any),
        Just(DigitRule::None),
        Just(DigitRule::Max1),
        Just(DigitRule::Max2),
        Just(DigitRule::Only),
    ]
}

fn rules_strategy() -> impl Strategy<Value = RuleSet> {
    (
        prop::option::of(0usize..8),
        prop::option::of(4usize..14),
        prop_oneof![Just(String::new()), "[a-z]{1,2}", Just("(".to_string()), Just("^[a-m]".to_string())],
        prop_oneof![Just(String::new()), "[a-z]{1,3}(,[a-z]{1,3})?"],
        hyphen_strategy(),
        any::<bool>(),
        digit_strategy(),
        prop_oneof![Just(String::new()), "[cvnl?]{1,8}"],
        prop_oneof![Just(String::new()), Just("com, .io".to_string()), Just(".co.uk".to_string())],
    )
        .prop_map(
            |(min, max, contains, exclude, hyphen, no_double, digit, shape, suffixes)| RuleSet {
                contains,
                exclude_words: exclude,
                min_length: min,
                max_length: max,
                hyphen_rule: hyphen,
                no_consecutive_hyphens: no_double,
                digit_rule: digit,
                shape,
                allowed_suffixes: suffixes,
                ..RuleSet::default()
            },
        )
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// An empty rule set admits every record.
    #[test]
    fn empty_rules_admit_all(domain in ".{0,20}", status in "[A-Za-z]{0,10}") {
        prop_assert!(filter_domain(&Record::new(&domain, &status), &RuleSet::default()));
    }

    /// The precompiled path agrees with on-the-fly evaluation.
    #[test]
    fn compiled_matches_plain(domain in domain_strategy(), rules in rules_strategy()) {
        let record = Record::new(&domain, "Available");
        prop_assert_eq!(
            filter_domain(&record, &rules),
            filter_domain_compiled(&record, &rules.compile())
        );
    }

    /// Evaluation is idempotent.
    #[test]
    fn evaluation_is_repeatable(domain in domain_strategy(), rules in rules_strategy()) {
        let record = Record::new(&domain, "");
        prop_assert_eq!(filter_domain(&record, &rules), filter_domain(&record, &rules));
    }

    /// A record passing the combined rules passes each rule on its own.
    #[test]
    fn combined_implies_each(domain in domain_strategy(), rules in rules_strategy()) {
        let record = Record::new(&domain, "");
        if filter_domain(&record, &rules) {
            let hyphen_only = RuleSet { hyphen_rule: rules.hyphen_rule, ..RuleSet::default() };
            prop_assert!(filter_domain(&record, &hyphen_only));
            let digit_only = RuleSet { digit_rule: rules.digit_rule, ..RuleSet::default() };
            prop_assert!(filter_domain(&record, &digit_only));
            let shape_only = RuleSet { shape: rules.shape.clone(), ..RuleSet::default() };
            prop_assert!(filter_domain(&record, &shape_only));
            let suffixes_only = RuleSet { allowed_suffixes: rules.allowed_suffixes.clone(), ..RuleSet::default() };
            prop_assert!(filter_domain(&record, &suffixes_only));
        }
    }

    /// Numeric sorting yields a non-decreasing sequence.
    #[test]
    fn numeric_sort_is_ordered(values in prop::collection::vec(0u32..100_000, 0..40)) {
        let rows: Vec<Row> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Row::new(&format!("d{i}.com")).with_cell("field_bl", &v.to_string()))
            .collect();
        let sorted = sort_rows(&rows, Some(&Field::Backlinks), Dir::Asc, &ctx());
        let out: Vec<u32> = sorted
            .iter()
            .map(|r| r.cell(&Field::Backlinks).text.parse().unwrap())
            .collect();
        prop_assert!(out.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(out.len(), values.len());
    }

    /// Rows with equal keys keep their input order.
    #[test]
    fn sort_is_stable(values in prop::collection::vec(0u8..4, 0..40), desc in any::<bool>()) {
        let rows: Vec<Row> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Row::new(&format!("{i}.com")).with_cell("field_length", &v.to_string()))
            .collect();
        let dir = if desc { Dir::Desc } else { Dir::Asc };
        let sorted = sort_rows(&rows, Some(&Field::Length), dir, &ctx());
        for pair in sorted.windows(2) {
            let a = pair[0].cell(&Field::Length).text;
            let b = pair[1].cell(&Field::Length).text;
            if a == b {
                let ia: usize = pair[0].domain().trim_end_matches(".com").parse().unwrap();
                let ib: usize = pair[1].domain().trim_end_matches(".com").parse().unwrap();
                prop_assert!(ia < ib);
            }
        }
    }

    /// Heat tiers never decrease as backlinks grow.
    #[test]
    fn heat_is_monotonic(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_tier = heat_color(&Field::Backlinks, &lo.to_string());
        let hi_tier = heat_color(&Field::Backlinks, &hi.to_string());
        prop_assert!(lo_tier <= hi_tier);
    }

    /// Visible plus hidden always covers every row.
    #[test]
    fn table_pass_accounts_for_all_rows(
        domains in prop::collection::vec(domain_strategy(), 0..30),
        rules in rules_strategy(),
    ) {
        let rows: Vec<Row> = domains.iter().map(|d| Row::new(d)).collect();
        let outcome = TablePass::new(rules).run(&rows);
        prop_assert_eq!(outcome.total(), rows.len());
    }
}
