//! Listing Sift - filter, sort and heatmap engine for domain listing tables.
//!
//! The engine decides, for each row of a domain listing, whether it stays
//! visible, where it sorts and how its metric cells are tinted. It is pure
//! and synchronous: callers project rows into plain values, run the engine,
//! and apply the results back to their UI.
//!
//! - **Filtering**: a flat [`RuleSet`] of length, text, hyphen, digit, shape,
//!   suffix and status rules, evaluated by [`filter_domain`]
//! - **Sorting**: typed [`SortKey`]s parsed from cell text and titles
//!   (numbers, magnitudes, absolute and relative dates), ordered by the
//!   stable [`sort_rows`]
//! - **Heatmap**: per-metric threshold ladders in [`heat_color`]
//!
//! # Quick Start
//!
//! ```rust
//! use listing_sift::{filter_domain, heat_color, sort_rows};
//! use listing_sift::{DigitRule, Dir, Field, HeatTier, ListingRow, Record, Row, RuleSet, SortContext};
//!
//! let rules = RuleSet::new()
//!     .with_max_length(6)
//!     .with_digit_rule(DigitRule::None)
//!     .with_allowed_suffixes("com, .io");
//!
//! assert!(filter_domain(&Record::new("dofa.com", "Available"), &rules));
//! assert!(!filter_domain(&Record::new("dofa24.com", "Available"), &rules));
//!
//! let rows = vec![
//!     Row::new("dofa.com").with_titled_cell("field_bl", "2.5 K", "2,534"),
//!     Row::new("kelo.io").with_cell("field_bl", "310"),
//! ];
//! let sorted = sort_rows(&rows, Some(&Field::Backlinks), Dir::Desc, &SortContext::now());
//! assert_eq!(sorted[0].domain(), "dofa.com");
//!
//! assert_eq!(heat_color(&Field::Backlinks, "2,534"), Some(HeatTier::Medium));
//! ```
//!
//! # Filter Semantics
//!
//! ```text
//! visible = length ∧ contains ∧ prefix ∧ ending ∧ ¬excluded
//!         ∧ hyphens ∧ ¬"--" ∧ digits ∧ shape ∧ suffix ∧ status
//! ```
//!
//! Every rule left empty passes. `max1`/`max2` rules are inclusive upper
//! bounds. A contains pattern that is not a valid regex is matched as a
//! plain substring instead of failing.
//!
//! # Shape Patterns
//!
//! | Char | Matches |
//! |------|---------|
//! | `c` | consonant |
//! | `v` | vowel (`a e i o u`) |
//! | `n` | digit |
//! | `l` | any letter |
//! | other | that class exactly (`?` for `-` and other symbols) |

mod domain;
mod error;
mod extract;
mod field;
mod filter;
mod heat;
mod ordering;
pub mod predicates;
mod row;
mod rules;
mod table;
mod value;

// Re-export public API
pub use domain::{split_domain, DomainParts, Record};
pub use error::{Result, SiftError};
pub use extract::{extract_sort_key, parse_sort_value, SortContext};
pub use field::Field;
pub use filter::{filter_domain, filter_domain_compiled};
pub use heat::{heat_color, HeatTier, HEAT_RGB};
pub use ordering::{compare_keys, natural_cmp, sort_rows, sort_rows_by, Dir};
pub use row::{Cell, ListingRow, Row};
pub use rules::{split_list, CompiledRules, DigitRule, HyphenRule, Matcher, RuleSet};
pub use table::{PassOutcome, TablePass};
pub use value::SortKey;
