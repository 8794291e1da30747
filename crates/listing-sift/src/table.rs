//! One full filter-then-sort pass over the loaded rows.
//!
//! [`TablePass`] bundles a rule set with an optional sort column and runs
//! both over a row slice, returning the indices to show, in display order.
//! Writing visibility and order back onto the page is left to the caller.

use crate::extract::SortContext;
use crate::field::Field;
use crate::filter::filter_domain_compiled;
use crate::ordering::{sort_rows_by, Dir};
use crate::row::ListingRow;
use crate::rules::RuleSet;

/// A configured pass: rules plus optional ordering.
///
/// # Example
///
/// ```
/// use listing_sift::{Dir, Field, HyphenRule, Row, RuleSet, TablePass};
///
/// let rows = vec![
///     Row::new("alpha.com").with_cell("field_bl", "30"),
///     Row::new("be-ta.com").with_cell("field_bl", "900"),
///     Row::new("gamma.com").with_cell("field_bl", "4"),
/// ];
///
/// let outcome = TablePass::new(RuleSet::new().with_hyphen_rule(HyphenRule::None))
///     .order_by(Field::Backlinks, Dir::Desc)
///     .run(&rows);
///
/// assert_eq!(outcome.visible, vec![0, 2]);
/// assert_eq!(outcome.hidden, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TablePass {
    rules: RuleSet,
    order: Option<(Field, Dir)>,
    ctx: Option<SortContext>,
}

/// Result of a [`TablePass`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassOutcome {
    /// Indices of visible rows, in display order.
    pub visible: Vec<usize>,
    /// Number of rows filtered out.
    pub hidden: usize,
}

impl PassOutcome {
    /// Number of visible rows.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Total rows seen.
    pub fn total(&self) -> usize {
        self.visible.len() + self.hidden
    }

    /// Returns `true` if row `index` is visible.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }
}

impl TablePass {
    /// Creates a pass with the given rules and no ordering.
    pub fn new(rules: RuleSet) -> Self {
        TablePass {
            rules,
            ..TablePass::default()
        }
    }

    /// Sorts visible rows by a column.
    pub fn order_by(mut self, field: Field, dir: Dir) -> Self {
        self.order = Some((field, dir));
        self
    }

    /// Pins the reference date used for relative dates.
    pub fn with_context(mut self, ctx: SortContext) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// The rules of this pass.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The ordering of this pass, if any.
    pub fn order(&self) -> Option<&(Field, Dir)> {
        self.order.as_ref()
    }

    /// Runs the pass.
    pub fn run<T: ListingRow>(&self, rows: &[T]) -> PassOutcome {
        let compiled = self.rules.compile();
        let kept: Vec<(usize, &T)> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| filter_domain_compiled(&row.record(), &compiled))
            .collect();
        let hidden = rows.len() - kept.len();

        let visible = match &self.order {
            None => kept.into_iter().map(|(index, _)| index).collect(),
            Some((field, dir)) => {
                let ctx = self.ctx.unwrap_or_else(SortContext::now);
                sort_rows_by(&kept, Some(field), *dir, &ctx, |(_, row), field| row.cell(field))
                    .into_iter()
                    .map(|(index, _)| *index)
                    .collect()
            }
        };

        tracing::trace!(total = rows.len(), hidden, "table pass");
        PassOutcome { visible, hidden }
    }

    /// Counts rows that pass the filter.
    pub fn count<T: ListingRow>(&self, rows: &[T]) -> usize {
        let compiled = self.rules.compile();
        rows.iter()
            .filter(|row| filter_domain_compiled(&row.record(), &compiled))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Row;
    use chrono::NaiveDate;

    fn rows() -> Vec<Row> {
        vec![
            Row::new("dofa.com").with_status("Available").with_cell("field_bl", "1.2k"),
            Row::new("kelo.net").with_status("Available").with_cell("field_bl", "3"),
            Row::new("x-y-z.com").with_status("Registered").with_cell("field_bl", "500"),
            Row::new("mavi.com").with_status("available").with_cell("field_bl", "3"),
        ]
    }

    #[test]
    fn empty_pass_keeps_everything_in_order() {
        let outcome = TablePass::default().run(&rows());
        assert_eq!(outcome.visible, vec![0, 1, 2, 3]);
        assert_eq!(outcome.hidden, 0);
    }

    #[test]
    fn filters_then_sorts() {
        let rules = RuleSet::new().with_required_status("available");
        let pass = TablePass::new(rules)
            .order_by(Field::Backlinks, Dir::Asc)
            .with_context(SortContext::at(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        let outcome = pass.run(&rows());
        assert_eq!(outcome.visible, vec![1, 3, 0]);
        assert_eq!(outcome.hidden, 1);
        assert_eq!(outcome.total(), 4);
        assert!(!outcome.is_visible(2));
    }

    #[test]
    fn count_matches_run() {
        let pass = TablePass::new(RuleSet::new().with_allowed_suffixes("com"));
        let data = rows();
        assert_eq!(pass.count(&data), pass.run(&data).visible_count());
    }
}
