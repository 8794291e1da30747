//! Row ordering: sort direction, key comparison and the stable row sort.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::{Result, SiftError};
use crate::extract::{extract_sort_key, fallback_text, SortContext};
use crate::field::Field;
use crate::row::{Cell, ListingRow};
use crate::value::SortKey;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Dir::Asc),
            "desc" => Ok(Dir::Desc),
            _ => Err(SiftError::InvalidRule {
                kind: "sort direction",
                value: s.to_string(),
            }),
        }
    }
}

/// Compares strings the way a reader expects a table column to sort.
///
/// Accents and case are ignored, and runs of digits compare by numeric value,
/// so `"item2"` sorts before `"item10"`.
///
/// ```
/// use std::cmp::Ordering;
/// use listing_sift::natural_cmp;
///
/// assert_eq!(natural_cmp("item2", "Item10"), Ordering::Less);
/// assert_eq!(natural_cmp("Café", "cafe"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = deunicode::deunicode(a).to_lowercase();
    let b = deunicode::deunicode(b).to_lowercase();
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digits(&mut left);
                let run_b = take_digits(&mut right);
                let ordering = compare_digit_runs(&run_a, &run_b);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares two cell keys.
///
/// Two numeric keys compare by value. Anything else compares the cells'
/// fallback texts with [`natural_cmp`].
pub fn compare_keys(a: &SortKey, a_text: &str, b: &SortKey, b_text: &str) -> Ordering {
    match (a, b) {
        (SortKey::Numeric(x), SortKey::Numeric(y)) => x.total_cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => natural_cmp(x, y),
        _ => natural_cmp(a_text, b_text),
    }
}

struct Keyed<'r, T> {
    index: usize,
    row: &'r T,
    key: SortKey,
    text: String,
}

/// Sorts rows by one column using a cell accessor.
///
/// Returns a new ordering and leaves `rows` untouched. With no field the
/// input order is returned. Equal keys keep their input order in both
/// directions.
pub fn sort_rows_by<'r, T, F>(
    rows: &'r [T],
    field: Option<&Field>,
    dir: Dir,
    ctx: &SortContext,
    accessor: F,
) -> Vec<&'r T>
where
    for<'a> F: Fn(&'a T, &Field) -> Cell<'a>,
{
    let Some(field) = field else {
        return rows.iter().collect();
    };

    let keyed: Vec<Keyed<'r, T>> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let cell = accessor(row, field);
            Keyed {
                index,
                row,
                key: extract_sort_key(cell.text, cell.title, field, ctx),
                text: fallback_text(cell.text.trim(), cell.title.map(str::trim)).to_lowercase(),
            }
        })
        .collect();

    let keyed = merge_sort(keyed, &|a: &Keyed<'r, T>, b: &Keyed<'r, T>| {
        dir.apply(compare_keys(&a.key, &a.text, &b.key, &b.text))
            .then_with(|| a.index.cmp(&b.index))
    });

    tracing::trace!(field = %field, dir = %dir, rows = keyed.len(), "sorted rows");
    keyed.into_iter().map(|k| k.row).collect()
}

// Columns mixing numbers and text can yield a cyclic comparator, on which the
// std sorts may panic. A plain merge sort always terminates with some order.
fn merge_sort<T, F>(mut items: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp);
    let right = merge_sort(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => cmp(a, b) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }
    merged
}

/// Sorts [`ListingRow`]s by one column.
///
/// ```
/// use listing_sift::{sort_rows, Dir, Field, ListingRow, Row, SortContext};
///
/// let rows = vec![
///     Row::new("a.com").with_cell("field_bl", "10"),
///     Row::new("b.com").with_cell("field_bl", "2"),
///     Row::new("c.com").with_cell("field_bl", "1"),
/// ];
/// let sorted = sort_rows(&rows, Some(&Field::Backlinks), Dir::Asc, &SortContext::now());
/// let names: Vec<&str> = sorted.iter().map(|r| r.domain()).collect();
/// assert_eq!(names, ["c.com", "b.com", "a.com"]);
/// ```
pub fn sort_rows<'r, T: ListingRow>(
    rows: &'r [T],
    field: Option<&Field>,
    dir: Dir,
    ctx: &SortContext,
) -> Vec<&'r T> {
    sort_rows_by(rows, field, dir, ctx, T::accessor)
}
