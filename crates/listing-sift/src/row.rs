//! Row projection: the plain values the engine reads from a listing row.
//!
//! The surrounding UI projects each table row into something implementing
//! [`ListingRow`]; the engine never touches markup. [`Row`] is a ready-made
//! owned projection.

use std::collections::HashMap;

use crate::domain::Record;
use crate::field::Field;

/// The readable content of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell<'a> {
    /// Displayed text.
    pub text: &'a str,
    /// The `title` attribute, when the cell has one.
    pub title: Option<&'a str>,
}

impl<'a> Cell<'a> {
    /// A cell with text only.
    pub fn new(text: &'a str) -> Self {
        Cell { text, title: None }
    }

    /// A cell with text and a title.
    pub fn titled(text: &'a str, title: &'a str) -> Self {
        Cell {
            text,
            title: Some(title),
        }
    }
}

/// Trait for rows the engine can filter and sort.
///
/// # Example
///
/// ```
/// use listing_sift::{Cell, Field, ListingRow};
///
/// struct Listing {
///     domain: String,
///     backlinks: String,
/// }
///
/// impl ListingRow for Listing {
///     fn cell(&self, field: &Field) -> Cell<'_> {
///         match field {
///             Field::Domain => Cell::new(&self.domain),
///             Field::Backlinks => Cell::new(&self.backlinks),
///             _ => Cell::default(),
///         }
///     }
/// }
///
/// let row = Listing { domain: "dofa.com".into(), backlinks: "12".into() };
/// assert_eq!(row.record().name, "dofa");
/// ```
pub trait ListingRow {
    /// Returns the cell for a column, or an empty cell if absent.
    fn cell(&self, field: &Field) -> Cell<'_>;

    /// The full domain shown in the row.
    fn domain(&self) -> &str {
        self.cell(&Field::Domain).text.trim()
    }

    /// The status text the status rule compares against.
    fn status(&self) -> &str {
        ""
    }

    /// Builds the filter record for this row.
    fn record(&self) -> Record {
        Record::new(self.domain(), self.status())
    }

    /// Returns a static accessor suitable for [`sort_rows_by`](crate::sort_rows_by).
    fn accessor<'a>(row: &'a Self, field: &Field) -> Cell<'a>
    where
        Self: Sized,
    {
        row.cell(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OwnedCell {
    text: String,
    title: Option<String>,
}

/// An owned row projection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    domain: String,
    status: String,
    cells: HashMap<Field, OwnedCell>,
}

impl Row {
    /// Creates a row for a domain.
    pub fn new(domain: &str) -> Self {
        Row {
            domain: domain.to_string(),
            ..Row::default()
        }
    }

    /// Sets the status text.
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Adds a cell by column class (`field_bl`) or key (`bl`).
    pub fn with_cell(mut self, class: &str, text: &str) -> Self {
        self.cells.insert(
            Field::parse(class),
            OwnedCell {
                text: text.to_string(),
                title: None,
            },
        );
        self
    }

    /// Adds a cell with a title attribute.
    pub fn with_titled_cell(mut self, class: &str, text: &str, title: &str) -> Self {
        self.cells.insert(
            Field::parse(class),
            OwnedCell {
                text: text.to_string(),
                title: Some(title.to_string()),
            },
        );
        self
    }
}

impl ListingRow for Row {
    fn cell(&self, field: &Field) -> Cell<'_> {
        match self.cells.get(field) {
            Some(cell) => Cell {
                text: &cell.text,
                title: cell.title.as_deref(),
            },
            None if *field == Field::Domain => Cell::new(&self.domain),
            None => Cell::default(),
        }
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_cells_by_class_or_key() {
        let row = Row::new("dofa.com")
            .with_cell("field_bl", "12")
            .with_titled_cell("domainpop", "1.2 K", "1,204");
        assert_eq!(row.cell(&Field::Backlinks), Cell::new("12"));
        assert_eq!(row.cell(&Field::DomainPop), Cell::titled("1.2 K", "1,204"));
        assert_eq!(row.cell(&Field::Length), Cell::default());
    }

    #[test]
    fn domain_cell_falls_back_to_domain() {
        let row = Row::new("dofa.com");
        assert_eq!(row.cell(&Field::Domain).text, "dofa.com");
    }

    #[test]
    fn record_uses_status() {
        let row = Row::new("Dofa.IO").with_status("Available");
        let record = row.record();
        assert_eq!(record.name, "dofa");
        assert_eq!(record.suffix, "io");
        assert_eq!(record.status, "Available");
    }
}
