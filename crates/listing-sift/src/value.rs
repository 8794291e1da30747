//! Sort keys derived from cell values.

/// Typed, comparable value of one cell, rebuilt on every sort.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// A number, or a date as milliseconds since the epoch (wall clock).
    Numeric(f64),
    /// Lower-cased text.
    Text(String),
}

impl SortKey {
    /// Creates a text key, lower-casing the input.
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }

    /// Returns `true` if this is a `Numeric` key.
    pub fn is_numeric(&self) -> bool {
        matches!(self, SortKey::Numeric(_))
    }

    /// Extracts the number, if present.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SortKey::Numeric(n) => Some(*n),
            SortKey::Text(_) => None,
        }
    }

    /// Extracts the text, if present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SortKey::Text(s) => Some(s),
            SortKey::Numeric(_) => None,
        }
    }
}

impl From<f64> for SortKey {
    fn from(n: f64) -> Self {
        SortKey::Numeric(n)
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        SortKey::text(s)
    }
}
