//! Domain splitting and the per-row record under evaluation.

/// A fully-qualified domain decomposed into its first label and the rest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainParts {
    /// The first label, before the first dot.
    pub name: String,
    /// All remaining labels joined by dots (`com`, `co.uk`).
    pub suffix: String,
}

/// Splits a domain into `(name, suffix)` after lower-casing it.
///
/// Purely syntactic: `"Shop.Co.UK"` yields name `shop` and suffix `co.uk`.
/// Empty input yields empty parts.
///
/// ```
/// use listing_sift::split_domain;
///
/// let parts = split_domain("Example.co.uk");
/// assert_eq!(parts.name, "example");
/// assert_eq!(parts.suffix, "co.uk");
/// ```
pub fn split_domain(domain: &str) -> DomainParts {
    let lower = domain.to_lowercase();
    match lower.split_once('.') {
        Some((name, suffix)) => DomainParts {
            name: name.to_string(),
            suffix: suffix.to_string(),
        },
        None => DomainParts {
            name: lower,
            suffix: String::new(),
        },
    }
}

/// The subject of one filter evaluation: a split domain plus its status text.
///
/// Records are built fresh from row data for each pass and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Lower-cased first label.
    pub name: String,
    /// Lower-cased remaining labels.
    pub suffix: String,
    /// Status text as displayed (compared case-insensitively).
    pub status: String,
}

impl Record {
    /// Builds a record from a full domain and a status text.
    pub fn new(domain: &str, status: &str) -> Self {
        let DomainParts { name, suffix } = split_domain(domain);
        Record {
            name,
            suffix,
            status: status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_single_label_suffix() {
        let parts = split_domain("dofa.com");
        assert_eq!(parts.name, "dofa");
        assert_eq!(parts.suffix, "com");
    }

    #[test]
    fn splits_multi_label_suffix() {
        let parts = split_domain("Tea-Shop.CO.UK");
        assert_eq!(parts.name, "tea-shop");
        assert_eq!(parts.suffix, "co.uk");
    }

    #[test]
    fn empty_input() {
        assert_eq!(split_domain(""), DomainParts::default());
    }

    #[test]
    fn no_dot_is_all_name() {
        let parts = split_domain("localhost");
        assert_eq!(parts.name, "localhost");
        assert_eq!(parts.suffix, "");
    }

    #[test]
    fn record_keeps_status_verbatim() {
        let record = Record::new("abc.net", "Available");
        assert_eq!(record.name, "abc");
        assert_eq!(record.suffix, "net");
        assert_eq!(record.status, "Available");
    }
}
