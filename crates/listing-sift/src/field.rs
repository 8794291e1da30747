//! Column identities of the listing table.
//!
//! Listing cells carry a `field_*` class (`field_bl`, `field_statuscom`) and
//! header cells the matching `head_*` class. [`Field`] types the handful of
//! columns the engine treats specially; everything else is [`Field::Other`].

/// A listing column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// The domain name itself.
    Domain,
    /// Backlink count.
    Backlinks,
    /// Number of referring domains.
    DomainPop,
    /// Web archive snapshot count.
    ArchiveEntries,
    /// Year of the first web archive snapshot.
    ArchiveBirth,
    /// Registration (whois creation) date or year.
    CreationDate,
    /// Name length.
    Length,
    /// Monthly search volume.
    SearchVolume,
    /// Wikipedia backlink count.
    Wikipedia,
    /// The watchlist toggle column.
    Watchlist,
    /// A status column (`status`, `statuscom`, `statusnet`, ...).
    Status(String),
    /// Any other column, keyed by its bare name.
    Other(String),
}

impl Field {
    /// Parses a column identity from `field_x`, `head_x` or bare `x`.
    ///
    /// ```
    /// use listing_sift::Field;
    ///
    /// assert_eq!(Field::parse("field_bl"), Field::Backlinks);
    /// assert_eq!(Field::parse("head_abirth"), Field::ArchiveBirth);
    /// assert!(Field::parse("field_statuscom").is_categorical());
    /// ```
    pub fn parse(class: &str) -> Self {
        let key = class.trim().to_lowercase();
        let key = key
            .strip_prefix("field_")
            .or_else(|| key.strip_prefix("head_"))
            .unwrap_or(&key);
        match key {
            "domain" => Field::Domain,
            "bl" => Field::Backlinks,
            "domainpop" => Field::DomainPop,
            "aentries" => Field::ArchiveEntries,
            "abirth" => Field::ArchiveBirth,
            "creationdate" => Field::CreationDate,
            "length" => Field::Length,
            "searchvolume" | "sv" => Field::SearchVolume,
            "wikipedia" | "wpl" => Field::Wikipedia,
            "watchlist" => Field::Watchlist,
            other if other.contains("status") => Field::Status(other.to_string()),
            other => Field::Other(other.to_string()),
        }
    }

    /// Returns the bare column key (`bl`, `statuscom`).
    pub fn key(&self) -> &str {
        match self {
            Field::Domain => "domain",
            Field::Backlinks => "bl",
            Field::DomainPop => "domainpop",
            Field::ArchiveEntries => "aentries",
            Field::ArchiveBirth => "abirth",
            Field::CreationDate => "creationdate",
            Field::Length => "length",
            Field::SearchVolume => "searchvolume",
            Field::Wikipedia => "wikipedia",
            Field::Watchlist => "watchlist",
            Field::Status(key) | Field::Other(key) => key,
        }
    }

    /// Returns the cell class (`field_bl`).
    pub fn cell_class(&self) -> String {
        format!("field_{}", self.key())
    }

    /// Returns the header class (`head_bl`).
    pub fn head_class(&self) -> String {
        format!("head_{}", self.key())
    }

    /// Returns `true` for columns the user may hide.
    ///
    /// The domain and watchlist columns always stay visible.
    pub fn is_toggleable(&self) -> bool {
        !matches!(self, Field::Domain | Field::Watchlist)
    }

    /// Returns `true` for columns that always sort as text.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Field::Status(_))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
