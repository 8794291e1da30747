//! Sort-key extraction from displayed cell text and its title attribute.
//!
//! Listing cells often abbreviate their value ("2.5 K") and carry the exact
//! figure in the `title` attribute, so the title is tried first. Both sources
//! share one parse cascade, first success wins:
//!
//! 1. relative dates: `today[ HH:MM]`, `yesterday[ HH:MM]`, `N day(s)`
//! 2. ISO dates: `YYYY-MM-DD[ HH:MM[:SS]]...`
//! 3. European dates: `DD.MM.YYYY...`
//! 4. numbers with a `k`/`m`/`b` magnitude
//! 5. plain numbers with optional thousands separators
//!
//! Dates become milliseconds since the epoch in wall-clock time, so every
//! date shape lands on the same scale regardless of time zone.

use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::Field;
use crate::value::SortKey;

// Added to an untimed `today`/`yesterday` so it sorts after timed entries of
// the same day: 23:59:59.999.
const UNTIMED_OFFSET_MS: i64 = 86_399_999;

static RELATIVE_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(today|yesterday)(?:\s+(\d{1,2}):(\d{2}))?\b").expect("relative day regex")
});
static DAYS_AGO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(\d+)\s*days?\b").expect("days regex"));
static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})(?:[T ](\d{2}):(\d{2})(?::(\d{2}))?)?").expect("iso regex")
});
static EURO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})").expect("european date regex"));
static MAGNITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(-?\d*\.?\d+)([kmb])$").expect("magnitude regex"));
static PLAIN_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("plain number regex"));

/// The reference day relative dates resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortContext {
    today: NaiveDate,
}

impl SortContext {
    /// Uses the local calendar date.
    pub fn now() -> Self {
        SortContext {
            today: Local::now().date_naive(),
        }
    }

    /// Uses a fixed date.
    pub fn at(today: NaiveDate) -> Self {
        SortContext { today }
    }

    /// The reference date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

impl Default for SortContext {
    fn default() -> Self {
        SortContext::now()
    }
}

/// Derives the sort key of one cell.
///
/// Status columns always yield text keys. Otherwise the title is parsed
/// first, then the displayed text; if neither parses, the key is the
/// lower-cased displayed text (or the title when the text is empty).
///
/// ```
/// use listing_sift::{extract_sort_key, Field, SortContext, SortKey};
///
/// let ctx = SortContext::now();
/// let key = extract_sort_key("257.0 K", Some("257,041"), &Field::Backlinks, &ctx);
/// assert_eq!(key, SortKey::Numeric(257041.0));
/// ```
pub fn extract_sort_key(
    text: &str,
    title: Option<&str>,
    field: &Field,
    ctx: &SortContext,
) -> SortKey {
    let text = text.trim();
    let title = title.map(str::trim).filter(|t| !t.is_empty());

    if !field.is_categorical() {
        let parsed = title
            .and_then(|t| parse_sort_value(t, ctx))
            .or_else(|| parse_sort_value(text, ctx));
        if let Some(value) = parsed {
            return SortKey::Numeric(value);
        }
    }

    SortKey::text(fallback_text(text, title))
}

/// The text a cell falls back to for string comparison.
pub(crate) fn fallback_text<'a>(text: &'a str, title: Option<&'a str>) -> &'a str {
    if text.is_empty() {
        title.unwrap_or("")
    } else {
        text
    }
}

/// Parses a cell string into a comparable number, or `None`.
pub fn parse_sort_value(raw: &str, ctx: &SortContext) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    parse_relative(raw, ctx)
        .or_else(|| parse_iso(raw))
        .or_else(|| parse_european(raw))
        .or_else(|| parse_magnitude(raw))
        .or_else(|| parse_plain(raw))
}

fn wall_millis(at: NaiveDateTime) -> f64 {
    at.and_utc().timestamp_millis() as f64
}

fn midnight(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn parse_relative(raw: &str, ctx: &SortContext) -> Option<f64> {
    if let Some(caps) = RELATIVE_DAY.captures(raw) {
        let day = if caps[1].eq_ignore_ascii_case("today") {
            ctx.today
        } else {
            ctx.today.checked_sub_days(Days::new(1))?
        };
        let base = midnight(day);
        let at = match (caps.get(2), caps.get(3)) {
            (Some(h), Some(m)) => {
                let time = NaiveTime::from_hms_opt(h.as_str().parse().ok()?, m.as_str().parse().ok()?, 0)?;
                day.and_time(time)
            }
            _ => base + chrono::Duration::milliseconds(UNTIMED_OFFSET_MS),
        };
        return Some(wall_millis(at));
    }

    let caps = DAYS_AGO.captures(raw)?;
    let days: u64 = caps[1].parse().ok()?;
    let day = ctx.today.checked_sub_days(Days::new(days))?;
    Some(wall_millis(midnight(day)))
}

fn parse_iso(raw: &str) -> Option<f64> {
    let caps = ISO_DATE.captures(raw)?;
    let day = NaiveDate::from_ymd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)?;
    let time = match (caps.get(4), caps.get(5)) {
        (Some(h), Some(m)) => {
            let secs = caps.get(6).map_or(Some(0), |s| s.as_str().parse().ok())?;
            NaiveTime::from_hms_opt(h.as_str().parse().ok()?, m.as_str().parse().ok()?, secs)?
        }
        _ => NaiveTime::MIN,
    };
    Some(wall_millis(day.and_time(time)))
}

fn parse_european(raw: &str) -> Option<f64> {
    let caps = EURO_DATE.captures(raw)?;
    let day = NaiveDate::from_ymd_opt(caps[3].parse().ok()?, caps[2].parse().ok()?, caps[1].parse().ok()?)?;
    Some(wall_millis(midnight(day)))
}

fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ',' | '$') && !c.is_whitespace())
        .collect()
}

fn parse_magnitude(raw: &str) -> Option<f64> {
    let cleaned = strip_separators(raw);
    let caps = MAGNITUDE.captures(&cleaned)?;
    let base: f64 = caps[1].parse().ok()?;
    let scale = match caps[2].to_ascii_lowercase().as_str() {
        "k" => 1e3,
        "m" => 1e6,
        "b" => 1e9,
        _ => return None,
    };
    Some(base * scale)
}

fn parse_plain(raw: &str) -> Option<f64> {
    let cleaned = strip_separators(raw);
    if !PLAIN_NUMBER.is_match(&cleaned) {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SortContext {
        SortContext::at(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap())
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> f64 {
        let dt = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap();
        wall_millis(dt)
    }

    #[test]
    fn title_beats_abbreviated_text() {
        let key = extract_sort_key("257.0 K", Some("257,041"), &Field::Backlinks, &ctx());
        assert_eq!(key, SortKey::Numeric(257_041.0));
    }

    #[test]
    fn unparseable_title_falls_back_to_text_date() {
        let key = extract_sort_key(
            "2026-01-27",
            Some("Registered on a Tuesday, long ago"),
            &Field::CreationDate,
            &ctx(),
        );
        assert_eq!(key, SortKey::Numeric(at(2026, 1, 27, 0, 0)));
    }

    #[test]
    fn status_columns_stay_text() {
        let field = Field::parse("field_statuscom");
        let key = extract_sort_key("2024", Some("1"), &field, &ctx());
        assert_eq!(key, SortKey::Text("2024".into()));
    }

    #[test]
    fn text_fallback_prefers_displayed_text() {
        let field = Field::parse("field_registrar");
        assert_eq!(
            extract_sort_key("GoDaddy", Some("GoDaddy LLC"), &field, &ctx()),
            SortKey::text("godaddy")
        );
        assert_eq!(
            extract_sort_key("", Some("Namecheap"), &field, &ctx()),
            SortKey::text("namecheap")
        );
    }

    #[test]
    fn relative_days() {
        let c = ctx();
        assert_eq!(parse_sort_value("today 14:30", &c), Some(at(2026, 1, 27, 14, 30)));
        assert_eq!(parse_sort_value("Yesterday 08:05", &c), Some(at(2026, 1, 26, 8, 5)));
        assert_eq!(parse_sort_value("3 days", &c), Some(at(2026, 1, 24, 0, 0)));
        assert_eq!(parse_sort_value("1 day", &c), Some(at(2026, 1, 26, 0, 0)));
    }

    #[test]
    fn untimed_today_sorts_after_timed_today() {
        let c = ctx();
        let untimed = parse_sort_value("today", &c).unwrap();
        let late = parse_sort_value("today 23:59", &c).unwrap();
        let tomorrow = at(2026, 1, 28, 0, 0);
        assert!(untimed > late);
        assert!(untimed < tomorrow);
    }

    #[test]
    fn invalid_clock_time_is_not_relative() {
        assert_eq!(parse_sort_value("today 25:00", &ctx()), None);
    }

    #[test]
    fn iso_dates_with_and_without_time() {
        assert_eq!(parse_sort_value("2025-12-01", &ctx()), Some(at(2025, 12, 1, 0, 0)));
        assert_eq!(
            parse_sort_value("2025-12-01 13:45:00", &ctx()),
            Some(at(2025, 12, 1, 13, 45))
        );
        assert_eq!(parse_sort_value("2025-13-40", &ctx()), None);
    }

    #[test]
    fn european_dates() {
        assert_eq!(parse_sort_value("27.01.2026", &ctx()), Some(at(2026, 1, 27, 0, 0)));
        assert_eq!(parse_sort_value("5.3.2020 (deleted)", &ctx()), Some(at(2020, 3, 5, 0, 0)));
    }

    #[test]
    fn magnitudes() {
        assert_eq!(parse_sort_value("2.5k", &ctx()), Some(2_500.0));
        assert_eq!(parse_sort_value("1.2 M", &ctx()), Some(1_200_000.0));
        assert_eq!(parse_sort_value("$3B", &ctx()), Some(3e9));
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_sort_value("1,234", &ctx()), Some(1_234.0));
        assert_eq!(parse_sort_value("-12.5", &ctx()), Some(-12.5));
        assert_eq!(parse_sort_value("$ 40", &ctx()), Some(40.0));
        assert_eq!(parse_sort_value("12abc", &ctx()), None);
        assert_eq!(parse_sort_value("", &ctx()), None);
        assert_eq!(parse_sort_value("-", &ctx()), None);
    }
}
