//! Heatmap classification of metric cells.
//!
//! Each metric family has a fixed three-step ladder. Higher-is-better
//! families light up as the value grows; lower-is-better families (name
//! length, archive birth and creation year) light up as it shrinks. The tint
//! is one hue at three opacities and never affects visibility or order.

use crate::field::Field;

/// Intensity of a heatmap tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeatTier {
    /// Faint tint for the first step of a ladder.
    Low,
    /// Middle tint.
    Medium,
    /// Strongest tint.
    High,
}

/// RGB of the single heatmap hue.
pub const HEAT_RGB: (u8, u8, u8) = (34, 197, 94);

impl HeatTier {
    /// Background opacity for this tier.
    pub fn alpha(self) -> f32 {
        match self {
            HeatTier::Low => 0.15,
            HeatTier::Medium => 0.3,
            HeatTier::High => 0.5,
        }
    }

    /// CSS color for this tier.
    ///
    /// ```
    /// use listing_sift::HeatTier;
    ///
    /// assert_eq!(HeatTier::High.css(), "rgba(34, 197, 94, 0.5)");
    /// ```
    pub fn css(self) -> String {
        let (r, g, b) = HEAT_RGB;
        format!("rgba({r}, {g}, {b}, {})", self.alpha())
    }
}

#[derive(Debug, Clone, Copy)]
enum Ladder {
    /// Tier when value >= threshold (low, medium, high).
    AtLeast(f64, f64, f64),
    /// Tier when value <= threshold (low, medium, high).
    AtMost(f64, f64, f64),
    /// Fixed tier for any positive value.
    Presence(HeatTier),
}

impl Ladder {
    fn for_field(field: &Field) -> Option<Ladder> {
        match field {
            Field::Backlinks => Some(Ladder::AtLeast(100.0, 1_000.0, 100_000.0)),
            Field::DomainPop | Field::ArchiveEntries => Some(Ladder::AtLeast(10.0, 100.0, 1_000.0)),
            Field::SearchVolume => Some(Ladder::AtLeast(100.0, 1_000.0, 10_000.0)),
            Field::Length => Some(Ladder::AtMost(10.0, 7.0, 5.0)),
            Field::ArchiveBirth | Field::CreationDate => Some(Ladder::AtMost(2015.0, 2010.0, 2000.0)),
            Field::Wikipedia => Some(Ladder::Presence(HeatTier::Medium)),
            _ => None,
        }
    }

    fn classify(self, value: f64) -> Option<HeatTier> {
        match self {
            Ladder::AtLeast(low, medium, high) => {
                if value >= high {
                    Some(HeatTier::High)
                } else if value >= medium {
                    Some(HeatTier::Medium)
                } else if value >= low {
                    Some(HeatTier::Low)
                } else {
                    None
                }
            }
            Ladder::AtMost(low, medium, high) => {
                if value <= high {
                    Some(HeatTier::High)
                } else if value <= medium {
                    Some(HeatTier::Medium)
                } else if value <= low {
                    Some(HeatTier::Low)
                } else {
                    None
                }
            }
            Ladder::Presence(tier) => (value > 0.0).then_some(tier),
        }
    }
}

/// Classifies a metric cell, or `None` for no tint.
///
/// Unparseable values get no tint, as do values at or below zero. For year
/// columns such a value is a placeholder, not an ancient year.
///
/// ```
/// use listing_sift::{heat_color, Field, HeatTier};
///
/// assert_eq!(heat_color(&Field::Backlinks, "1,500"), Some(HeatTier::Medium));
/// assert_eq!(heat_color(&Field::Backlinks, "50"), None);
/// ```
pub fn heat_color(field: &Field, raw: &str) -> Option<HeatTier> {
    let ladder = Ladder::for_field(field)?;
    let value = leading_float(&raw.replace(',', ""))?;
    if value <= 0.0 {
        return None;
    }
    ladder.classify(value)
}

// Parses the longest numeric prefix, so "2004-05-01" reads as 2004 and
// "1e5" as 100000.
fn leading_float(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let bytes = raw.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || end > digits_start {
            end = frac_end;
        }
    }
    if end == digits_start {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    raw[..end].parse().ok()
}
