// src/shared/format/mod.rs
//
// Display helpers shared by the project, blog, milestone and profile views.
// All of them are total: malformed input is echoed back rather than rejected,
// since the content store already validates dates at startup.

use chrono::NaiveDate;

use crate::modules::content::application::domain::entities::Duration;

pub const ONGOING_LABEL: &str = "Ongoing";
const RANGE_SEPARATOR: &str = " → ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// `Jul 2024`
    Short,
    /// `July 2024`
    Long,
}

impl MonthStyle {
    fn pattern(self) -> &'static str {
        match self {
            MonthStyle::Short => "%b %Y",
            MonthStyle::Long => "%B %Y",
        }
    }
}

/// Parses a `YYYY-MM` value into the first day of that month.
pub fn parse_year_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
}

pub fn format_year_month(value: &str, style: MonthStyle) -> String {
    match parse_year_month(value) {
        Some(date) => date.format(style.pattern()).to_string(),
        None => value.to_string(),
    }
}

/// `start → end`, with `Ongoing` standing in for an absent end.
pub fn format_date_range(duration: &Duration, style: MonthStyle) -> String {
    let start = format_year_month(&duration.start, style);
    let end = duration
        .end
        .as_deref()
        .map(|end| format_year_month(end, style))
        .unwrap_or_else(|| ONGOING_LABEL.to_string());

    format!("{start}{RANGE_SEPARATOR}{end}")
}

/// `2024-01-10` -> `January 10, 2024`
pub fn format_calendar_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Widest fraction a caller can ask for.
pub const MAX_FRACTION_DIGITS: u32 = 100;

/// `n / 1000` as a double, rounded to `decimals` places and suffixed with `K`.
///
/// Rounding follows the double the division produces, not the decimal the
/// author had in mind: 350 is stored just under 0.35 and shows as `0.3K`,
/// while 1250 is exactly 1.25 and ties upward to `1.3K`. Small counts still
/// show up as `0.1K` (124 users). `decimals` is capped at
/// `MAX_FRACTION_DIGITS`.
pub fn abbreviate_thousands(n: u64, decimals: u32) -> String {
    let decimals = decimals.min(MAX_FRACTION_DIGITS) as usize;
    let value = n as f64 / 1000.0;

    // `{:.N}` formats the exact binary value but breaks exact ties to even.
    let value = if is_exact_tie(value, decimals) {
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };

    format!("{value:.decimals$}K")
}

/// True when the exact value of a positive finite `value` ends in a 5 one
/// place past `digits`. A dyadic fraction with `k` binary places has exactly
/// `k` decimal places, the last of which is 5.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    if !value.is_finite() || value <= 0.0 {
        return false;
    }

    let bits = value.to_bits();
    let exponent_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if exponent_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent_bits - 1075)
    };

    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    let fractional_places = (-exponent).max(0) as usize;

    fractional_places == digits + 1
}

/// First letter of each word, keeping the first two. Empty words add nothing,
/// so `"Double  Space"` gives `"DS"`.
pub fn initials(title: &str) -> String {
    title
        .split(' ')
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

/// First letter of each of the first two words. An empty second word (double
/// space) contributes nothing, so `"Double  Space"` gives `"D"`.
pub fn leading_word_initials(title: &str) -> String {
    title
        .split(' ')
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Keeps the first `max_chars` characters and always appends `...`.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duration(start: &str, end: Option<&str>) -> Duration {
        Duration {
            start: start.to_string(),
            end: end.map(str::to_string),
        }
    }

    #[test]
    fn date_range_short_style() {
        let d = duration("2024-07", Some("2025-05"));
        assert_eq!(format_date_range(&d, MonthStyle::Short), "Jul 2024 → May 2025");
    }

    #[test]
    fn date_range_long_style() {
        let d = duration("2024-07", Some("2025-05"));
        assert_eq!(format_date_range(&d, MonthStyle::Long), "July 2024 → May 2025");
    }

    #[test]
    fn date_range_without_end_is_ongoing() {
        let d = duration("2022-06", None);
        assert_eq!(format_date_range(&d, MonthStyle::Short), "Jun 2022 → Ongoing");
    }

    #[test]
    fn year_month_falls_back_to_raw_value() {
        assert_eq!(format_year_month("soon", MonthStyle::Short), "soon");
        assert_eq!(format_year_month("2024-13", MonthStyle::Long), "2024-13");
    }

    #[test]
    fn calendar_date_uses_full_month_name() {
        assert_eq!(format_calendar_date("2024-01-10"), "January 10, 2024");
        assert_eq!(format_calendar_date("2024-08-01"), "August 1, 2024");
        assert_eq!(format_calendar_date("yesterday"), "yesterday");
    }

    #[test]
    fn abbreviate_without_decimals() {
        assert_eq!(abbreviate_thousands(15000, 0), "15K");
        assert_eq!(abbreviate_thousands(0, 0), "0K");
        assert_eq!(abbreviate_thousands(2500, 0), "3K");
        assert_eq!(abbreviate_thousands(124, 0), "0K");
    }

    #[test]
    fn abbreviate_with_one_decimal_rounds() {
        assert_eq!(abbreviate_thousands(12650, 1), "12.7K");
        assert_eq!(abbreviate_thousands(12649, 1), "12.6K");
        assert_eq!(abbreviate_thousands(1000, 1), "1.0K");
    }

    #[test]
    fn abbreviate_rounds_the_stored_double() {
        // 0.35 and 4.35 are stored slightly below the tie.
        assert_eq!(abbreviate_thousands(350, 1), "0.3K");
        assert_eq!(abbreviate_thousands(4350, 1), "4.3K");
        // 1.25 is exact, so the tie goes up rather than to even.
        assert_eq!(abbreviate_thousands(1250, 1), "1.3K");
        assert_eq!(abbreviate_thousands(1125, 2), "1.13K");
        assert_eq!(abbreviate_thousands(500, 0), "1K");
    }

    #[test]
    fn abbreviate_caps_fraction_digits() {
        let out = abbreviate_thousands(1, u32::MAX);
        let fraction = out.trim_end_matches('K').split('.').nth(1).unwrap();

        assert_eq!(fraction.len(), MAX_FRACTION_DIGITS as usize);
        assert!(out.starts_with("0.001000"));
    }

    #[test]
    fn abbreviate_small_count_quirk() {
        assert_eq!(abbreviate_thousands(124, 1), "0.1K");
        assert_eq!(abbreviate_thousands(40, 1), "0.0K");
    }

    #[test]
    fn abbreviate_pads_fraction() {
        assert_eq!(abbreviate_thousands(1005, 2), "1.00K");
        assert_eq!(abbreviate_thousands(1050, 2), "1.05K");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Google Maps Scraper"), "GM");
        assert_eq!(initials("Barbeon"), "B");
        assert_eq!(initials("QRDive - QR Tracking SaaS"), "Q-");
        assert_eq!(initials("Double  Space"), "DS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn leading_word_initials_stop_after_two_words() {
        assert_eq!(leading_word_initials("SEO for SaaS"), "Sf");
        assert_eq!(leading_word_initials("Double  Space"), "D");
        assert_eq!(leading_word_initials("Hosting"), "H");
        assert_eq!(leading_word_initials(""), "");
    }

    #[test]
    fn excerpt_always_appends_ellipsis() {
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("ab", 3), "ab...");
        assert_eq!(excerpt("", 160), "...");
    }
}
