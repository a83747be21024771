//! Cell value normalization for display
//!
//! Spreadsheet cells hold numbers, numeric-looking text (`"85%"`, `"1,234"`)
//! or free text (grades, remarks). Every value is resolved once into a
//! [`Normalized`] variant and then formatted: numerics with exactly one
//! fractional digit, everything else verbatim.
//!
//! Rounding follows Rust's `{:.1}` formatting, i.e. round-half-to-even on the
//! exact binary value of the `f64`: `7.25` is exactly representable and
//! becomes `"7.2"`, while `7.26` becomes `"7.3"`.

use crate::types::CellValue;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Result of interpreting one cell
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Missing or blank
    Empty,
    /// Parsed as a finite number
    Numeric(f64),
    /// Anything else, trimmed and NFKC-normalized
    Text(String),
}

impl Normalized {
    /// Interpret a typed cell
    pub fn from_cell(value: &CellValue) -> Self {
        match value {
            CellValue::Empty => Normalized::Empty,
            CellValue::Number(n) if n.is_finite() => Normalized::Numeric(*n),
            other => Self::from_text(&other.raw_text()),
        }
    }

    /// Interpret a raw string
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Normalized::Empty;
        }

        let text: String = trimmed.nfkc().collect();

        let candidate: String = text.chars().filter(|c| *c != ',' && *c != '%').collect();
        match strip_digit_underscores(candidate.trim()).parse::<f64>() {
            Ok(n) if n.is_finite() => Normalized::Numeric(n),
            _ => Normalized::Text(text),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Normalized::Numeric(_))
    }
}

/// Drop `_` digit group separators (`1_000`). An underscore that is not
/// between two ASCII digits is kept so the value stays unparseable.
fn strip_digit_underscores(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let grouped = c == '_'
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            !grouped
        })
        .map(|(_, &c)| c)
        .collect()
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalized::Empty => Ok(()),
            Normalized::Numeric(n) => write!(f, "{:.1}", n),
            Normalized::Text(s) => f.write_str(s),
        }
    }
}

/// Canonical display string for a cell. Never fails.
pub fn normalize(value: &CellValue) -> String {
    Normalized::from_cell(value).to_string()
}

/// Canonical display string for raw text. Never fails.
pub fn normalize_str(raw: &str) -> String {
    Normalized::from_text(raw).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_gain_one_decimal() {
        assert_eq!(normalize_str("7"), "7.0");
        assert_eq!(normalize_str("0"), "0.0");
        assert_eq!(normalize_str("-3"), "-3.0");
        assert_eq!(normalize(&CellValue::Number(42.0)), "42.0");
    }

    #[test]
    fn test_rounding_half_to_even_on_exact_value() {
        assert_eq!(normalize_str("7.25"), "7.2");
        assert_eq!(normalize_str("7.35"), "7.3"); // 7.35 is stored as 7.34999…
        assert_eq!(normalize_str("7.26"), "7.3");
        assert_eq!(normalize_str("7.75"), "7.8");
    }

    #[test]
    fn test_separators_and_percent_are_stripped() {
        assert_eq!(normalize_str("1,234.5"), "1234.5");
        assert_eq!(normalize_str("85%"), "85.0");
        assert_eq!(normalize_str("12.34 %"), "12.3");
    }

    #[test]
    fn test_digit_group_underscores() {
        assert_eq!(normalize_str("1_000"), "1000.0");
        assert_eq!(normalize_str("1_234.5_6"), "1234.6");
        assert_eq!(normalize_str("_1"), "_1");
        assert_eq!(normalize_str("1__0"), "1__0");
        assert_eq!(normalize_str("1_"), "1_");
    }

    #[test]
    fn test_non_numeric_text_is_kept() {
        assert_eq!(normalize_str("A+"), "A+");
        assert_eq!(normalize_str("  Absent "), "Absent");
        assert_eq!(normalize_str("%"), "%");
        assert_eq!(normalize_str(","), ",");
    }

    #[test]
    fn test_non_finite_is_text() {
        assert_eq!(normalize_str("inf"), "inf");
        assert_eq!(normalize_str("NaN"), "NaN");
        assert_eq!(normalize(&CellValue::Number(f64::NAN)), "NaN");
    }

    #[test]
    fn test_blank_values() {
        assert_eq!(normalize(&CellValue::Empty), "");
        assert_eq!(normalize_str(""), "");
        assert_eq!(normalize_str("   "), "");
        assert_eq!(normalize(&CellValue::Text("\t".into())), "");
    }

    #[test]
    fn test_nfkc_applies_before_parsing() {
        // Fullwidth digits
        assert_eq!(normalize_str("８５"), "85.0");
        // Ligature is decomposed
        assert_eq!(normalize_str("ﬁne"), "fine");
    }

    #[test]
    fn test_other_cell_kinds() {
        assert_eq!(normalize(&CellValue::Boolean(true)), "True");
        assert_eq!(normalize(&CellValue::Error("#DIV/0!".into())), "#DIV/0!");
        assert_eq!(
            normalize(&CellValue::DateTime("2025-11-03 00:00:00".into())),
            "2025-11-03 00:00:00"
        );
    }

    #[test]
    fn test_idempotent_on_numeric_output() {
        for input in ["7", "7.25", "1,234.5", "-0.04", "99.99", "85%"] {
            let once = normalize_str(input);
            assert_eq!(normalize_str(&once), once, "input {input}");
        }
    }

    #[test]
    fn test_classification() {
        assert!(Normalized::from_text("3.5").is_numeric());
        assert_eq!(
            Normalized::from_text("Absent"),
            Normalized::Text("Absent".into())
        );
        assert_eq!(Normalized::from_text(" "), Normalized::Empty);
    }
}
