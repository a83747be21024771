//! Display normalization and sheet label parsing properties

use marksheet_viewer::core::{Normalized, SheetCatalog};
use marksheet_viewer::{normalize, normalize_str, parse_sheet_label, CellValue};

fn is_one_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    match digits.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && frac.len() == 1
                && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// NORMALIZATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_documented_examples() {
    assert_eq!(normalize_str("7"), "7.0");
    assert_eq!(normalize_str("7.25"), "7.2");
    assert_eq!(normalize_str("A+"), "A+");
    assert_eq!(normalize(&CellValue::Empty), "");
    assert_eq!(normalize_str("  "), "");
    assert_eq!(normalize_str("1,234.5"), "1234.5");
}

#[test]
fn test_total_over_mixed_inputs() {
    let inputs = vec![
        CellValue::Empty,
        CellValue::Number(0.0),
        CellValue::Number(-12.345),
        CellValue::Number(1e20),
        CellValue::Number(f64::INFINITY),
        CellValue::Text(String::new()),
        CellValue::Text("%".into()),
        CellValue::Text("--".into()),
        CellValue::Text("1e3".into()),
        CellValue::Text("Absent".into()),
        CellValue::Boolean(false),
        CellValue::Error("#N/A".into()),
        CellValue::DateTime("2025-11-03 10:00:00".into()),
    ];
    for input in &inputs {
        // Never panics, always yields a string
        let _ = normalize(input);
    }
    assert_eq!(normalize(&CellValue::Text("1e3".into())), "1000.0");
    assert_eq!(normalize(&CellValue::Number(f64::INFINITY)), "inf");
}

#[test]
fn test_numeric_output_has_one_fractional_digit() {
    for input in ["7", "-7", "0.05", "99.95", "1,000,000", "12%", "３.１４", "+4", ".5"] {
        let out = normalize_str(input);
        assert!(
            Normalized::from_text(input).is_numeric(),
            "{input} should be numeric"
        );
        assert!(is_one_decimal(&out), "{input} -> {out}");
    }
}

#[test]
fn test_idempotent_for_numeric_output() {
    for input in ["7", "7.25", "1,234.5", "85%", "-3.14159", "0.05"] {
        let once = normalize_str(input);
        assert_eq!(normalize_str(&once), once);
    }
}

#[test]
fn test_text_is_returned_verbatim_after_trim() {
    assert_eq!(normalize_str("  Absent\t"), "Absent");
    assert_eq!(normalize_str("%"), "%");
    assert_eq!(normalize_str("B+ (re-exam)"), "B+ (re-exam)");
}

// ═══════════════════════════════════════════════════════════════════════════
// SHEET LABELS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_sheet_label_examples() {
    let id = parse_sheet_label("MGKVP 1");
    assert_eq!((id.group.as_str(), id.subgroup.as_str(), id.original.as_str()), ("MGKVP", "1", "MGKVP 1"));

    let id = parse_sheet_label("ABC");
    assert_eq!((id.group.as_str(), id.subgroup.as_str(), id.original.as_str()), ("ABC", "", "ABC"));

    let id = parse_sheet_label("X Y 2");
    assert_eq!((id.group.as_str(), id.subgroup.as_str(), id.original.as_str()), ("X Y", "2", "X Y 2"));
}

#[test]
fn test_catalog_duplicate_labels_first_wins() {
    let catalog = SheetCatalog::from_labels(["MGKVP 1", "MGKVP   1", "MGKVP 2"]);
    assert_eq!(catalog.subgroups("MGKVP"), vec!["1", "2"]);
    assert_eq!(catalog.resolve("MGKVP", "1").unwrap().original, "MGKVP 1");
    assert_eq!(catalog.duplicates(), vec![("MGKVP", "1")]);
}
