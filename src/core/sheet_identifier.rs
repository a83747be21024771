//! Sheet label parsing
//!
//! Sheet names follow the convention `"<university> <semester>"`, e.g.
//! `"MGKVP 1"`. The trailing token is only treated as a semester when it is
//! made of decimal digits.

use crate::types::SheetIdentifier;

/// Split a sheet label at its last run of whitespace
pub fn parse_sheet_label(label: &str) -> SheetIdentifier {
    let body = label.trim_end();

    if let Some(split_at) = body.rfind(char::is_whitespace) {
        let (head, tail) = body.split_at(split_at);
        let subgroup = tail.trim_start();
        let group = head.trim();

        if !group.is_empty() && is_decimal(subgroup) {
            return SheetIdentifier {
                group: group.to_string(),
                subgroup: subgroup.to_string(),
                original: label.to_string(),
            };
        }
    }

    SheetIdentifier {
        group: label.to_string(),
        subgroup: String::new(),
        original: label.to_string(),
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
