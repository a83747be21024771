//! Value normalization, sheet label parsing and selection

pub mod normalizer;
pub mod selection;
pub mod sheet_identifier;

pub use normalizer::{normalize, normalize_str, Normalized};
pub use selection::{SheetCatalog, StudentRoster};
pub use sheet_identifier::parse_sheet_label;
