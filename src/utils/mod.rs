//! Utility modules for listing pages
//!
//! Shared helpers used by the sort step:
//! - Field paths: dotted path resolution against a record's JSON form
//! - Collation: locale-style string ordering

pub mod collation;
pub mod field_path;

// Re-export commonly used types
pub use collation::locale_compare;
pub use field_path::{FieldPath, SortKey};
