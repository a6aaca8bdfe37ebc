//! Validation system
//!
//! Every writable entity declares an insert [`Schema`]: the exact set of
//! client-supplied fields with their primitive type and optionality. Payloads
//! are checked against it before they reach storage.

pub mod extractor;
pub mod schema;
pub mod validators;

pub use extractor::Validated;
pub use schema::{FieldRule, FieldType, InsertSchema, Schema};
