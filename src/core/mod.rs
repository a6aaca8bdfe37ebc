//! Core module containing the error type, extractors, validation and the
//! storage trait

pub mod error;
pub mod extractors;
pub mod service;
pub mod validation;

pub use error::{ApiError, FieldValidationError, ResultExt, ValidationError};
pub use extractors::JsonBody;
pub use service::WellnessStorage;
pub use validation::{InsertSchema, Validated};
