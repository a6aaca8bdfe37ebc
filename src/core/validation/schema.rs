//! Insert schemas
//!
//! A [`Schema`] is the whitelist of client-supplied fields for one entity:
//! each field's primitive type and whether it is required. Validation checks
//! every field, collects every failure, and keeps only whitelisted fields.

use super::validators::{self, Validator};
use crate::core::error::{FieldValidationError, ValidationError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Primitive column types a schema field can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Text,
    Boolean,
    Timestamp,
}

impl FieldType {
    fn validator(self) -> Validator {
        match self {
            FieldType::Integer => validators::integer,
            FieldType::Text => validators::text,
            FieldType::Boolean => validators::boolean,
            FieldType::Timestamp => validators::timestamp,
        }
    }
}

/// One whitelisted field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
        }
    }
}

/// Whitelist of client-supplied fields for one entity
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldRule],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    /// Validate a raw payload and strip it down to the whitelisted fields
    ///
    /// Optional fields may be absent or `null`; `null` optionals are dropped
    /// from the output. Unknown fields are dropped without error.
    pub fn validate_and_filter(
        &self,
        payload: Value,
    ) -> Result<Map<String, Value>, Vec<FieldValidationError>> {
        let Value::Object(mut input) = payload else {
            return Err(vec![FieldValidationError::new(
                "",
                format!(
                    "Expected object, received {}",
                    validators::received(&payload)
                ),
            )]);
        };

        let mut output = Map::new();
        let mut errors = Vec::new();

        for rule in self.fields {
            match input.remove(rule.name) {
                None | Some(Value::Null) if rule.required => {
                    errors.push(FieldValidationError::new(rule.name, "Required"));
                }
                None | Some(Value::Null) => {}
                Some(value) => match (rule.field_type.validator())(rule.name, &value) {
                    Ok(()) => {
                        output.insert(rule.name.to_string(), value);
                    }
                    Err(message) => errors.push(FieldValidationError::new(rule.name, message)),
                },
            }
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(errors)
        }
    }

    /// Validate and convert into the typed insert record
    pub fn parse<T: DeserializeOwned>(&self, payload: Value) -> Result<T, ValidationError> {
        let filtered = self
            .validate_and_filter(payload)
            .map_err(ValidationError::FieldErrors)?;

        serde_json::from_value(Value::Object(filtered)).map_err(|e| ValidationError::InvalidJson {
            message: e.to_string(),
        })
    }
}

/// Implemented by every typed insert record
///
/// The record's serde shape must match its schema: camelCase field names,
/// `Option` for every optional field.
pub trait InsertSchema: DeserializeOwned + Sized {
    const SCHEMA: Schema;

    fn validate(payload: Value) -> Result<Self, ValidationError> {
        Self::SCHEMA.parse(payload)
    }
}
