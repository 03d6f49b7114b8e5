//! Structural validation of JSON values against schema nodes.

use serde_json::Value;

use crate::error::ValidationError;
use crate::schema::{EnumValue, Schema, SchemaKind};

/// Options for validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    /// When true, array and dict failures report each offending element
    /// (`item [2]: ...`, `key [x]: ...`) instead of the schema-level
    /// summary. Off by default to keep the compact message format.
    pub detailed_collections: bool,
}

impl ValidateOptions {
    /// Create options with detailed collection messages disabled (default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether array/dict failures report per-element detail.
    pub fn detailed_collections(mut self, detailed: bool) -> Self {
        self.detailed_collections = detailed;
        self
    }
}

/// Validate a value against a schema with default options.
///
/// `None` is the "no value provided" sentinel and only validates against an
/// optional schema. A JSON `null` is a present value and fails the kind
/// checks like any other mismatch - `nullable` does not affect validation.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first failing branch; all
/// failing properties of a single object are aggregated into one
/// description.
pub fn validate(schema: &Schema, value: Option<&Value>) -> Result<(), ValidationError> {
    validate_with(schema, value, &ValidateOptions::default())
}

/// Validate a value against a schema with explicit options.
pub fn validate_with(
    schema: &Schema,
    value: Option<&Value>,
    options: &ValidateOptions,
) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return if schema.options().optional {
            Ok(())
        } else {
            Err(ValidationError::new("should be provided"))
        };
    };

    match schema.kind() {
        SchemaKind::Number => check_kind(value.is_number(), schema),
        SchemaKind::String => check_kind(value.is_string(), schema),
        SchemaKind::Boolean => check_kind(value.is_boolean(), schema),

        SchemaKind::Enum(values) => {
            if values.iter().any(|literal| matches_literal(literal, value)) {
                Ok(())
            } else {
                Err(ValidationError::new(format!(
                    "should be one of {}",
                    schema.definition()
                )))
            }
        }

        SchemaKind::Array(item) => {
            let Some(elements) = value.as_array() else {
                return Err(ValidationError::new("should be array"));
            };
            let failures: Vec<(usize, ValidationError)> = elements
                .iter()
                .enumerate()
                .filter_map(|(index, element)| {
                    validate_with(item, Some(element), options)
                        .err()
                        .map(|err| (index, err))
                })
                .collect();
            if failures.is_empty() {
                Ok(())
            } else if options.detailed_collections {
                Err(ValidationError::new(
                    failures
                        .iter()
                        .map(|(index, err)| format!("item [{index}]: {}", err.description))
                        .collect::<Vec<_>>()
                        .join(", "),
                ))
            } else {
                Err(ValidationError::new(format!(
                    "should be {}",
                    schema.definition()
                )))
            }
        }

        SchemaKind::Union(items) => {
            if items
                .iter()
                .any(|item| validate_with(item, Some(value), options).is_ok())
            {
                Ok(())
            } else {
                Err(ValidationError::new(format!(
                    "should be {}",
                    schema.definition()
                )))
            }
        }

        SchemaKind::Object(properties) => {
            let Some(map) = value.as_object() else {
                return Err(ValidationError::new("should be object"));
            };
            // Unknown extra keys on the value are ignored; the schema is not closed.
            let failures: Vec<(&str, ValidationError)> = properties
                .iter()
                .filter_map(|(name, property)| {
                    validate_with(property, map.get(name), options)
                        .err()
                        .map(|err| (name.as_str(), err))
                })
                .collect();
            if failures.is_empty() {
                Ok(())
            } else {
                Err(ValidationError::new(
                    failures
                        .iter()
                        .map(|(name, err)| format!("property [{name}]: {}", err.description))
                        .collect::<Vec<_>>()
                        .join(", "),
                ))
            }
        }

        SchemaKind::Dict(value_schema) => {
            let Some(map) = value.as_object() else {
                return Err(ValidationError::new("should be object"));
            };
            let failures: Vec<(&str, ValidationError)> = map
                .iter()
                .filter_map(|(key, entry)| {
                    validate_with(value_schema, Some(entry), options)
                        .err()
                        .map(|err| (key.as_str(), err))
                })
                .collect();
            if failures.is_empty() {
                Ok(())
            } else if options.detailed_collections {
                Err(ValidationError::new(
                    failures
                        .iter()
                        .map(|(key, err)| format!("key [{key}]: {}", err.description))
                        .collect::<Vec<_>>()
                        .join(", "),
                ))
            } else {
                Err(ValidationError::new(format!(
                    "should be {}",
                    schema.definition()
                )))
            }
        }
    }
}

fn check_kind(matches: bool, schema: &Schema) -> Result<(), ValidationError> {
    if matches {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "should be {}",
            schema.definition()
        )))
    }
}

fn matches_literal(literal: &EnumValue, value: &Value) -> bool {
    match (literal, value) {
        (EnumValue::Str(s), Value::String(v)) => s == v,
        // Numeric equality rather than representation equality: 1 matches 1.0.
        (EnumValue::Num(n), Value::Number(v)) => n.as_f64() == v.as_f64(),
        _ => false,
    }
}
