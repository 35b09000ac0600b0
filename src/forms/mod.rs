//! Request bodies accepted by the JSON API, validated before they reach a service.

use std::borrow::Cow;
use std::collections::BTreeMap;

use heck::ToLowerCamelCase;
use rust_decimal::Decimal;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::TypeConstraintError;

pub mod credit;
pub mod customer;

#[derive(Debug, Error)]
/// Errors that can occur when processing request data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A value accepted by the declarative rules but refused by its domain type.
    #[error("invalid {field}: {source}")]
    Field {
        field: &'static str,
        source: TypeConstraintError,
    },
}

impl FormError {
    /// Field-level messages keyed by the camelCase field name of the request body.
    pub fn details(&self) -> BTreeMap<String, String> {
        match self {
            FormError::Validation(errors) => errors
                .field_errors()
                .into_iter()
                .map(|(field, errors)| {
                    let messages = errors
                        .iter()
                        .map(|error| match &error.message {
                            Some(message) => message.to_string(),
                            None => error.code.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join("; ");
                    (field.to_lower_camel_case(), messages)
                })
                .collect(),
            FormError::MissingField(field) => {
                BTreeMap::from([(field.to_string(), "is required".to_string())])
            }
            FormError::Field { field, source } => {
                BTreeMap::from([(field.to_string(), source.to_string())])
            }
        }
    }
}

/// Unwraps a field `validator` has already checked with `required` and builds
/// its domain value, keeping the field name on failure.
fn required_field<V, T>(
    value: Option<V>,
    field: &'static str,
    build: impl FnOnce(V) -> Result<T, TypeConstraintError>,
) -> Result<T, FormError> {
    let value = value.ok_or(FormError::MissingField(field))?;
    build(value).map_err(|source| FormError::Field { field, source })
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

fn validate_non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative")
            .with_message(Cow::Borrowed("must not be negative")));
    }
    Ok(())
}

fn validate_positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("not_positive")
            .with_message(Cow::Borrowed("must be greater than zero")));
    }
    Ok(())
}
