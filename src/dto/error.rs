//! JSON body rendered for every failed request.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Failure category, rendered as the `exception` marker of the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionKind {
    Validation,
    TypeConstraint,
    Business,
    NotFound,
    Conflict,
    Internal,
}

impl ExceptionKind {
    pub fn status(self) -> StatusCode {
        match self {
            ExceptionKind::Validation
            | ExceptionKind::TypeConstraint
            | ExceptionKind::Business => StatusCode::BAD_REQUEST,
            ExceptionKind::NotFound => StatusCode::NOT_FOUND,
            ExceptionKind::Conflict => StatusCode::CONFLICT,
            ExceptionKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            ExceptionKind::Validation => "ValidationException",
            ExceptionKind::TypeConstraint => "TypeConstraintException",
            ExceptionKind::Business => "BusinessException",
            ExceptionKind::NotFound => "NotFoundException",
            ExceptionKind::Conflict => "ConflictException",
            ExceptionKind::Internal => "InternalException",
        }
    }

    fn title(self) -> &'static str {
        match self {
            ExceptionKind::Validation | ExceptionKind::TypeConstraint => {
                "Bad Request! Consult the documentation"
            }
            ExceptionKind::Business => "Bad Request! Business rule violated",
            ExceptionKind::NotFound => "Not Found",
            ExceptionKind::Conflict => "Conflict! Consult the documentation",
            ExceptionKind::Internal => "Internal Server Error",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionDetails {
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub exception: String,
    /// Field name (or `message`) to human readable cause.
    pub details: BTreeMap<String, String>,
}

impl ExceptionDetails {
    pub fn new(kind: ExceptionKind, details: BTreeMap<String, String>) -> Self {
        Self {
            title: kind.title().to_string(),
            timestamp: Utc::now(),
            status: kind.status().as_u16(),
            exception: kind.marker().to_string(),
            details,
        }
    }

    /// Body carrying a single free-form cause.
    pub fn with_message(kind: ExceptionKind, message: impl Into<String>) -> Self {
        Self::new(kind, BTreeMap::from([("message".to_string(), message.into())]))
    }
}
