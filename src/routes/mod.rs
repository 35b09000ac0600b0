//! Actix-web handlers for the customer and credit endpoints.

use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, error, web};
use serde::Deserialize;

use crate::dto::error::{ExceptionDetails, ExceptionKind};
use crate::forms::FormError;
use crate::services::ServiceError;

pub mod credit;
pub mod customer;

/// `?customerId=` query parameter shared by several endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIdQuery {
    pub customer_id: i32,
}

/// Registers extractor error handlers and every endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(customer::save_customer)
        .service(customer::update_customer)
        .service(customer::find_customer)
        .service(customer::delete_customer)
        .service(credit::save_credit)
        .service(credit::find_all_credits)
        .service(credit::find_credit_by_code);
}

fn error_response(kind: ExceptionKind, details: BTreeMap<String, String>) -> HttpResponse {
    HttpResponse::build(kind.status()).json(ExceptionDetails::new(kind, details))
}

/// Maps a service failure to its status code and exception body.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    let (kind, message) = match err {
        ServiceError::NotFound(message) => (ExceptionKind::NotFound, message),
        ServiceError::BusinessRule(message) => (ExceptionKind::Business, message),
        ServiceError::TypeConstraint(message) => (ExceptionKind::TypeConstraint, message),
        ServiceError::Conflict(message) => (ExceptionKind::Conflict, message),
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            (ExceptionKind::Internal, "Internal server error".to_string())
        }
    };
    HttpResponse::build(kind.status()).json(ExceptionDetails::with_message(kind, message))
}

/// Maps a rejected request body to a 400 with per-field details.
pub fn form_error_response(err: FormError) -> HttpResponse {
    let kind = match err {
        FormError::Field { .. } => ExceptionKind::TypeConstraint,
        FormError::Validation(_) | FormError::MissingField(_) => ExceptionKind::Validation,
    };
    error_response(kind, err.details())
}

fn extractor_error(source: &str, cause: String, err: impl Into<error::Error>) -> error::Error {
    let response = error_response(
        ExceptionKind::Validation,
        BTreeMap::from([(source.to_string(), cause)]),
    );
    error::InternalError::from_response(err.into(), response).into()
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    log::debug!("Rejected JSON body: {err}");
    let cause = err.to_string();
    extractor_error("body", cause, err)
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let cause = err.to_string();
    extractor_error("query", cause, err)
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> error::Error {
    let cause = err.to_string();
    extractor_error("path", cause, err)
}
