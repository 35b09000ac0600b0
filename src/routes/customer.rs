use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::dto::customer::CustomerView;
use crate::forms::customer::{CustomerForm, CustomerUpdateForm};
use crate::repository::DieselRepository;
use crate::routes::{CustomerIdQuery, form_error_response, service_error_response};
use crate::services::customer as customer_service;

#[post("/customers")]
pub async fn save_customer(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CustomerForm>,
) -> impl Responder {
    let new_customer = match form.into_new_customer() {
        Ok(new_customer) => new_customer,
        Err(err) => return form_error_response(err),
    };

    match customer_service::save_customer(repo.get_ref(), &new_customer) {
        Ok(customer) => HttpResponse::Created().json(CustomerView::from(customer)),
        Err(err) => service_error_response(err),
    }
}

#[get("/customers/{customer_id}")]
pub async fn find_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::find_customer_by_id(repo.get_ref(), customer_id.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(CustomerView::from(customer)),
        Err(err) => service_error_response(err),
    }
}

#[delete("/customers/{customer_id}")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::delete_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}

#[patch("/customers")]
pub async fn update_customer(
    params: web::Query<CustomerIdQuery>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CustomerUpdateForm>,
) -> impl Responder {
    let updates = match form.into_update_customer() {
        Ok(updates) => updates,
        Err(err) => return form_error_response(err),
    };

    match customer_service::update_customer(repo.get_ref(), params.customer_id, &updates) {
        Ok(customer) => HttpResponse::Ok().json(CustomerView::from(customer)),
        Err(err) => service_error_response(err),
    }
}
