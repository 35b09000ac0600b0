use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::credit::{CreditSummary, CreditView};
use crate::forms::credit::CreditForm;
use crate::repository::DieselRepository;
use crate::routes::{CustomerIdQuery, form_error_response, service_error_response};
use crate::services::credit as credit_service;

#[post("/credits")]
pub async fn save_credit(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreditForm>,
) -> impl Responder {
    let new_credit = match form.into_new_credit() {
        Ok(new_credit) => new_credit,
        Err(err) => return form_error_response(err),
    };

    match credit_service::save_credit(repo.get_ref(), &new_credit) {
        Ok(credit) => HttpResponse::Created().json(CreditView::from(credit)),
        Err(err) => service_error_response(err),
    }
}

#[get("/credits")]
pub async fn find_all_credits(
    params: web::Query<CustomerIdQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match credit_service::find_all_credits_by_customer(repo.get_ref(), params.customer_id) {
        Ok(credits) => HttpResponse::Ok().json(
            credits
                .into_iter()
                .map(CreditSummary::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => service_error_response(err),
    }
}

#[get("/credits/{credit_code}")]
pub async fn find_credit_by_code(
    credit_code: web::Path<String>,
    params: web::Query<CustomerIdQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match credit_service::find_credit_by_code(repo.get_ref(), params.customer_id, &credit_code) {
        Ok(credit) => HttpResponse::Ok().json(CreditView::from(credit)),
        Err(err) => service_error_response(err),
    }
}
