//! Services for credit applications and their ownership-checked lookup.

use chrono::{NaiveDate, Utc};

use crate::domain::credit::{Credit, FIRST_INSTALLMENT_WINDOW_MONTHS, NewCredit};
use crate::domain::types::{CreditCode, CustomerId};
use crate::repository::{CreditReader, CreditWriter};
use crate::services::{ServiceError, ServiceResult};

/// Persists a credit application dated against today's date.
pub fn save_credit<R>(repo: &R, new_credit: &NewCredit) -> ServiceResult<Credit>
where
    R: CreditWriter + ?Sized,
{
    save_credit_on(repo, new_credit, Utc::now().date_naive())
}

/// Persists a credit application, rejecting a first installment outside the
/// window that starts after `today`.
pub fn save_credit_on<R>(repo: &R, new_credit: &NewCredit, today: NaiveDate) -> ServiceResult<Credit>
where
    R: CreditWriter + ?Sized,
{
    if !new_credit.first_installment_within_window(today) {
        log::warn!(
            "Rejected credit for customer {}: first installment {} outside window",
            new_credit.customer_id,
            new_credit.first_installment
        );
        return Err(ServiceError::BusinessRule(format!(
            "Invalid date: the first installment must be within {FIRST_INSTALLMENT_WINDOW_MONTHS} months"
        )));
    }

    let credit = repo.create_credit(new_credit)?;

    log::info!(
        "Credit {} saved for customer {}",
        credit.credit_code,
        credit.customer_id
    );
    Ok(credit)
}

/// Lists the credits owned by the customer, empty when there are none.
pub fn find_all_credits_by_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Vec<Credit>>
where
    R: CreditReader + ?Sized,
{
    let customer_id = CustomerId::new(customer_id)?;

    repo.list_credits_by_customer(customer_id)
        .map_err(ServiceError::from)
}

/// Resolves a credit by its public code, checking it belongs to the customer.
///
/// An unknown code is [`ServiceError::NotFound`]; a code owned by somebody else
/// is [`ServiceError::BusinessRule`].
pub fn find_credit_by_code<R>(repo: &R, customer_id: i32, credit_code: &str) -> ServiceResult<Credit>
where
    R: CreditReader + ?Sized,
{
    let customer_id = CustomerId::new(customer_id)?;
    let credit_code: CreditCode = credit_code.parse()?;

    let credit = repo
        .get_credit_by_code(&credit_code)?
        .ok_or_else(|| ServiceError::NotFound(format!("Credit code {credit_code} not found")))?;

    if !credit.belongs_to(customer_id) {
        log::warn!("Credit {credit_code} requested by customer {customer_id} who does not own it");
        return Err(ServiceError::BusinessRule(
            "This credit does not belong to this customer".to_string(),
        ));
    }

    Ok(credit)
}
