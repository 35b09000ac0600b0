use std::borrow::Cow;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::credit::NewCredit;
use crate::domain::types::{CustomerId, InstallmentCount, Money};
use crate::forms::{FormError, required_field, validate_positive_amount};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Credit application submitted by a customer.
pub struct CreditForm {
    /// Requested amount.
    #[validate(
        required(message = "credit value is required"),
        custom(function = "validate_positive_amount")
    )]
    pub credit_value: Option<Decimal>,
    /// Due date of the first installment.
    #[validate(
        required(message = "first installment date is required"),
        custom(function = "validate_future_date")
    )]
    pub first_installment: Option<NaiveDate>,
    /// Number of monthly installments.
    #[validate(
        required(message = "number of installments is required"),
        range(min = 1, max = 48, message = "number of installments must be between 1 and 48")
    )]
    pub number_of_installments: Option<i32>,
    /// Surrogate id of the applying customer.
    #[validate(
        required(message = "customer id is required"),
        range(min = 1, message = "customer id must be positive")
    )]
    pub customer_id: Option<i32>,
}

/// Whether `date` falls strictly after `today`.
pub fn is_strictly_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

fn validate_future_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if is_strictly_future(*date, Utc::now().date_naive()) {
        Ok(())
    } else {
        Err(ValidationError::new("future")
            .with_message(Cow::Borrowed("first installment must be a future date")))
    }
}

impl CreditForm {
    /// Validates the form and converts it into a pending [`NewCredit`].
    pub fn into_new_credit(self) -> Result<NewCredit, FormError> {
        self.validate()?;

        let credit_value = required_field(self.credit_value, "creditValue", Money::new)?;
        let first_installment = required_field(self.first_installment, "firstInstallment", Ok)?;
        let number_of_installments = required_field(
            self.number_of_installments,
            "numberOfInstallments",
            InstallmentCount::new,
        )?;
        let customer_id = required_field(self.customer_id, "customerId", CustomerId::new)?;

        Ok(NewCredit::new(
            credit_value,
            first_installment,
            number_of_installments,
            customer_id,
        ))
    }
}
