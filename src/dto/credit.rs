use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::credit::{Credit, CreditStatus};

/// Full representation of a single credit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditView {
    pub credit_code: String,
    pub credit_value: Decimal,
    pub first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub status: CreditStatus,
    pub customer_id: i32,
}

/// Row of the per-customer credit listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummary {
    pub credit_code: String,
    pub credit_value: Decimal,
    pub number_of_installments: i32,
}

impl From<Credit> for CreditView {
    fn from(credit: Credit) -> Self {
        Self {
            credit_code: credit.credit_code.to_string(),
            credit_value: credit.credit_value.get(),
            first_installment: credit.first_installment,
            number_of_installments: credit.number_of_installments.get(),
            status: credit.status,
            customer_id: credit.customer_id.get(),
        }
    }
}

impl From<Credit> for CreditSummary {
    fn from(credit: Credit) -> Self {
        Self {
            credit_code: credit.credit_code.to_string(),
            credit_value: credit.credit_value.get(),
            number_of_installments: credit.number_of_installments.get(),
        }
    }
}
