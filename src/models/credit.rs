//! Diesel models for storing credit applications.

use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::credit::{
    Credit as DomainCredit, CreditStatus, NewCredit as DomainNewCredit,
};
use crate::domain::types::{
    CreditCode, CreditId, CustomerId, InstallmentCount, Money, TypeConstraintError,
};
use crate::models::customer::Customer;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(table_name = crate::schema::credits)]
pub struct Credit {
    pub id: i32,
    pub credit_code: String,
    pub credit_value: String, // decimal text, sqlite has no numeric type
    pub first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub status: String,
    pub customer_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::credits)]
pub struct NewCredit {
    pub credit_code: String,
    pub credit_value: String,
    pub first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub status: String,
    pub customer_id: i32,
}

impl TryFrom<Credit> for DomainCredit {
    type Error = TypeConstraintError;

    fn try_from(credit: Credit) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CreditId::new(credit.id)?,
            credit_code: CreditCode::from_str(&credit.credit_code)?,
            credit_value: Money::from_str(&credit.credit_value)?,
            first_installment: credit.first_installment,
            number_of_installments: InstallmentCount::new(credit.number_of_installments)?,
            status: CreditStatus::from_str(&credit.status)?,
            customer_id: CustomerId::new(credit.customer_id)?,
        })
    }
}

impl<'a> From<&'a DomainNewCredit> for NewCredit {
    fn from(credit: &'a DomainNewCredit) -> Self {
        Self {
            credit_code: credit.credit_code.to_string(),
            credit_value: credit.credit_value.to_string(),
            first_installment: credit.first_installment,
            number_of_installments: credit.number_of_installments.get(),
            status: credit.status.to_string(),
            customer_id: credit.customer_id.get(),
        }
    }
}
