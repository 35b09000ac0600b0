use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::customer::Customer;

/// Public representation of a customer with its address flattened.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub tax_id: String,
    pub email: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.get(),
            first_name: customer.first_name.into_inner(),
            last_name: customer.last_name.into_inner(),
            tax_id: customer.tax_id.into_inner(),
            email: customer.email.into_inner(),
            income: customer.income.get(),
            zip_code: customer.address.zip_code.into_inner(),
            street: customer.address.street.into_inner(),
        }
    }
}
