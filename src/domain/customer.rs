use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::types::{
    CustomerEmail, CustomerId, FirstName, LastName, Money, Password, Street, TaxId,
    TypeConstraintError, ZipCode,
};

/// Postal address embedded in a customer record.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Address {
    pub zip_code: ZipCode,
    pub street: Street,
}

impl Address {
    pub fn try_new(
        zip_code: impl Into<String>,
        street: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            zip_code: ZipCode::new(zip_code)?,
            street: Street::new(street)?,
        })
    }
}

/// A stored customer. The password never leaves the service in serialized form.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub tax_id: TaxId,
    pub email: CustomerEmail,
    pub income: Money,
    #[serde(skip)]
    pub password: Password,
    pub address: Address,
}

impl Customer {
    /// Builds a customer from raw storage values, validating each field.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        id: i32,
        first_name: String,
        last_name: String,
        tax_id: String,
        email: String,
        income: Decimal,
        password: String,
        address: Address,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: CustomerId::new(id)?,
            first_name: FirstName::new(first_name)?,
            last_name: LastName::new(last_name)?,
            tax_id: TaxId::new(tax_id)?,
            email: CustomerEmail::new(email)?,
            income: Money::new(income)?,
            password: Password::new(password)?,
            address,
        })
    }
}

/// Data required to register a customer.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCustomer {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub tax_id: TaxId,
    pub email: CustomerEmail,
    pub income: Money,
    pub password: Password,
    pub address: Address,
}

/// Profile fields a customer may change after registration.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateCustomer {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub income: Money,
    pub address: Address,
}
