use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{Address, NewCustomer, UpdateCustomer};
use crate::domain::types::{
    CustomerEmail, FirstName, LastName, Money, Password, Street, TaxId, ZipCode,
};
use crate::forms::{FormError, required_field, validate_non_negative_amount, validate_not_blank};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Registration payload for a new customer.
pub struct CustomerForm {
    #[validate(
        required(message = "first name is required"),
        custom(function = "validate_not_blank")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "last name is required"),
        custom(function = "validate_not_blank")
    )]
    pub last_name: Option<String>,
    /// Brazilian individual taxpayer number (CPF), digits only or punctuated.
    #[validate(
        required(message = "tax id is required"),
        custom(function = "validate_tax_id")
    )]
    pub tax_id: Option<String>,
    #[validate(
        required(message = "email is required"),
        email(message = "invalid email address")
    )]
    pub email: Option<String>,
    /// Declared monthly income.
    #[validate(
        required(message = "income is required"),
        custom(function = "validate_non_negative_amount")
    )]
    pub income: Option<Decimal>,
    #[validate(
        required(message = "password is required"),
        custom(function = "validate_not_blank")
    )]
    pub password: Option<String>,
    #[validate(
        required(message = "zip code is required"),
        custom(function = "validate_not_blank")
    )]
    pub zip_code: Option<String>,
    #[validate(
        required(message = "street is required"),
        custom(function = "validate_not_blank")
    )]
    pub street: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Profile changes accepted for an existing customer.
pub struct CustomerUpdateForm {
    #[validate(
        required(message = "first name is required"),
        custom(function = "validate_not_blank")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "last name is required"),
        custom(function = "validate_not_blank")
    )]
    pub last_name: Option<String>,
    #[validate(
        required(message = "income is required"),
        custom(function = "validate_non_negative_amount")
    )]
    pub income: Option<Decimal>,
    #[validate(
        required(message = "zip code is required"),
        custom(function = "validate_not_blank")
    )]
    pub zip_code: Option<String>,
    #[validate(
        required(message = "street is required"),
        custom(function = "validate_not_blank")
    )]
    pub street: Option<String>,
}

fn validate_tax_id(value: &str) -> Result<(), validator::ValidationError> {
    TaxId::new(value).map(|_| ()).map_err(|_| {
        validator::ValidationError::new("tax_id")
            .with_message(std::borrow::Cow::Borrowed("invalid tax id"))
    })
}

impl CustomerForm {
    /// Validates the payload and converts it into a [`NewCustomer`].
    pub fn into_new_customer(self) -> Result<NewCustomer, FormError> {
        self.validate()?;

        Ok(NewCustomer {
            first_name: required_field(self.first_name, "firstName", FirstName::new)?,
            last_name: required_field(self.last_name, "lastName", LastName::new)?,
            tax_id: required_field(self.tax_id, "taxId", TaxId::new)?,
            email: required_field(self.email, "email", CustomerEmail::new)?,
            income: required_field(self.income, "income", Money::new)?,
            password: required_field(self.password, "password", Password::new)?,
            address: Address {
                zip_code: required_field(self.zip_code, "zipCode", ZipCode::new)?,
                street: required_field(self.street, "street", Street::new)?,
            },
        })
    }
}

impl CustomerUpdateForm {
    /// Validates the payload and converts it into an [`UpdateCustomer`].
    pub fn into_update_customer(self) -> Result<UpdateCustomer, FormError> {
        self.validate()?;

        Ok(UpdateCustomer {
            first_name: required_field(self.first_name, "firstName", FirstName::new)?,
            last_name: required_field(self.last_name, "lastName", LastName::new)?,
            income: required_field(self.income, "income", Money::new)?,
            address: Address {
                zip_code: required_field(self.zip_code, "zipCode", ZipCode::new)?,
                street: required_field(self.street, "street", Street::new)?,
            },
        })
    }
}
