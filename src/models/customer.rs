use std::str::FromStr;

use diesel::prelude::*;

use crate::domain::customer::{
    Address, Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::domain::types::{Money, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub tax_id: String,
    pub email: String,
    pub income: String,
    pub password: String,
    pub zip_code: String,
    pub street: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub tax_id: &'a str,
    pub email: &'a str,
    pub income: String,
    pub password: &'a str,
    pub zip_code: &'a str,
    pub street: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Data used when updating a [`Customer`] record.
pub struct UpdateCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub income: String,
    pub zip_code: &'a str,
    pub street: &'a str,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        let income = Money::from_str(&customer.income)?;
        let address = Address::try_new(customer.zip_code, customer.street)?;

        DomainCustomer::try_new(
            customer.id,
            customer.first_name,
            customer.last_name,
            customer.tax_id,
            customer.email,
            income.get(),
            customer.password,
            address,
        )
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            tax_id: customer.tax_id.as_str(),
            email: customer.email.as_str(),
            income: customer.income.to_string(),
            password: customer.password.as_str(),
            zip_code: customer.address.zip_code.as_str(),
            street: customer.address.street.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainUpdateCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            income: customer.income.to_string(),
            zip_code: customer.address.zip_code.as_str(),
            street: customer.address.street.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CustomerEmail, FirstName, LastName, Password, TaxId,
    };

    fn sample_domain_new() -> DomainNewCustomer {
        DomainNewCustomer {
            first_name: FirstName::new("Ana").unwrap(),
            last_name: LastName::new("Souza").unwrap(),
            tax_id: TaxId::new("529.982.247-25").unwrap(),
            email: CustomerEmail::new("ana@example.com").unwrap(),
            income: "3500.75".parse().unwrap(),
            password: Password::new("s3cret").unwrap(),
            address: Address::try_new("01001-000", "Praca da Se").unwrap(),
        }
    }

    fn sample_db_customer() -> Customer {
        Customer {
            id: 3,
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            tax_id: "52998224725".to_string(),
            email: "ana@example.com".to_string(),
            income: "3500.75".to_string(),
            password: "s3cret".to_string(),
            zip_code: "01001-000".to_string(),
            street: "Praca da Se".to_string(),
        }
    }

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = sample_domain_new();
        let new: NewCustomer = (&domain).into();
        assert_eq!(new.first_name, "Ana");
        assert_eq!(new.tax_id, "52998224725");
        assert_eq!(new.income, "3500.75");
        assert_eq!(new.password, "s3cret");
        assert_eq!(new.zip_code, "01001-000");
        assert_eq!(new.street, "Praca da Se");
    }

    #[test]
    fn from_domain_update_creates_changeset() {
        let domain = DomainUpdateCustomer {
            first_name: FirstName::new("Bia").unwrap(),
            last_name: LastName::new("Lima").unwrap(),
            income: "10".parse().unwrap(),
            address: Address::try_new("20000-000", "Rua Nova").unwrap(),
        };
        let update: UpdateCustomer = (&domain).into();
        assert_eq!(update.first_name, "Bia");
        assert_eq!(update.last_name, "Lima");
        assert_eq!(update.income, "10");
        assert_eq!(update.street, "Rua Nova");
    }

    #[test]
    fn customer_into_domain() {
        let domain = DomainCustomer::try_from(sample_db_customer()).unwrap();
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.email.as_str(), "ana@example.com");
        assert_eq!(domain.income.to_string(), "3500.75");
        assert_eq!(domain.address.zip_code.as_str(), "01001-000");
        assert_eq!(domain.password.as_str(), "s3cret");
    }

    #[test]
    fn corrupted_row_is_rejected() {
        let mut db = sample_db_customer();
        db.income = "lots".to_string();
        assert!(DomainCustomer::try_from(db).is_err());
    }
}
