//! Services orchestrating customer registration, lookup, update and removal.

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::repository::{CreditWriter, CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Persists a newly registered customer. Uniqueness of tax id and email is left
/// to the store and surfaces as [`ServiceError::Conflict`].
pub fn save_customer<R>(repo: &R, new_customer: &NewCustomer) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let customer = repo.create_customer(new_customer).map_err(|err| {
        log::error!("Failed to save customer: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Customer {} registered", customer.id);
    Ok(customer)
}

/// Fetches a customer by its identifier.
pub fn find_customer_by_id<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    let id = CustomerId::new(customer_id)?;

    repo.get_customer_by_id(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Id {customer_id} not found")))
}

/// Applies profile changes to an existing customer.
pub fn update_customer<R>(
    repo: &R,
    customer_id: i32,
    updates: &UpdateCustomer,
) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let customer = find_customer_by_id(repo, customer_id)?;

    let updated = repo.update_customer(customer.id, updates)?;

    log::info!("Customer {} updated", updated.id);
    Ok(updated)
}

/// Removes a customer together with every credit it owns.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerReader + CustomerWriter + CreditWriter + ?Sized,
{
    let customer = find_customer_by_id(repo, customer_id)?;

    let removed_credits = repo.delete_credits_by_customer(customer.id)?;
    repo.delete_customer(customer.id)?;

    log::info!(
        "Customer {} deleted with {removed_credits} credit(s)",
        customer.id
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::customer::Address;
    use crate::domain::types::{CustomerEmail, FirstName, LastName, Password, TaxId};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn sample_new_customer() -> NewCustomer {
        NewCustomer {
            first_name: FirstName::new("Ana").unwrap(),
            last_name: LastName::new("Souza").unwrap(),
            tax_id: TaxId::new("52998224725").unwrap(),
            email: CustomerEmail::new("ana@example.com").unwrap(),
            income: "3500".parse().unwrap(),
            password: Password::new("s3cret").unwrap(),
            address: Address::try_new("01001-000", "Praca da Se").unwrap(),
        }
    }

    fn stored(id: i32, new_customer: &NewCustomer) -> Customer {
        Customer {
            id: CustomerId::new(id).unwrap(),
            first_name: new_customer.first_name.clone(),
            last_name: new_customer.last_name.clone(),
            tax_id: new_customer.tax_id.clone(),
            email: new_customer.email.clone(),
            income: new_customer.income,
            password: new_customer.password.clone(),
            address: new_customer.address.clone(),
        }
    }

    #[test]
    fn save_returns_stored_customer_with_id() {
        let mut repo = MockRepository::new();
        repo.expect_create_customer()
            .times(1)
            .returning(|new_customer| Ok(stored(1, new_customer)));

        let customer = save_customer(&repo, &sample_new_customer()).unwrap();

        assert_eq!(customer.id.get(), 1);
        assert_eq!(customer.email.as_str(), "ana@example.com");
    }

    #[test]
    fn save_surfaces_unique_violation_as_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_customer().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "Unique constraint violation: customers.email".to_string(),
            ))
        });

        let result = save_customer(&repo, &sample_new_customer());

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn find_missing_customer_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_customer_by_id()
            .with(eq(CustomerId::new(42).unwrap()))
            .returning(|_| Ok(None));

        let result = find_customer_by_id(&repo, 42);

        assert!(matches!(result, Err(ServiceError::NotFound(msg)) if msg == "Id 42 not found"));
    }

    #[test]
    fn find_rejects_non_positive_id_without_touching_the_store() {
        let repo = MockRepository::new();

        let result = find_customer_by_id(&repo, 0);

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[test]
    fn update_requires_existing_customer() {
        let mut repo = MockRepository::new();
        repo.expect_get_customer_by_id().returning(|_| Ok(None));
        repo.expect_update_customer().never();

        let updates = UpdateCustomer {
            first_name: FirstName::new("Bia").unwrap(),
            last_name: LastName::new("Lima").unwrap(),
            income: "10".parse().unwrap(),
            address: Address::try_new("20000-000", "Rua Nova").unwrap(),
        };

        let result = update_customer(&repo, 5, &updates);

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn update_applies_changes() {
        let mut repo = MockRepository::new();
        repo.expect_get_customer_by_id()
            .returning(|id| Ok(Some(stored(id.get(), &sample_new_customer()))));
        repo.expect_update_customer()
            .with(eq(CustomerId::new(5).unwrap()), mockall::predicate::always())
            .returning(|id, updates| {
                let mut customer = stored(id.get(), &sample_new_customer());
                customer.first_name = updates.first_name.clone();
                customer.address = updates.address.clone();
                Ok(customer)
            });

        let updates = UpdateCustomer {
            first_name: FirstName::new("Bia").unwrap(),
            last_name: LastName::new("Souza").unwrap(),
            income: "3500".parse().unwrap(),
            address: Address::try_new("20000-000", "Rua Nova").unwrap(),
        };

        let customer = update_customer(&repo, 5, &updates).unwrap();

        assert_eq!(customer.first_name.as_str(), "Bia");
        assert_eq!(customer.address.street.as_str(), "Rua Nova");
    }

    #[test]
    fn delete_removes_credits_before_customer() {
        let mut repo = MockRepository::new();
        let mut seq = Sequence::new();
        repo.expect_get_customer_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(Some(stored(id.get(), &sample_new_customer()))));
        repo.expect_delete_credits_by_customer()
            .with(eq(CustomerId::new(3).unwrap()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(2));
        repo.expect_delete_customer()
            .with(eq(CustomerId::new(3).unwrap()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        delete_customer(&repo, 3).unwrap();
    }

    #[test]
    fn delete_missing_customer_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_customer_by_id().returning(|_| Ok(None));
        repo.expect_delete_credits_by_customer().never();
        repo.expect_delete_customer().never();

        let result = delete_customer(&repo, 3);

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
