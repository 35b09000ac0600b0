//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::credit::{Credit, NewCredit};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::{CreditCode, CustomerId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CreditReader, CreditWriter, CustomerReader, CustomerWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    }

    impl CustomerWriter for Repository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(
            &self,
            id: CustomerId,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<Customer>;
        fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()>;
    }

    impl CreditReader for Repository {
        fn get_credit_by_code(&self, credit_code: &CreditCode) -> RepositoryResult<Option<Credit>>;
        fn list_credits_by_customer(&self, customer_id: CustomerId) -> RepositoryResult<Vec<Credit>>;
    }

    impl CreditWriter for Repository {
        fn create_credit(&self, new_credit: &NewCredit) -> RepositoryResult<Credit>;
        fn delete_credits_by_customer(&self, customer_id: CustomerId) -> RepositoryResult<usize>;
    }
}
