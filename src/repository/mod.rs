//! Persistence gateway for customers and credits.
//!
//! Each aggregate exposes a reader and a writer trait so services can ask for
//! exactly the capabilities they use. [`DieselRepository`] implements all of
//! them on top of a SQLite pool.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        credit::{Credit, NewCredit},
        customer::{Customer, NewCustomer, UpdateCustomer},
        types::{CreditCode, CustomerId},
    },
    repository::errors::RepositoryResult,
};

pub mod credit;
pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(
        &self,
        id: CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer>;
    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()>;
}

pub trait CreditReader {
    fn get_credit_by_code(&self, credit_code: &CreditCode) -> RepositoryResult<Option<Credit>>;
    /// Credits of one customer in insertion order.
    fn list_credits_by_customer(&self, customer_id: CustomerId) -> RepositoryResult<Vec<Credit>>;
}

pub trait CreditWriter {
    fn create_credit(&self, new_credit: &NewCredit) -> RepositoryResult<Credit>;
    /// Removes every credit owned by the customer, returning how many were deleted.
    fn delete_credits_by_customer(&self, customer_id: CustomerId) -> RepositoryResult<usize>;
}
