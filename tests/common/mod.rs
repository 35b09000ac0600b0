#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{Months, NaiveDate, Utc};
use credit_origination::db::{DbPool, establish_connection_pool, run_migrations};
use credit_origination::domain::credit::NewCredit;
use credit_origination::domain::customer::{Address, NewCustomer};
use credit_origination::domain::types::{
    CustomerEmail, CustomerId, FirstName, InstallmentCount, LastName, Password, TaxId,
};
use tempfile::TempDir;

/// Migrated SQLite file living in a temporary directory for one test.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();
        let pool = establish_connection_pool(&url).expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

pub fn new_customer(tax_id: &str, email: &str) -> NewCustomer {
    NewCustomer {
        first_name: FirstName::new("Ana").unwrap(),
        last_name: LastName::new("Souza").unwrap(),
        tax_id: TaxId::new(tax_id).unwrap(),
        email: CustomerEmail::new(email).unwrap(),
        income: "3500.50".parse().unwrap(),
        password: Password::new("s3cret").unwrap(),
        address: Address::try_new("01001-000", "Praca da Se").unwrap(),
    }
}

pub fn in_two_months() -> NaiveDate {
    Utc::now()
        .date_naive()
        .checked_add_months(Months::new(2))
        .unwrap()
}

pub fn new_credit(customer_id: CustomerId) -> NewCredit {
    NewCredit::new(
        "100".parse().unwrap(),
        in_two_months(),
        InstallmentCount::new(15).unwrap(),
        customer_id,
    )
}
