//! Repository implementation for credits.

use diesel::prelude::*;

use crate::{
    domain::{
        credit::{Credit, NewCredit},
        types::{CreditCode, CustomerId},
    },
    models::credit::{Credit as DbCredit, NewCredit as DbNewCredit},
    repository::{
        CreditReader, CreditWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl CreditReader for DieselRepository {
    fn get_credit_by_code(&self, credit_code: &CreditCode) -> RepositoryResult<Option<Credit>> {
        use crate::schema::credits;

        let mut conn = self.conn()?;
        let db_credit = credits::table
            .filter(credits::credit_code.eq(credit_code.to_string()))
            .select(DbCredit::as_select())
            .first::<DbCredit>(&mut conn)
            .optional()?;

        match db_credit {
            Some(db_credit) => Ok(Some(
                Credit::try_from(db_credit).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_credits_by_customer(&self, customer_id: CustomerId) -> RepositoryResult<Vec<Credit>> {
        use crate::schema::credits;

        let mut conn = self.conn()?;
        credits::table
            .filter(credits::customer_id.eq(customer_id.get()))
            .order(credits::id.asc())
            .select(DbCredit::as_select())
            .load::<DbCredit>(&mut conn)?
            .into_iter()
            .map(|db_credit| Credit::try_from(db_credit).map_err(RepositoryError::from))
            .collect()
    }
}

impl CreditWriter for DieselRepository {
    fn create_credit(&self, new_credit: &NewCredit) -> RepositoryResult<Credit> {
        use crate::schema::credits;

        let mut conn = self.conn()?;
        let insertable: DbNewCredit = new_credit.into();

        let db_credit = diesel::insert_into(credits::table)
            .values(&insertable)
            .returning(DbCredit::as_returning())
            .get_result::<DbCredit>(&mut conn)?;

        Credit::try_from(db_credit).map_err(RepositoryError::from)
    }

    fn delete_credits_by_customer(&self, customer_id: CustomerId) -> RepositoryResult<usize> {
        use crate::schema::credits;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(credits::table.filter(credits::customer_id.eq(customer_id.get())))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
