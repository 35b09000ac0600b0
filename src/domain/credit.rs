use std::fmt::Display;
use std::str::FromStr;

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::domain::types::{
    CreditCode, CreditId, CustomerId, InstallmentCount, Money, TypeConstraintError,
};

/// How far ahead of the application date the first installment may fall.
pub const FIRST_INSTALLMENT_WINDOW_MONTHS: u32 = 3;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CreditStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditStatus::Pending => write!(f, "pending"),
            CreditStatus::Approved => write!(f, "approved"),
            CreditStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for CreditStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CreditStatus::Pending),
            "approved" => Ok(CreditStatus::Approved),
            "rejected" => Ok(CreditStatus::Rejected),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown credit status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Credit {
    pub id: CreditId,
    pub credit_code: CreditCode,
    pub credit_value: Money,
    pub first_installment: NaiveDate,
    pub number_of_installments: InstallmentCount,
    pub status: CreditStatus,
    pub customer_id: CustomerId,
}

impl Credit {
    /// Whether this credit is owned by the given customer.
    pub fn belongs_to(&self, customer_id: CustomerId) -> bool {
        self.customer_id == customer_id
    }
}

/// A credit application about to be stored.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCredit {
    pub credit_code: CreditCode,
    pub credit_value: Money,
    pub first_installment: NaiveDate,
    pub number_of_installments: InstallmentCount,
    pub status: CreditStatus,
    pub customer_id: CustomerId,
}

impl NewCredit {
    /// Starts a pending application with a freshly generated credit code.
    pub fn new(
        credit_value: Money,
        first_installment: NaiveDate,
        number_of_installments: InstallmentCount,
        customer_id: CustomerId,
    ) -> Self {
        Self {
            credit_code: CreditCode::new(),
            credit_value,
            first_installment,
            number_of_installments,
            status: CreditStatus::Pending,
            customer_id,
        }
    }

    /// True when the first installment falls strictly after `today` and
    /// strictly before `today` plus [`FIRST_INSTALLMENT_WINDOW_MONTHS`].
    pub fn first_installment_within_window(&self, today: NaiveDate) -> bool {
        let deadline = today
            .checked_add_months(Months::new(FIRST_INSTALLMENT_WINDOW_MONTHS))
            .unwrap_or(NaiveDate::MAX);
        self.first_installment > today && self.first_installment < deadline
    }
}
