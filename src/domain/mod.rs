//! Domain aggregates exposed by the credit origination service layer.

pub mod credit;
pub mod customer;
pub mod types;
