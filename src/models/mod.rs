//! Database models shared across the credit origination repository.

#[cfg(feature = "server")]
pub mod config;
pub mod credit;
pub mod customer;
