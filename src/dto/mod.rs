//! Views returned by the JSON API.

pub mod credit;
pub mod customer;
pub mod error;
