pub mod credit;
pub mod customer;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
