//! HTTP implementations of the record store traits
//!
//! The lendings and fines backends are independent REST services with JSON
//! camelCase wire formats. Each close operation performs at most one GET,
//! one POST and one PUT against them.

pub mod fine_store;
pub mod loan_store;

pub use fine_store::HttpFineStore;
pub use loan_store::HttpLoanStore;
