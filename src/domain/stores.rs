//! Record store trait definitions
//!
//! The lending and fines backends are independent REST services; these
//! traits define the contract the reconciliation core needs from them.
//! HTTP implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::StoreError;
use crate::models::{Fine, Loan};

/// Access to the lendings backend.
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Fetch a loan by id. `Ok(None)` when the id is unknown.
    async fn get(&self, loan_id: &str) -> Result<Option<Loan>, StoreError>;

    /// Persist a loan update (sets the return date).
    async fn update(&self, loan: &Loan) -> Result<Loan, StoreError>;
}

/// Access to the fines backend.
#[async_trait]
pub trait FineStore: Send + Sync {
    /// Create a fine record. The backend assigns the fine id.
    async fn create(&self, fine: &Fine) -> Result<Fine, StoreError>;
}
