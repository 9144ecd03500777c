pub mod fine_policy;
pub mod reconciliation;

pub use fine_policy::FinePolicy;
pub use reconciliation::{ClosePhase, LoanCloseResult, ReconciliationService};
