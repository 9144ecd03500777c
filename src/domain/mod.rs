//! Domain layer: framework-agnostic types and contracts.
//!
//! The reconciliation core only talks to the outside world through the
//! traits defined here; HTTP implementations live in the infrastructure
//! layer.

pub mod clock;
pub mod errors;
pub mod notify;
pub mod stores;

pub use clock::{Clock, SystemClock};
pub use errors::{CloseError, StoreError};
pub use notify::{Notification, NotificationSink, Outcome};
pub use stores::{FineStore, LoanStore};
