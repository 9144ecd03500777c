pub mod notify;
pub mod session;
pub mod state;
pub mod stores;

pub use notify::TracingNotificationSink;
pub use session::SessionContext;
pub use state::AppState;
pub use stores::{HttpFineStore, HttpLoanStore};
