//! Application state containing the wired-up reconciliation service

use std::sync::Arc;

use crate::config::Config;
use crate::domain::{Clock, SystemClock};
use crate::infrastructure::{HttpFineStore, HttpLoanStore, SessionContext, TracingNotificationSink};
use crate::services::{FinePolicy, ReconciliationService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub reconciliation: Arc<ReconciliationService>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wire the HTTP stores and the orchestrator from configuration.
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        let session = config.service_token.clone().map(SessionContext::new);

        let loans = Arc::new(HttpLoanStore::new(
            client.clone(),
            config.lendings_base_url.clone(),
            session.clone(),
        ));
        let fines = Arc::new(HttpFineStore::new(
            client,
            config.fines_base_url.clone(),
            session,
        ));

        let policy = FinePolicy::new(config.fine_daily_rate, config.fine_grace_days);
        let reconciliation = Arc::new(ReconciliationService::new(
            loans,
            fines,
            Arc::new(TracingNotificationSink),
            policy,
        ));

        AppState {
            reconciliation,
            clock: Arc::new(SystemClock),
        }
    }
}
