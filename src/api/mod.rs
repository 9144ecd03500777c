pub mod health;
pub mod loan;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Loan closing
        .route("/lendings/:id/return", post(loan::return_loan))
        .with_state(state)
}
