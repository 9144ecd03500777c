use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::CloseError;
use crate::infrastructure::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLoanRequest {
    /// Defaults to today when omitted.
    pub return_date: Option<NaiveDate>,
}

#[utoipa::path(
    post,
    path = "/api/lendings/{id}/return",
    params(
        ("id" = String, Path, description = "Loan id")
    ),
    responses(
        (status = 200, description = "Loan closed; body carries the fine when one was issued"),
        (status = 404, description = "Unknown loan id"),
        (status = 409, description = "Loan already returned"),
        (status = 422, description = "Invalid return date"),
        (status = 502, description = "A backend write failed; body reports which step succeeded")
    )
)]
pub async fn return_loan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // An empty body means "returned today"; a body that is present but
    // malformed must not fall through to that default.
    let return_date = parse_return_date(&body)
        .map_err(close_error_response)?
        .unwrap_or_else(|| state.clock.today());

    let result = state
        .reconciliation
        .close_loan(&id, return_date)
        .await
        .map_err(close_error_response)?;

    let message = match &result.fine {
        Some(fine) => format!("Loan returned late, fine of {} issued", fine.fine_amount),
        None => "Loan returned successfully".to_string(),
    };

    Ok(Json(json!({
        "loan": result.loan,
        "fine": result.fine,
        "message": message,
    })))
}

fn parse_return_date(body: &[u8]) -> Result<Option<NaiveDate>, CloseError> {
    if body.is_empty() {
        return Ok(None);
    }
    let request: ReturnLoanRequest = serde_json::from_slice(body)
        .map_err(|e| CloseError::Validation(format!("invalid request body: {}", e)))?;
    Ok(request.return_date)
}

/// Each error kind maps to its own status code so the dashboard can decide
/// whether and how to retry.
fn close_error_response(error: CloseError) -> (StatusCode, Json<Value>) {
    let status = match &error {
        CloseError::NotFound => StatusCode::NOT_FOUND,
        CloseError::AlreadyClosed { .. } => StatusCode::CONFLICT,
        CloseError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CloseError::LoanFetch(_)
        | CloseError::FinePersistence(_)
        | CloseError::LoanPersistence { .. } => StatusCode::BAD_GATEWAY,
    };

    let mut body = json!({ "error": error.to_string() });
    match &error {
        CloseError::AlreadyClosed { returned_on } => {
            body["returnDate"] = json!(returned_on);
        }
        // Tell the caller the fine is already persisted so a retry only
        // repeats the loan update.
        CloseError::LoanPersistence { fine_id, .. } => {
            body["finePersisted"] = json!(true);
            body["fineId"] = json!(fine_id);
        }
        CloseError::FinePersistence(_) => {
            body["finePersisted"] = json!(false);
        }
        _ => {}
    }

    (status, Json(body))
}
