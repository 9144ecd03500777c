//! Reconciliation orchestrator - closes a loan and issues a late fine
//!
//! This is the logic that used to live inline in the dashboard's
//! return-form handler, made explicit: load and validate the loan, evaluate
//! the fine policy, then persist fine and loan in a fixed order. The two
//! backends share no transaction, so a failure between the writes is
//! reported as partial success rather than rolled back.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use serde_json::json;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    CloseError, FineStore, LoanStore, Notification, NotificationSink, Outcome, StoreError,
};
use crate::models::{Fine, Loan};
use crate::services::FinePolicy;

/// Phases of a loan-closing operation.
///
/// `Failed` is reachable from any non-terminal phase; errors and
/// notifications report the phase the operation failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePhase {
    Pending,
    Validating,
    FineEvaluation,
    Persisting,
    Completed,
    Failed,
}

impl ClosePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClosePhase::Pending => "pending",
            ClosePhase::Validating => "validating",
            ClosePhase::FineEvaluation => "fine_evaluation",
            ClosePhase::Persisting => "persisting",
            ClosePhase::Completed => "completed",
            ClosePhase::Failed => "failed",
        }
    }
}

/// Outcome of a successful close: the updated loan and the fine, if one
/// was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanCloseResult {
    pub loan: Loan,
    pub fine: Option<Fine>,
}

pub struct ReconciliationService {
    loans: Arc<dyn LoanStore>,
    fines: Arc<dyn FineStore>,
    notifications: Arc<dyn NotificationSink>,
    policy: FinePolicy,
    /// One async mutex per loan id currently being closed, so two callers
    /// cannot both observe an open loan and both issue a fine.
    close_gates: DashMap<String, Arc<Mutex<()>>>,
}

impl ReconciliationService {
    pub fn new(
        loans: Arc<dyn LoanStore>,
        fines: Arc<dyn FineStore>,
        notifications: Arc<dyn NotificationSink>,
        policy: FinePolicy,
    ) -> Self {
        ReconciliationService {
            loans,
            fines,
            notifications,
            policy,
            close_gates: DashMap::new(),
        }
    }

    /// Close a loan: set its return date and issue a fine when the return
    /// is late.
    ///
    /// Per successful call: at most one fine write, exactly one loan write.
    /// Validation failures perform zero writes. Concurrent calls for the
    /// same loan id are serialized; retries after a reported partial
    /// failure are guarded by the `AlreadyClosed` check.
    pub async fn close_loan(
        &self,
        loan_id: &str,
        return_date: NaiveDate,
    ) -> Result<LoanCloseResult, CloseError> {
        let op_id = Uuid::new_v4();

        let gate = self
            .close_gates
            .entry(loan_id.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = gate.lock().await;

        let result = self.close_loan_locked(op_id, loan_id, return_date).await;

        drop(guard);
        drop(gate);
        self.close_gates
            .remove_if(loan_id, |_, gate| Arc::strong_count(gate) == 1);

        self.report(op_id, loan_id, return_date, &result);
        result
    }

    async fn close_loan_locked(
        &self,
        op_id: Uuid,
        loan_id: &str,
        return_date: NaiveDate,
    ) -> Result<LoanCloseResult, CloseError> {
        let mut phase = ClosePhase::Validating;
        tracing::debug!(%op_id, loan_id, phase = phase.as_str(), "closing loan");

        let loan = self
            .loans
            .get(loan_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => CloseError::NotFound,
                other => CloseError::LoanFetch(other),
            })?
            .ok_or(CloseError::NotFound)?;

        if let Some(returned_on) = loan.return_date {
            return Err(CloseError::AlreadyClosed { returned_on });
        }

        if return_date < loan.issue_date {
            return Err(CloseError::Validation(format!(
                "return date {} precedes issue date {}",
                return_date, loan.issue_date
            )));
        }

        phase = ClosePhase::FineEvaluation;
        tracing::debug!(%op_id, loan_id, phase = phase.as_str(), due_date = %loan.due_date, "evaluating fine policy");
        let pending_fine = self
            .policy
            .compute_fine(loan.due_date, return_date)
            .map(|amount| Fine::pending(loan.id.clone(), amount));

        phase = ClosePhase::Persisting;
        tracing::debug!(
            %op_id,
            loan_id,
            phase = phase.as_str(),
            fine_due = pending_fine.is_some(),
            "persisting"
        );

        // Fine first. An orphaned fine whose loan failed to update can be
        // reconciled by hand; a loan marked returned with the fine write
        // lost would leave no trace the fine was ever due.
        let created_fine = match &pending_fine {
            Some(fine) => Some(
                self.fines
                    .create(fine)
                    .await
                    .map_err(CloseError::FinePersistence)?,
            ),
            None => None,
        };

        let updated = loan.with_return_date(return_date);
        let saved_loan =
            self.loans
                .update(&updated)
                .await
                .map_err(|e| CloseError::LoanPersistence {
                    fine_id: created_fine.as_ref().and_then(|f| f.fine_id.clone()),
                    source: e,
                })?;

        phase = ClosePhase::Completed;
        tracing::info!(
            %op_id,
            loan_id,
            phase = phase.as_str(),
            fined = created_fine.is_some(),
            "loan closed"
        );

        Ok(LoanCloseResult {
            loan: saved_loan,
            fine: created_fine,
        })
    }

    /// Phase a failed operation died in, derived from the error kind.
    fn failed_phase(error: &CloseError) -> ClosePhase {
        match error {
            CloseError::NotFound
            | CloseError::AlreadyClosed { .. }
            | CloseError::Validation(_)
            | CloseError::LoanFetch(_) => ClosePhase::Validating,
            CloseError::FinePersistence(_) | CloseError::LoanPersistence { .. } => {
                ClosePhase::Persisting
            }
        }
    }

    fn report(
        &self,
        op_id: Uuid,
        loan_id: &str,
        return_date: NaiveDate,
        result: &Result<LoanCloseResult, CloseError>,
    ) {
        let notification = match result {
            Ok(res) => {
                let message = match &res.fine {
                    Some(fine) => format!("Loan returned late, fine of {} issued", fine.fine_amount),
                    None => "Loan returned on time".to_string(),
                };
                Notification {
                    outcome: Outcome::Success,
                    message,
                    context: json!({
                        "opId": op_id.to_string(),
                        "loanId": loan_id,
                        "returnDate": return_date,
                        "phase": ClosePhase::Completed.as_str(),
                        "fineId": res.fine.as_ref().and_then(|f| f.fine_id.clone()),
                    }),
                }
            }
            Err(e) => {
                let fine_id = match e {
                    CloseError::LoanPersistence { fine_id, .. } => fine_id.clone(),
                    _ => None,
                };
                Notification {
                    outcome: Outcome::Error,
                    message: e.to_string(),
                    context: json!({
                        "opId": op_id.to_string(),
                        "loanId": loan_id,
                        "returnDate": return_date,
                        "phase": Self::failed_phase(e).as_str(),
                        "fineId": fine_id,
                    }),
                }
            }
        };

        self.notifications.notify(notification);
    }
}
