//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level
//! failures. The HTTP layer maps each kind to a distinct status code;
//! nothing here is ever silently swallowed.

use std::fmt;

use chrono::NaiveDate;

/// Failure talking to one of the backing record stores.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The record does not exist on the backend
    NotFound,
    /// Connection-level failure (refused, timeout, DNS)
    Transport(String),
    /// The backend answered with a non-success status
    Status { status: u16, body: String },
    /// The backend answered with a body we could not decode
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "record not found"),
            StoreError::Transport(msg) => write!(f, "transport error: {}", msg),
            StoreError::Status { status, body } => {
                write!(f, "backend returned status {}: {}", status, body)
            }
            StoreError::Decode(msg) => write!(f, "invalid backend response: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Transport(e.to_string())
    }
}

/// Why a loan-closing operation failed.
///
/// `FinePersistence` means the loan store was never touched and the whole
/// operation can be retried from scratch. `LoanPersistence` means the fine
/// was already written; it carries the created fine's id so a retry can
/// update only the loan instead of issuing a second fine.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseError {
    /// No loan with the given id
    NotFound,
    /// The loan already has a return date (idempotence guard)
    AlreadyClosed { returned_on: NaiveDate },
    /// The close request itself is invalid
    Validation(String),
    /// Could not load the loan from the lendings backend
    LoanFetch(StoreError),
    /// The fine write failed; no loan update was attempted
    FinePersistence(StoreError),
    /// The fine write succeeded but the loan update failed
    LoanPersistence {
        fine_id: Option<String>,
        source: StoreError,
    },
}

impl fmt::Display for CloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseError::NotFound => write!(f, "loan not found"),
            CloseError::AlreadyClosed { returned_on } => {
                write!(f, "loan already returned on {}", returned_on)
            }
            CloseError::Validation(msg) => write!(f, "validation error: {}", msg),
            CloseError::LoanFetch(e) => write!(f, "failed to load loan: {}", e),
            CloseError::FinePersistence(e) => write!(f, "failed to persist fine: {}", e),
            CloseError::LoanPersistence { fine_id, source } => match fine_id {
                Some(id) => write!(
                    f,
                    "fine {} persisted but loan update failed: {}",
                    id, source
                ),
                None => write!(f, "loan update failed: {}", source),
            },
        }
    }
}

impl std::error::Error for CloseError {}
