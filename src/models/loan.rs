use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A lending record as exposed by the lendings backend.
///
/// Field names follow the backend's JSON wire format (camelCase, dates as
/// `YYYY-MM-DD`). `return_date` is null while the loan is outstanding and is
/// set exactly once when the loan is closed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub book_id: String,
    pub user_id: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl Loan {
    /// Copy of this loan with the return date set.
    pub fn with_return_date(&self, return_date: NaiveDate) -> Loan {
        Loan {
            return_date: Some(return_date),
            ..self.clone()
        }
    }
}
