use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fine record as exposed by the fines backend.
///
/// `fine_id` is assigned by the backend and therefore absent on create.
/// `fine_amount` is computed once when the fine is issued; a later change of
/// the daily rate never recomputes existing fines. `paid_status` and
/// `payment_date` belong to the payment workflow and are only ever defaulted
/// here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine_id: Option<String>,
    pub lend_id: String,
    pub fine_amount: Decimal,
    pub paid_status: bool,
    pub payment_date: Option<NaiveDate>,
}

impl Fine {
    /// A freshly issued, unpaid fine for a late loan.
    pub fn pending(lend_id: String, fine_amount: Decimal) -> Fine {
        Fine {
            fine_id: None,
            lend_id,
            fine_amount,
            paid_status: false,
            payment_date: None,
        }
    }
}
