//! Notification sink
//!
//! Every close attempt ends with one notification so a UI channel can show
//! the result. There is no format contract beyond outcome + context.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub outcome: Outcome,
    pub message: String,
    pub context: Value,
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
