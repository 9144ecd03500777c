//! Log-backed notification sink
//!
//! The default sink surfaces close outcomes as structured log events. A UI
//! push channel can replace it behind the same trait.

use crate::domain::{Notification, NotificationSink, Outcome};

pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.outcome {
            Outcome::Success => {
                tracing::info!(context = %notification.context, "{}", notification.message)
            }
            Outcome::Error => {
                tracing::error!(context = %notification.context, "{}", notification.message)
            }
        }
    }
}
