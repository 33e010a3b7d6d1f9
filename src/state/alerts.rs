//! User-visible notifications

use std::collections::VecDeque;

/// Channel for messages the user has to acknowledge
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Queue of pending alerts, shown one at a time as a modal dialog
#[derive(Debug, Default)]
pub struct AlertQueue {
    pending: VecDeque<String>,
}

impl AlertQueue {
    /// Alert currently on screen
    pub fn current(&self) -> Option<&str> {
        self.pending.front().map(String::as_str)
    }

    /// Dismiss the alert on screen, revealing the next one
    pub fn dismiss(&mut self) {
        self.pending.pop_front();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Notifier for AlertQueue {
    fn notify(&mut self, message: &str) {
        self.pending.push_back(message.to_string());
        tracing::info!("Alert raised ({} pending): {message}", self.len());
    }
}
