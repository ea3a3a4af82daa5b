//! User Notifications
//!
//! A failed fetch is reported once, as a modal alert carrying only the
//! status text. Details go to the console.

use crate::error::FetchError;
use crate::logging::{log_error, log_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    /// Log the full failure under `context` and keep only its status for the user
    pub fn from_failure(context: &str, err: &FetchError) -> Self {
        log_error(&format!("[{}] request failed: {}", context, err));
        Self { message: err.status().to_string() }
    }

    pub fn show(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if window.alert_with_message(&self.message).is_ok() {
                    return;
                }
            }
        }
        log_warn(&format!("[NOTICE] {}", self.message));
    }
}
