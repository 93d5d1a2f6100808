//! Blocking user dialogs (confirm / alert).

/// Yes/no confirmation and warning popups
pub trait Dialogs: Send + Sync {
    /// Ask the user to confirm; `false` when declined or unavailable
    fn confirm(&self, message: &str) -> bool;

    /// Show a blocking warning
    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                tracing::warn!("[DIALOG] alert failed: {:?}", e);
            }
        }
    }
}
