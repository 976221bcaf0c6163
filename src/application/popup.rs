// src/application/popup.rs
use crate::constants::POPUP_DISMISS_MS;
use std::time::{Duration, Instant};
use tracing::debug;

/// What a pending delete confirmation will remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Folder(i64),
    Note(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    Hidden,
    /// Dismisses itself once `shown_at` is older than the dismiss delay
    Success { message: String, shown_at: Instant },
    /// Stays until confirmed or cancelled
    DeleteConfirm { message: String, target: DeleteTarget },
}

/// Single feedback slot: success notices and delete confirmations.
///
/// Every trigger overwrites whatever was showing, including a pending
/// confirmation target. Time is passed in so callers decide what "now" is.
#[derive(Debug, Clone)]
pub struct Popup {
    state: PopupState,
    dismiss_after: Duration,
}

impl Popup {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            state: PopupState::Hidden,
            dismiss_after,
        }
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, PopupState::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match &self.state {
            PopupState::Hidden => None,
            PopupState::Success { message, .. } | PopupState::DeleteConfirm { message, .. } => {
                Some(message)
            }
        }
    }

    pub fn pending_target(&self) -> Option<DeleteTarget> {
        match self.state {
            PopupState::DeleteConfirm { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn notify_success(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        debug!(%message, "Popup: success");
        self.state = PopupState::Success {
            message,
            shown_at: now,
        };
    }

    pub fn request_delete(&mut self, message: impl Into<String>, target: DeleteTarget) {
        let message = message.into();
        debug!(%message, ?target, "Popup: awaiting delete confirmation");
        self.state = PopupState::DeleteConfirm { message, target };
    }

    /// Hand out the pending target and hide. The caller performs the deletion
    /// and then reports it through `notify_success`.
    pub fn take_confirmed(&mut self) -> Option<DeleteTarget> {
        let target = self.pending_target()?;
        self.state = PopupState::Hidden;
        Some(target)
    }

    pub fn cancel(&mut self) {
        self.state = PopupState::Hidden;
    }

    /// Expire a success notice whose delay has run out. Returns true if it was dismissed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let PopupState::Success { shown_at, .. } = self.state {
            if now.saturating_duration_since(shown_at) >= self.dismiss_after {
                self.state = PopupState::Hidden;
                return true;
            }
        }
        false
    }
}

impl Default for Popup {
    fn default() -> Self {
        Self::new(Duration::from_millis(POPUP_DISMISS_MS))
    }
}
