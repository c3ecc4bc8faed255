//! User-facing notifications (toasts).
//!
//! Containers report the outcome of user actions through a [`Notifier`]. The
//! channel is fire-and-forget: nothing a notifier does can affect the
//! operation that emitted the message.

use std::sync::{Mutex, PoisonError};

/// Visual tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Error,
    Info,
    Warning,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub tone: Tone,
    pub icon: Option<String>,
}

/// Receiver of user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Show `message` with the given tone and optional icon.
    fn notify(&self, message: &str, tone: Tone, icon: Option<&str>);
}

/// Writes notifications to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, tone: Tone, icon: Option<&str>) {
        match tone {
            Tone::Error => tracing::error!(icon, "{message}"),
            Tone::Warning => tracing::warn!(icon, "{message}"),
            Tone::Success | Tone::Info => tracing::info!(%tone, icon, "{message}"),
        }
    }
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _tone: Tone, _icon: Option<&str>) {}
}

/// Collects notifications so they can be inspected or displayed later.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all received notifications.
    pub fn take(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// The most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, tone: Tone, icon: Option<&str>) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Toast {
                message: message.to_owned(),
                tone,
                icon: icon.map(str::to_owned),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify("اول", Tone::Info, None);
        notifier.notify("دوم", Tone::Success, Some("🛒"));

        let last = notifier.last();
        assert_eq!(last.as_ref().map(|t| t.tone), Some(Tone::Success));
        assert_eq!(last.and_then(|t| t.icon).as_deref(), Some("🛒"));

        let taken = notifier.take();
        assert_eq!(taken.len(), 2);
        assert!(notifier.toasts().is_empty());
    }
}
