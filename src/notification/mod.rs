//! User notifications
//!
//! Commands report every outcome through a [`NotificationService`]. Display is
//! fire-and-forget: nothing a notifier returns is consumed.

use log::log;
use serde::{Deserialize, Serialize};

/// The severity of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Informational message
    Info,
    /// Warning conditions
    Warning,
    /// Error conditions
    Error,
}

impl NotificationLevel {
    /// Get the `log` level a notification of this severity is logged at
    pub fn as_log_level(&self) -> log::Level {
        match self {
            Self::Info => log::Level::Info,
            Self::Warning => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

/// A message shown to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    /// The severity of this message
    pub level: NotificationLevel,
    /// The message text
    pub message: String,
}

impl Notification {
    /// Create a new notification
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Severity-tagged message display offered by the host
#[cfg_attr(test, mockall::automock)]
pub trait NotificationService {
    /// Show an error message
    fn show_error(&mut self, message: &str);

    /// Show a warning message
    fn show_warning(&mut self, message: &str);

    /// Show an informational message
    fn show_info(&mut self, message: &str);
}

/// Keeps every notification in order of arrival.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    notifications: Vec<Notification>,
}

impl NotificationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all notifications shown so far
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Get the most recent notification
    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Remove and return all notifications
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn push(&mut self, level: NotificationLevel, message: &str) {
        self.notifications.push(Notification::new(level, message));
    }
}

impl NotificationService for NotificationLog {
    fn show_error(&mut self, message: &str) {
        self.push(NotificationLevel::Error, message);
    }

    fn show_warning(&mut self, message: &str) {
        self.push(NotificationLevel::Warning, message);
    }

    fn show_info(&mut self, message: &str) {
        self.push(NotificationLevel::Info, message);
    }
}

/// Routes notifications to the `log` facade, for hosts without a UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    fn emit(level: NotificationLevel, message: &str) {
        log!(target: "one_base64::notification", level.as_log_level(), "{}", message);
    }
}

impl NotificationService for LogNotifier {
    fn show_error(&mut self, message: &str) {
        Self::emit(NotificationLevel::Error, message);
    }

    fn show_warning(&mut self, message: &str) {
        Self::emit(NotificationLevel::Warning, message);
    }

    fn show_info(&mut self, message: &str) {
        Self::emit(NotificationLevel::Info, message);
    }
}
