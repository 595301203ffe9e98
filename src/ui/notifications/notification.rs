// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `Notification` record and the `Kind`
//! enum used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category of a notification. Only the visual treatment depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    Welcome,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 5] = [
        Kind::Success,
        Kind::Error,
        Kind::Warning,
        Kind::Info,
        Kind::Welcome,
    ];

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
            Kind::Welcome => palette::WELCOME_500,
        }
    }

    /// Returns the glyph drawn in the toast badge.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Warning => "!",
            Kind::Info => "i",
            Kind::Welcome => "★",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
            Kind::Welcome => "welcome",
        };
        f.write_str(label)
    }
}

/// A notification to be displayed to the user.
///
/// Once built, a notification never changes; only its presence in the store
/// does.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: Option<String>,
    message: String,
    /// Requested lifetime; `None` means the provider default.
    duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with a fresh id.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: None,
            message: message.into(),
            duration: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    pub fn welcome(message: impl Into<String>) -> Self {
        Self::new(Kind::Welcome, message)
    }

    /// Sets the short label shown above the message.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a custom lifetime, overriding the provider default.
    ///
    /// A zero lifetime keeps the provider default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration).filter(|d| !d.is_zero());
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the requested lifetime, if any.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the lifetime to use, falling back to `default`.
    #[must_use]
    pub fn duration_or(&self, default: Duration) -> Duration {
        self.duration.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::error("X");
        let n2 = Notification::error("X");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn notification_ids_are_increasing() {
        let first = NotificationId::new();
        let second = NotificationId::new();
        assert!(second > first);
    }

    #[test]
    fn kind_colors_are_distinct() {
        for (i, a) in Kind::ALL.iter().enumerate() {
            for b in &Kind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a} and {b} share a color");
            }
        }
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&Kind::Welcome).expect("serialize");
        assert_eq!(json, "\"welcome\"");
        let kind: Kind = serde_json::from_str("\"warning\"").expect("deserialize");
        assert_eq!(kind, Kind::Warning);
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::success("Welcome back!")
            .with_title("Login Successful.")
            .with_duration(Duration::from_millis(5_000));

        assert_eq!(notification.kind(), Kind::Success);
        assert_eq!(notification.title(), Some("Login Successful."));
        assert_eq!(notification.message(), "Welcome back!");
        assert_eq!(notification.duration(), Some(Duration::from_millis(5_000)));
    }

    #[test]
    fn notification_constructors_set_correct_kind() {
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::error("").kind(), Kind::Error);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
        assert_eq!(Notification::info("").kind(), Kind::Info);
        assert_eq!(Notification::welcome("").kind(), Kind::Welcome);
    }

    #[test]
    fn zero_duration_means_default() {
        let notification = Notification::info("x").with_duration(Duration::ZERO);
        assert_eq!(notification.duration(), None);
        assert_eq!(
            notification.duration_or(Duration::from_secs(5)),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn explicit_duration_is_kept_as_requested() {
        let long = Notification::info("x").with_duration(Duration::from_secs(120));
        assert_eq!(long.duration(), Some(Duration::from_secs(120)));

        let short = Notification::info("x").with_duration(Duration::from_millis(50));
        assert_eq!(short.duration(), Some(Duration::from_millis(50)));
    }
}
