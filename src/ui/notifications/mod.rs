// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm actions (login, task changes)
//! or report errors without blocking interaction. Each one removes itself
//! once its duration elapses, unless the user closes it first.
//!
//! # Components
//!
//! - [`notification`] - Immutable `Notification` record and its `Kind`
//! - [`manager`] - Ordered store of displayed notifications
//! - [`lifecycle`] - Visible/dismissing/removed state and the deadline timer
//! - [`relay`] - One-slot durable mailbox surviving a screen change
//! - [`provider`] - Store owner, and the `Notifier` handle collaborators use
//! - [`toast`] - Toast widgets
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Kind, Provider, Relay, Settings};
//!
//! let (mut provider, task) = Provider::mount(Relay::new(storage), Settings::default());
//! let notifier = provider.notifier();
//!
//! notifier.add_notification(Kind::Success, None, "Task created successfully!", None)?;
//! let task = provider.flush();
//!
//! // Before navigating away
//! notifier.set_pending_notification(Kind::Info, None, "See you soon.", None)?;
//! ```

pub mod lifecycle;
pub mod manager;
pub mod notification;
pub mod provider;
pub mod relay;
pub mod toast;

pub use lifecycle::{Lifecycle, Phase, Timer};
pub use manager::{Entry, Manager};
pub use notification::{Kind, Notification, NotificationId};
pub use provider::{Message, Notifier, Provider, Settings};
pub use relay::{PendingNotification, Relay, PENDING_KEY};
pub use toast::Toast;
