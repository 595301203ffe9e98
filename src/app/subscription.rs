// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes keyboard events the focused widgets did not consume, and batches in
//! the notification sampling ticks.

use super::Message;
use crate::ui::notifications::Provider;
use iced::{event, keyboard, Subscription};

/// Escape closes the most recent toast.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::DismissLatest),
            _ => None,
        }
    })
}

/// Progress sampling for every visible toast.
pub fn create_notification_subscription(provider: &Provider) -> Subscription<Message> {
    provider.subscription().map(Message::Notification)
}
