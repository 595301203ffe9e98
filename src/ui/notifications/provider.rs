// SPDX-License-Identifier: MPL-2.0
//! Notification provider and its context handle.
//!
//! The `Provider` owns the store for as long as it is mounted. Everything else
//! only holds a [`Notifier`], which can enqueue notifications and park one in
//! the relay, but never sees the store. A notifier is bound to the provider
//! that issued it: once that provider is gone every call fails with
//! [`Error::ContextUnavailable`].
//!
//! Mounting a provider is the desktop equivalent of a page load: the relay is
//! drained exactly once, before any collaborator request is applied.

use super::lifecycle::{self, Phase};
use super::manager::{Entry, Manager};
use super::notification::{Kind, Notification, NotificationId};
use super::relay::{PendingNotification, Relay};
use super::toast::Toast;
use crate::app::config::{
    DEFAULT_DISMISS_TRANSITION_MS, DEFAULT_NOTIFICATION_DURATION_MS, DEFAULT_PROGRESS_SAMPLES,
};
use crate::error::{Error, Result};
use iced::{time, Element, Subscription, Task};
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Messages driving notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user closed a notification.
    Dismiss(NotificationId),
    /// A notification's deadline passed.
    Expired(NotificationId),
    /// Time to refresh a notification's countdown bar.
    Sample(NotificationId),
    /// A notification finished its exit transition.
    Removed(NotificationId),
}

/// Timing policy of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Lifetime of notifications that do not request one.
    pub default_duration: Duration,
    /// How long a dismissed notification stays around for its exit transition.
    pub dismiss_transition: Duration,
    /// Number of progress samples across a lifetime.
    pub progress_samples: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_duration: Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS),
            dismiss_transition: Duration::from_millis(DEFAULT_DISMISS_TRANSITION_MS),
            progress_samples: DEFAULT_PROGRESS_SAMPLES,
        }
    }
}

/// Handle through which collaborators talk to the provider.
#[derive(Debug, Clone)]
pub struct Notifier {
    requests: mpsc::UnboundedSender<Notification>,
    relay: Relay,
}

impl Notifier {
    /// Enqueues a notification for immediate display.
    ///
    /// Each call yields its own entry, even for identical messages.
    pub fn add_notification(
        &self,
        kind: Kind,
        title: Option<&str>,
        message: &str,
        duration: Option<Duration>,
    ) -> Result<()> {
        self.notify(build(kind, title, message, duration))
    }

    /// Enqueues an already built notification.
    pub fn notify(&self, notification: Notification) -> Result<()> {
        self.requests
            .send(notification)
            .map_err(|_| Error::ContextUnavailable)
    }

    /// Parks a notification to be shown after the next mount, replacing any
    /// unread one.
    ///
    /// The write is synchronous, so navigating right after this call cannot
    /// lose it.
    pub fn set_pending_notification(
        &self,
        kind: Kind,
        title: Option<&str>,
        message: &str,
        duration: Option<Duration>,
    ) -> Result<()> {
        let mut record = PendingNotification::new(kind, message);
        if let Some(title) = title {
            record = record.with_title(title);
        }
        if let Some(duration) = duration {
            record = record.with_duration(duration);
        }
        self.set_pending(&record)
    }

    /// Parks an already built record.
    pub fn set_pending(&self, record: &PendingNotification) -> Result<()> {
        if self.requests.is_closed() {
            return Err(Error::ContextUnavailable);
        }
        self.relay.write(record)
    }

    /// Returns whether the issuing provider is still mounted.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.requests.is_closed()
    }
}

fn build(kind: Kind, title: Option<&str>, message: &str, duration: Option<Duration>) -> Notification {
    let mut notification = Notification::new(kind, message);
    if let Some(title) = title {
        notification = notification.with_title(title);
    }
    if let Some(duration) = duration {
        notification = notification.with_duration(duration);
    }
    notification
}

/// Sole owner of the notification store.
#[derive(Debug)]
pub struct Provider {
    store: Manager,
    /// Entries playing their exit transition, already out of the store.
    leaving: Vec<Entry>,
    relay: Relay,
    settings: Settings,
    requests: mpsc::UnboundedReceiver<Notification>,
    issuer: mpsc::UnboundedSender<Notification>,
    drained: bool,
}

impl Provider {
    /// Mounts a provider and drains the relay into it.
    pub fn mount(relay: Relay, settings: Settings) -> (Self, Task<Message>) {
        let (issuer, requests) = mpsc::unbounded_channel();
        let mut provider = Self {
            store: Manager::new(),
            leaving: Vec::new(),
            relay,
            settings,
            requests,
            issuer,
            drained: false,
        };
        let task = provider.drain_pending();
        (provider, task)
    }

    /// Returns a handle bound to this provider.
    #[must_use]
    pub fn notifier(&self) -> Notifier {
        Notifier {
            requests: self.issuer.clone(),
            relay: self.relay.clone(),
        }
    }

    /// Delivers the parked notification, if any.
    ///
    /// Only the first call per provider reads the relay; later calls do
    /// nothing, so re-running it can never duplicate a delivery.
    pub fn drain_pending(&mut self) -> Task<Message> {
        if self.drained {
            log::debug!("pending notification already drained for this mount");
            return Task::none();
        }
        self.drained = true;

        match self.relay.drain() {
            Some(record) => {
                log::info!("delivering pending {} notification", record.kind);
                self.add(record.into_notification())
            }
            None => Task::none(),
        }
    }

    /// Applies queued notifier requests in call order.
    pub fn flush(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        while let Ok(notification) = self.requests.try_recv() {
            tasks.push(self.add(notification));
        }
        Task::batch(tasks)
    }

    /// Adds a notification and arms its deadline.
    pub fn add(&mut self, notification: Notification) -> Task<Message> {
        let fired = self.insert(notification);
        Task::future(fired).and_then(|id| Task::done(Message::Expired(id)))
    }

    /// Stores `notification` and returns its deadline future.
    pub(crate) fn insert(
        &mut self,
        notification: Notification,
    ) -> impl Future<Output = Option<NotificationId>> + Send + 'static {
        let duration = notification.duration_or(self.settings.default_duration);
        let (timer, fired) = lifecycle::deadline(notification.id(), duration);
        self.store
            .push(Entry::new(notification, duration, Instant::now()).with_timer(timer));
        fired
    }

    /// Removes a notification right away, skipping the exit transition.
    ///
    /// Removing an absent id is a no-op. Returns whether anything was removed.
    pub fn remove_notification(&mut self, id: NotificationId) -> bool {
        let stored = self.store.remove(id).is_some();
        let before = self.leaving.len();
        self.leaving.retain(|entry| entry.id() != id);
        stored || self.leaving.len() != before
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dismiss(id) => self.begin_exit(id, "dismissed"),
            Message::Expired(id) => self.begin_exit(id, "expired"),
            Message::Sample(id) => {
                self.store.sample(id, Instant::now());
                Task::none()
            }
            Message::Removed(id) => {
                if let Some(pos) = self.leaving.iter().position(|entry| entry.id() == id) {
                    let mut entry = self.leaving.remove(pos);
                    entry.lifecycle_mut().finish();
                    log::debug!("notification {id} exit transition finished");
                }
                Task::none()
            }
        }
    }

    fn begin_exit(&mut self, id: NotificationId, reason: &str) -> Task<Message> {
        let Some(mut entry) = self.store.remove(id) else {
            return Task::none();
        };
        log::debug!("notification {id} {reason}");
        entry.disarm();
        entry.lifecycle_mut().dismiss(Instant::now());

        if self.settings.dismiss_transition.is_zero() {
            entry.lifecycle_mut().finish();
            return Task::none();
        }

        self.leaving.push(entry);
        Task::perform(
            lifecycle::transition_end(id, self.settings.dismiss_transition),
            Message::Removed,
        )
    }

    /// One progress-sampling subscription per stored notification.
    ///
    /// A removed entry no longer yields its subscription, which stops its
    /// sampling.
    pub fn subscription(&self) -> Subscription<Message> {
        let samples = self.settings.progress_samples;
        Subscription::batch(self.store.visible().map(|entry| {
            time::every(entry.lifecycle().sample_interval(samples))
                .with(entry.id())
                .map(|(id, _)| Message::Sample(id))
        }))
    }

    /// Renders the toast overlay.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(self)
    }

    /// Notifications currently in the store, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.store.visible()
    }

    /// Notifications playing their exit transition.
    pub fn leaving(&self) -> impl Iterator<Item = &Entry> {
        self.leaving
            .iter()
            .filter(|entry| entry.lifecycle().phase() == Phase::Dismissing)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.store.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Returns whether this mount already drained the relay.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.drained
    }
}
