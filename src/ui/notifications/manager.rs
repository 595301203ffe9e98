// SPDX-License-Identifier: MPL-2.0
//! Notification store.
//!
//! The `Manager` is the ordered collection of notifications currently shown.
//! Entries are kept in insertion order (oldest first) and are only ever
//! appended or removed; a stored record is never modified.

use super::lifecycle::{Lifecycle, Timer};
use super::notification::{Notification, NotificationId};
use std::time::Duration;
use tokio::time::Instant;

/// One stored notification with its timing state.
#[derive(Debug)]
pub struct Entry {
    notification: Notification,
    lifecycle: Lifecycle,
    /// Owns the pending deadline; dropped with the entry.
    timer: Option<Timer>,
}

impl Entry {
    /// Creates an entry whose lifecycle starts at `now`.
    #[must_use]
    pub fn new(notification: Notification, duration: Duration, now: Instant) -> Self {
        Self {
            notification,
            lifecycle: Lifecycle::start(now, duration),
            timer: None,
        }
    }

    /// Attaches the deadline guard, replacing (and cancelling) any previous one.
    #[must_use]
    pub fn with_timer(mut self, timer: Timer) -> Self {
        self.timer = Some(timer);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.notification.id()
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub(crate) fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    #[must_use]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Drops the deadline guard, cancelling the pending deadline.
    pub fn disarm(&mut self) {
        self.timer = None;
    }
}

/// Ordered collection of visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    entries: Vec<Entry>,
}

impl Manager {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Identical messages are not merged.
    pub fn push(&mut self, entry: Entry) -> NotificationId {
        let id = entry.id();
        log::debug!(
            "notification {id} added ({}, {:?})",
            entry.notification.kind(),
            entry.lifecycle.duration()
        );
        self.entries.push(entry);
        id
    }

    /// Removes the entry with `id`.
    ///
    /// Returns `None` and leaves the store untouched if no such entry exists.
    pub fn remove(&mut self, id: NotificationId) -> Option<Entry> {
        let pos = self.entries.iter().position(|entry| entry.id() == id)?;
        log::debug!("notification {id} removed");
        Some(self.entries.remove(pos))
    }

    /// Records a progress sample for `id` and returns the displayed value.
    pub fn sample(&mut self, id: NotificationId, now: Instant) -> Option<f32> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id() == id)
            .map(|entry| entry.lifecycle.sample(now))
    }

    /// Returns the stored entries in insertion order.
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry, cancelling their deadlines.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::lifecycle;
    use super::*;

    fn entry(notification: Notification, duration_ms: u64) -> Entry {
        Entry::new(
            notification,
            Duration::from_millis(duration_ms),
            Instant::now(),
        )
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn visible_preserves_insertion_order_regardless_of_duration() {
        let mut manager = Manager::new();
        let durations = [5_000, 100, 2_500, 60_000, 100];
        let ids: Vec<_> = durations
            .iter()
            .enumerate()
            .map(|(i, ms)| manager.push(entry(Notification::info(format!("n{i}")), *ms)))
            .collect();

        let seen: Vec<_> = manager.visible().map(Entry::id).collect();
        assert_eq!(seen, ids);
    }

    #[test]
    fn identical_messages_are_not_deduplicated() {
        let mut manager = Manager::new();
        let first = manager.push(entry(Notification::error("X"), 5_000));
        let second = manager.push(entry(Notification::error("X"), 5_000));

        assert_ne!(first, second);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut manager = Manager::new();
        let keep = manager.push(entry(Notification::info("keep"), 5_000));
        let drop_me = manager.push(entry(Notification::info("drop"), 5_000));

        assert!(manager.remove(drop_me).is_some());
        assert!(manager.remove(drop_me).is_none());
        assert_eq!(manager.len(), 1);
        assert!(manager.contains(keep));
    }

    #[test]
    fn remove_unknown_id_leaves_store_unchanged() {
        let mut manager = Manager::new();
        manager.push(entry(Notification::info("a"), 5_000));
        manager.push(entry(Notification::info("b"), 5_000));
        let before: Vec<_> = manager.visible().map(Entry::id).collect();

        assert!(manager.remove(NotificationId::new()).is_none());

        let after: Vec<_> = manager.visible().map(Entry::id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn removing_entry_cancels_its_timer() {
        let mut manager = Manager::new();
        let notification = Notification::success("saved");
        let (timer, _fired) = lifecycle::deadline(notification.id(), Duration::from_secs(5));
        let observer = timer.observer();
        let id = manager.push(entry(notification, 5_000).with_timer(timer));

        drop(manager.remove(id));
        assert!(observer.is_aborted());
    }

    #[test]
    fn clear_cancels_all_timers() {
        let mut manager = Manager::new();
        let mut observers = Vec::new();
        for i in 0..3 {
            let notification = Notification::info(format!("n{i}"));
            let (timer, _fired) = lifecycle::deadline(notification.id(), Duration::from_secs(5));
            observers.push(timer.observer());
            manager.push(entry(notification, 5_000).with_timer(timer));
        }

        manager.clear();
        assert!(manager.is_empty());
        assert!(observers.iter().all(|observer| observer.is_aborted()));
    }

    #[test]
    fn sample_unknown_id_is_none() {
        let mut manager = Manager::new();
        assert!(manager.sample(NotificationId::new(), Instant::now()).is_none());
    }
}
