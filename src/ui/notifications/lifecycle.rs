// SPDX-License-Identifier: MPL-2.0
//! Per-notification lifecycle: `Visible` -> `Dismissing` -> `Removed`.
//!
//! Removal is driven by exactly one deadline per notification. The deadline
//! runs as a future whose [`Timer`] guard is owned by the store entry, so
//! dropping the entry cancels the deadline. Progress sampling only feeds the
//! countdown bar and never removes anything.

use super::notification::NotificationId;
use crate::app::config::MIN_SAMPLE_INTERVAL;
use futures_util::future::{self, AbortHandle};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// In the store, counting down.
    Visible,
    /// Left the store; playing the exit transition.
    Dismissing,
    /// Gone for good.
    Removed,
}

/// Timing state of one notification.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    started_at: Instant,
    duration: Duration,
    /// Last sampled fraction of lifetime remaining, in `[0.0, 1.0]`.
    progress: f32,
    dismissed_at: Option<Instant>,
}

impl Lifecycle {
    /// Starts a lifecycle at `now` lasting `duration`.
    #[must_use]
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            phase: Phase::Visible,
            started_at: now,
            duration,
            progress: 1.0,
            dismissed_at: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Instant at which the notification expires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.started_at + self.duration
    }

    #[must_use]
    pub fn dismissed_at(&self) -> Option<Instant> {
        self.dismissed_at
    }

    /// Fraction of the lifetime remaining at `now`, from 1.0 down to 0.0.
    #[must_use]
    pub fn fraction_remaining(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (1.0 - elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Records a progress sample and returns the value to display.
    ///
    /// The displayed value never goes back up, even if samples arrive out of
    /// order.
    pub fn sample(&mut self, now: Instant) -> f32 {
        if self.phase == Phase::Visible {
            self.progress = self.progress.min(self.fraction_remaining(now));
        }
        self.progress
    }

    /// Last sampled progress value.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Interval between progress samples for `samples` samples per lifetime.
    #[must_use]
    pub fn sample_interval(&self, samples: u32) -> Duration {
        (self.duration / samples.max(1)).max(MIN_SAMPLE_INTERVAL)
    }

    /// Starts the exit transition. Returns `false` if already leaving.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Visible {
            return false;
        }
        self.phase = Phase::Dismissing;
        self.dismissed_at = Some(now);
        true
    }

    /// Marks the lifecycle as terminated.
    pub fn finish(&mut self) {
        self.phase = Phase::Removed;
    }
}

/// Scoped ownership of a pending deadline.
///
/// Dropping the guard aborts the deadline future, so a removed entry can
/// never be touched by a late callback.
#[derive(Debug)]
pub struct Timer {
    handle: AbortHandle,
}

impl Timer {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }

    /// Returns a handle that observes (and can abort) the same deadline.
    #[must_use]
    pub fn observer(&self) -> AbortHandle {
        self.handle.clone()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Arms the deadline for `id`, firing after `after`.
///
/// The returned future resolves to `Some(id)` when the deadline passes and to
/// `None` as soon as the [`Timer`] is dropped or cancelled.
pub fn deadline(
    id: NotificationId,
    after: Duration,
) -> (Timer, impl Future<Output = Option<NotificationId>> + Send + 'static) {
    // The sleep is built on first poll so arming works outside a runtime.
    let (sleep, handle) = future::abortable(async move { tokio::time::sleep(after).await });
    let fired = async move { sleep.await.ok().map(|()| id) };
    (Timer { handle }, fired)
}

/// Resolves once the exit transition of `id` is over.
pub async fn transition_end(id: NotificationId, window: Duration) -> NotificationId {
    tokio::time::sleep(window).await;
    id
}
