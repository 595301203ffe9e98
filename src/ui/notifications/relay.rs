// SPDX-License-Identifier: MPL-2.0
//! Pending notification relay.
//!
//! A single durable slot that carries one notification across a navigation
//! boundary, where the in-memory store is torn down. Writes overwrite the
//! slot (last write wins); draining reads and clears it. This is not a
//! queue: only the most recent intent survives.

use super::notification::{Kind, Notification};
use crate::app::config::{MAX_NOTIFICATION_DURATION_MS, MIN_NOTIFICATION_DURATION_MS};
use crate::app::storage::Storage;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Well-known storage key of the pending slot.
pub const PENDING_KEY: &str = "pendingNotification";

/// Serialized form of a pending notification.
///
/// Layout: `{ "type": kind, "title"?: string, "message": string, "duration"?: ms }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNotification {
    #[serde(rename = "type", alias = "kind")]
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
    #[serde(
        default,
        rename = "duration",
        alias = "durationMs",
        deserialize_with = "deserialize_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,
}

impl PendingNotification {
    #[must_use]
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
            duration_ms: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).ok();
        self
    }

    /// Builds the notification to enqueue, with a fresh id.
    #[must_use]
    pub fn into_notification(self) -> Notification {
        let mut notification = Notification::new(self.kind, self.message);
        if let Some(title) = self.title {
            notification = notification.with_title(title);
        }
        if let Some(duration) = self.duration_ms.and_then(stored_duration) {
            notification = notification.with_duration(duration);
        }
        notification
    }

    fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(Error::from)
    }

    fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| Error::Storage(err.to_string()))
    }
}

/// Accepts any JSON number of milliseconds.
///
/// Fractions are rounded and huge values saturate. Negative or non-finite
/// values read as absent.
fn deserialize_duration_ms<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = Option::<f64>::deserialize(deserializer)?;
    // `as` saturates float to integer conversions.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = millis
        .filter(|ms| ms.is_finite() && *ms >= 0.0)
        .map(|ms| ms.round() as u64);
    Ok(millis)
}

/// Lifetime of a stored record.
///
/// Zero means "use the default"; anything else is clamped into the
/// supported range so a stored record cannot pin a toast on screen.
fn stored_duration(millis: u64) -> Option<Duration> {
    (millis > 0).then(|| {
        Duration::from_millis(
            millis.clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS),
        )
    })
}

/// One-slot mailbox over a client storage.
#[derive(Clone)]
pub struct Relay {
    storage: Arc<dyn Storage>,
    key: String,
}

impl std::fmt::Debug for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay").field("key", &self.key).finish()
    }
}

impl Relay {
    /// Creates a relay using the well-known [`PENDING_KEY`].
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_key(storage, PENDING_KEY)
    }

    /// Creates a relay on a custom key.
    pub fn with_key(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Stores `record`, overwriting any unread one.
    pub fn write(&self, record: &PendingNotification) -> Result<()> {
        let encoded = record.encode()?;
        self.storage.set(&self.key, &encoded)?;
        log::debug!("pending {} notification parked", record.kind);
        Ok(())
    }

    /// Reads and clears the slot.
    ///
    /// Unreadable or malformed content counts as empty; the slot is cleared
    /// either way.
    pub fn drain(&self) -> Option<PendingNotification> {
        match self.try_drain() {
            Ok(record) => record,
            Err(error) => {
                log::warn!("Discarding pending notification: {error}");
                if let Err(error) = self.storage.remove(&self.key) {
                    log::warn!("Failed to clear pending notification slot: {error}");
                }
                None
            }
        }
    }

    /// Reads and clears the slot, reporting decoding failures.
    pub fn try_drain(&self) -> Result<Option<PendingNotification>> {
        self.storage
            .take(&self.key)?
            .map(|raw| PendingNotification::decode(&raw))
            .transpose()
    }

    /// Reads the slot without clearing it.
    pub fn peek(&self) -> Result<Option<PendingNotification>> {
        self.storage
            .get(&self.key)?
            .map(|raw| PendingNotification::decode(&raw))
            .transpose()
    }
}
