// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

use std::time::Duration;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default display lifetime of a notification that does not specify one.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5_000;

/// Shortest lifetime a notification can be configured or requested with.
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 100;

/// Longest lifetime a notification can be requested with.
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

/// Default length of the exit transition after a dismissal or expiry.
pub const DEFAULT_DISMISS_TRANSITION_MS: u64 = 300;

/// Maximum exit transition length.
pub const MAX_DISMISS_TRANSITION_MS: u64 = 2_000;

/// Default number of progress samples taken across a notification lifetime.
pub const DEFAULT_PROGRESS_SAMPLES: u32 = 100;

/// Minimum number of progress samples.
pub const MIN_PROGRESS_SAMPLES: u32 = 1;

/// Maximum number of progress samples.
pub const MAX_PROGRESS_SAMPLES: u32 = 1_000;

/// Sampling never runs faster than this, whatever the lifetime.
pub const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(10);

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Artificial latency of the sign-in request.
pub const LOGIN_LATENCY_MS: u64 = 1_000;

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS > 0);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS >= MIN_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);

    assert!(DEFAULT_DISMISS_TRANSITION_MS <= MAX_DISMISS_TRANSITION_MS);

    assert!(MIN_PROGRESS_SAMPLES > 0);
    assert!(DEFAULT_PROGRESS_SAMPLES >= MIN_PROGRESS_SAMPLES);
    assert!(DEFAULT_PROGRESS_SAMPLES <= MAX_PROGRESS_SAMPLES);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_duration_defaults_are_valid() {
        assert_eq!(DEFAULT_NOTIFICATION_DURATION_MS, 5_000);
        assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    }

    #[test]
    fn progress_samples_default_to_one_hundred() {
        assert_eq!(DEFAULT_PROGRESS_SAMPLES, 100);
    }

    #[test]
    fn transition_is_shorter_than_default_lifetime() {
        assert!(DEFAULT_DISMISS_TRANSITION_MS < DEFAULT_NOTIFICATION_DURATION_MS);
    }
}
