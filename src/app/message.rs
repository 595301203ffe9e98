// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::ui::login;
use crate::ui::notifications;
use crate::ui::tasks;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    Tasks(tasks::Message),
    Notification(notifications::Message),
    SwitchScreen(Screen),
    /// Switch to the next theme mode and save it.
    CycleTheme,
    /// Close the most recent toast (Escape).
    DismissLatest,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TASKDECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for the pending notification slot).
    /// Takes precedence over `TASKDECK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Keep client storage in memory only.
    pub ephemeral: bool,
    /// Screen shown at startup.
    pub screen: Screen,
}
