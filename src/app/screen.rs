// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::fmt;
use std::str::FromStr;

/// Screens the user can navigate between. Every navigation remounts the
/// notification provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Screen::Login => "login",
            Screen::Dashboard => "dashboard",
        })
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "login" => Ok(Screen::Login),
            "dashboard" => Ok(Screen::Dashboard),
            other => Err(format!("unknown screen '{other}' (expected login or dashboard)")),
        }
    }
}
