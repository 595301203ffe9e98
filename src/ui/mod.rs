// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen exposes `Message`, `Event`, `update` and `view`.
//!
//! # Screens
//!
//! - [`login`] - Credentials form with validation feedback
//! - [`tasks`] - Task dashboard
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system and pending relay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod login;
pub mod notifications;
pub mod tasks;
pub mod theming;
