// SPDX-License-Identifier: MPL-2.0
//! `taskdeck` is a small task manager built with the Iced GUI framework.
//!
//! Its notification subsystem shows transient toasts that remove themselves
//! after a duration, and can carry one notification across a screen change
//! through a durable single-slot relay.

pub mod app;
pub mod error;
pub mod ui;
