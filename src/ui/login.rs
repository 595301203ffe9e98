// SPDX-License-Identifier: MPL-2.0
//! Login screen.
//!
//! Field errors are reported through the notification API: submitting an
//! invalid form raises one `error` toast per failing field, while live edits
//! go through an [`ErrorLatch`] so typing does not flood the store. A valid
//! submission waits for the simulated authentication round-trip, parks a
//! welcome notification in the relay and asks the shell to navigate.

use crate::app::config::MIN_PASSWORD_LENGTH;
use crate::error::Result;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Kind, Notifier};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, checkbox, text, text_input, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Duration;

pub const CYRILLIC_NOT_ALLOWED: &str = "Only Latin characters are allowed.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Invalid email format.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long.";

pub const LOGIN_SUCCESS_TITLE: &str = "Login Successful.";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Welcome back!";
const LOGIN_SUCCESS_DURATION: Duration = Duration::from_millis(5_000);

/// Form field being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Remembers whether the current validation error was already announced.
///
/// The flag is raised when an error is first reported and lowered as soon as
/// the form becomes valid again, so a persisting error is announced once.
#[derive(Debug, Clone, Default)]
pub struct ErrorLatch {
    shown: bool,
}

impl ErrorLatch {
    /// Feeds the latest validation result. Returns `true` if it should be
    /// announced.
    pub fn observe(&mut self, error: Option<&str>) -> bool {
        match error {
            Some(_) if !self.shown => {
                self.shown = true;
                true
            }
            Some(_) => false,
            None => {
                self.shown = false;
                false
            }
        }
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.shown
    }
}

fn contains_cyrillic(value: &str) -> bool {
    value
        .chars()
        .any(|c| matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'))
}

/// Accepts any whitespace-free run shaped like `local@domain.tld`.
fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// Validates a single field, returning the message to show.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    if contains_cyrillic(value) {
        return Some(CYRILLIC_NOT_ALLOWED);
    }
    match field {
        Field::Email if value.trim().is_empty() => Some(EMAIL_REQUIRED),
        Field::Email if !looks_like_email(value) => Some(EMAIL_INVALID),
        Field::Password if value.trim().is_empty() => Some(PASSWORD_REQUIRED),
        Field::Password if value.chars().count() < MIN_PASSWORD_LENGTH => {
            Some(PASSWORD_TOO_SHORT)
        }
        _ => None,
    }
}

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    password: String,
    show_password: bool,
    email_error: Option<&'static str>,
    password_error: Option<&'static str>,
    submitting: bool,
    latch: ErrorLatch,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Email => self.email_error,
            Field::Password => self.password_error,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn live_error(&self) -> Option<&'static str> {
        self.email_error.or(self.password_error)
    }
}

/// Messages emitted by the login screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility(bool),
    Submit,
    /// The authentication round-trip completed.
    Authenticated,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Credentials passed validation; run the authentication round-trip.
    Authenticate,
    /// The welcome notification is parked; show the dashboard.
    LoggedIn,
}

/// Process a login message and return the corresponding event.
pub fn update(state: &mut State, message: Message, notifier: &Notifier) -> Result<Event> {
    match message {
        Message::EmailChanged(value) => {
            state.email_error = live_check(&value);
            state.email = value;
            announce_live_error(state, notifier)?;
        }
        Message::PasswordChanged(value) => {
            state.password_error = live_check(&value);
            state.password = value;
            announce_live_error(state, notifier)?;
        }
        Message::TogglePasswordVisibility(show) => state.show_password = show,
        Message::Submit => {
            if state.submitting {
                return Ok(Event::None);
            }
            state.email_error = validate_field(Field::Email, &state.email);
            state.password_error = validate_field(Field::Password, &state.password);

            if state.email_error.is_none() && state.password_error.is_none() {
                state.submitting = true;
                log::info!("credentials accepted, authenticating");
                return Ok(Event::Authenticate);
            }

            for error in [state.email_error, state.password_error].into_iter().flatten() {
                notifier.add_notification(Kind::Error, None, error, None)?;
            }
        }
        Message::Authenticated => {
            state.submitting = false;
            notifier.set_pending_notification(
                Kind::Success,
                Some(LOGIN_SUCCESS_TITLE),
                LOGIN_SUCCESS_MESSAGE,
                Some(LOGIN_SUCCESS_DURATION),
            )?;
            return Ok(Event::LoggedIn);
        }
    }
    Ok(Event::None)
}

/// While typing, only the script check runs; emptiness and shape are left
/// for submission.
fn live_check(value: &str) -> Option<&'static str> {
    contains_cyrillic(value).then_some(CYRILLIC_NOT_ALLOWED)
}

fn announce_live_error(state: &mut State, notifier: &Notifier) -> Result<()> {
    let error = state.live_error();
    if state.latch.observe(error) {
        if let Some(error) = error {
            notifier.add_notification(Kind::Error, None, error, None)?;
        }
    }
    Ok(())
}

/// Render the login screen.
#[must_use]
pub fn view(state: &State) -> Element<'_, Message> {
    let title = Text::new("Authorization").size(typography::TITLE_LG);

    let email_input = text_input("Enter your email address", &state.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let password_input = text_input("Enter your password", &state.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit)
        .secure(!state.show_password)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let show_password = checkbox(state.show_password)
        .label("Show password")
        .on_toggle(Message::TogglePasswordVisibility);

    let label = if state.submitting { "Signing in..." } else { "LOGIN" };
    let mut submit = button(
        Container::new(text(label).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT));
    if !state.submitting {
        submit = submit.on_press(Message::Submit);
    }

    let form = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(title)
        .push(email_input)
        .push(field_hint(state.email_error))
        .push(password_input)
        .push(field_hint(state.password_error))
        .push(show_password)
        .push(submit);

    Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn field_hint<'a>(error: Option<&'static str>) -> Element<'a, Message> {
    Text::new(error.unwrap_or(""))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).error),
        })
        .into()
}
