// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::ui::login;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Provider;
use crate::ui::tasks;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub login: &'a login::State,
    pub tasks: &'a tasks::State,
    pub notifications: &'a Provider,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Login => login::view(ctx.login).map(Message::Login),
        Screen::Dashboard => tasks::view(ctx.tasks).map(Message::Tasks),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let theme_toggle = Container::new(
        button(text(format!("Theme: {}", ctx.theme_mode.label())).size(typography::CAPTION))
            .style(button::secondary)
            .on_press(Message::CycleTheme),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Left)
    .align_y(alignment::Vertical::Bottom);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(theme_toggle)
        .push(ctx.notifications.view().map(Message::Notification))
        .into()
}
