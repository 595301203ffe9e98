// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent, a dismiss button and a
//! countdown bar. Toasts playing their exit transition are drawn faded and
//! without the dismiss button.

use super::manager::Entry;
use super::provider::{Message, Provider};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Resolution of the countdown bar.
const PROGRESS_STEPS: u16 = 1000;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(entry: &Entry, leaving: bool) -> Element<'_, Message> {
        let notification = entry.notification();
        let kind = notification.kind();
        let accent_color = kind.color();
        let fade = if leaving {
            opacity::LEAVING
        } else {
            opacity::OPAQUE
        };

        let badge = Container::new(Text::new(kind.glyph()).size(typography::BODY_LG))
            .width(Length::Fixed(sizing::ICON_MD))
            .align_x(alignment::Horizontal::Center)
            .style(move |_theme: &Theme| container::Style {
                text_color: Some(Color {
                    a: fade,
                    ..accent_color
                }),
                ..Default::default()
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            body = body.push(Text::new(title).size(typography::TITLE_SM).style(
                move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, fade)),
                },
            ));
        }
        body = body.push(
            Text::new(notification.message())
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, fade)),
                }),
        );

        // Layout: [badge] [title/message] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(badge)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );
        if !leaving {
            let dismiss_button = button(Text::new("✕").size(typography::CAPTION))
                .on_press(Message::Dismiss(entry.id()))
                .padding(spacing::XXS)
                .style(dismiss_button_style);
            content = content.push(dismiss_button);
        }

        let card = Column::new()
            .spacing(spacing::XS)
            .push(content)
            .push(countdown_bar(entry.lifecycle().progress(), accent_color, fade));

        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, fade))
            .into()
    }

    /// Renders every stored toast, then the ones leaving.
    ///
    /// Toasts stack in the top-right corner, oldest on top.
    pub fn view_overlay(provider: &Provider) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = provider
            .visible()
            .map(|entry| Self::view(entry, false))
            .chain(provider.leaving().map(|entry| Self::view(entry, true)))
            .collect();

        if toasts.is_empty() {
            return Space::new().into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

/// Splits `progress` into filled and empty portions of the bar.
fn progress_portions(progress: f32) -> (u16, u16) {
    let filled = (progress.clamp(0.0, 1.0) * f32::from(PROGRESS_STEPS)).round() as u16;
    (filled, PROGRESS_STEPS - filled)
}

fn countdown_bar<'a>(progress: f32, accent: Color, fade: f32) -> Element<'a, Message> {
    let (filled, empty) = progress_portions(progress);
    let mut bar = Row::new().height(Length::Fixed(sizing::PROGRESS_HEIGHT));

    if filled > 0 {
        bar = bar.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(iced::Background::Color(Color { a: fade, ..accent })),
                    border: iced::Border {
                        radius: radius::SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }
    if empty > 0 {
        bar = bar.push(
            Container::new(Space::new())
                .width(Length::FillPortion(empty))
                .height(Length::Fill),
        );
    }
    bar.into()
}

fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, fade: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(bg_color, fade))),
        border: iced::Border {
            color: faded(accent_color, fade),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
    }
}
