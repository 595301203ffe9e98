// SPDX-License-Identifier: MPL-2.0
//! Task dashboard.
//!
//! An in-memory task list. Every change is confirmed with a toast through the
//! notification API.

use crate::error::Result;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Kind, Notifier};
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, checkbox, scrollable, text, text_input, Column, Container, Row, Space, Text,
};
use iced::{alignment, Element, Length, Theme};

pub const TASK_CREATED: &str = "Task created successfully!";
pub const TASK_TITLE_REQUIRED: &str = "Task title is required.";
pub const TASK_COMPLETED: &str = "Task completed!";
pub const TASK_REOPENED: &str = "Task marked as incomplete.";
pub const TASK_STARRED: &str = "Task added to favorites!";
pub const TASK_UNSTARRED: &str = "Task removed from favorites.";
pub const TASK_DELETED: &str = "Task deleted successfully!";
pub const TASK_UPDATED: &str = "Task updated successfully!";
pub const TASK_FORM_INVALID: &str = "Please fix the errors in the form.";

/// Identifier of a task within one dashboard.
pub type TaskId = u64;

/// A single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub starred: bool,
}

/// A task whose title is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub id: TaskId,
    pub title: String,
}

/// Dashboard state.
#[derive(Debug, Clone, Default)]
pub struct State {
    tasks: Vec<TaskItem>,
    draft: String,
    editing: Option<Edit>,
    next_id: TaskId,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&TaskItem> {
        self.tasks.iter().find(|task| task.id == id)
    }

    #[must_use]
    pub fn editing(&self) -> Option<&Edit> {
        self.editing.as_ref()
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut TaskItem> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}

/// Messages emitted by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    Create,
    ToggleCompleted(TaskId),
    ToggleStarred(TaskId),
    Delete(TaskId),
    StartEdit(TaskId),
    EditChanged(String),
    SaveEdit,
    CancelEdit,
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Logout,
}

/// Process a dashboard message and return the corresponding event.
///
/// Operations on an unknown task id change nothing and stay silent.
pub fn update(state: &mut State, message: Message, notifier: &Notifier) -> Result<Event> {
    match message {
        Message::DraftChanged(value) => state.draft = value,
        Message::Create => {
            let title = state.draft.trim();
            if title.is_empty() {
                notifier.add_notification(Kind::Error, None, TASK_TITLE_REQUIRED, None)?;
                return Ok(Event::None);
            }
            state.next_id += 1;
            let task = TaskItem {
                id: state.next_id,
                title: title.to_string(),
                completed: false,
                starred: false,
            };
            log::debug!("task {} created", task.id);
            state.tasks.push(task);
            state.draft.clear();
            notifier.add_notification(Kind::Success, None, TASK_CREATED, None)?;
        }
        Message::ToggleCompleted(id) => {
            if let Some(task) = state.get_mut(id) {
                task.completed = !task.completed;
                let message = if task.completed {
                    TASK_COMPLETED
                } else {
                    TASK_REOPENED
                };
                notifier.add_notification(Kind::Info, None, message, None)?;
            }
        }
        Message::ToggleStarred(id) => {
            if let Some(task) = state.get_mut(id) {
                task.starred = !task.starred;
                let message = if task.starred {
                    TASK_STARRED
                } else {
                    TASK_UNSTARRED
                };
                notifier.add_notification(Kind::Success, None, message, None)?;
            }
        }
        Message::Delete(id) => {
            let before = state.tasks.len();
            state.tasks.retain(|task| task.id != id);
            if state.tasks.len() != before {
                if state.editing.as_ref().is_some_and(|edit| edit.id == id) {
                    state.editing = None;
                }
                log::debug!("task {id} deleted");
                notifier.add_notification(Kind::Success, None, TASK_DELETED, None)?;
            }
        }
        Message::StartEdit(id) => {
            if let Some(title) = state.get(id).map(|task| task.title.clone()) {
                state.editing = Some(Edit { id, title });
            }
        }
        Message::EditChanged(value) => {
            if let Some(edit) = state.editing.as_mut() {
                edit.title = value;
            }
        }
        Message::SaveEdit => save_edit(state, notifier)?,
        Message::CancelEdit => state.editing = None,
        Message::Logout => return Ok(Event::Logout),
    }
    Ok(Event::None)
}

/// Applies the open edit. An empty title keeps the editor open.
fn save_edit(state: &mut State, notifier: &Notifier) -> Result<()> {
    let Some(edit) = state.editing.take() else {
        return Ok(());
    };
    let title = edit.title.trim().to_string();
    if title.is_empty() {
        state.editing = Some(edit);
        return notifier.add_notification(Kind::Error, None, TASK_FORM_INVALID, None);
    }
    match state.get_mut(edit.id) {
        Some(task) => {
            task.title = title;
            log::debug!("task {} updated", edit.id);
            notifier.add_notification(Kind::Success, None, TASK_UPDATED, None)
        }
        None => Ok(()),
    }
}

/// Render the dashboard.
#[must_use]
pub fn view(state: &State) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("My tasks").size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(button(text("Log out").size(typography::BODY)).on_press(Message::Logout));

    let composer = Row::new()
        .spacing(spacing::XS)
        .push(
            text_input("What needs to be done?", &state.draft)
                .on_input(Message::DraftChanged)
                .on_submit(Message::Create)
                .padding(spacing::XS)
                .size(typography::BODY_LG)
                .width(Length::Fill),
        )
        .push(
            button(text("Add").size(typography::BODY_LG))
                .height(Length::Fixed(sizing::INPUT_HEIGHT))
                .on_press(Message::Create),
        );

    let list: Element<'_, Message> = if state.tasks.is_empty() {
        Text::new("No tasks yet.")
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::for_theme(theme).text_secondary),
            })
            .into()
    } else {
        Column::with_children(
            state
                .tasks
                .iter()
                .map(|task| task_row(task, state.editing.as_ref())),
        )
            .spacing(spacing::XS)
            .into()
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::DASHBOARD_WIDTH))
        .push(header)
        .push(composer)
        .push(scrollable(list).height(Length::Fill));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn task_row<'a>(task: &'a TaskItem, editing: Option<&'a Edit>) -> Element<'a, Message> {
    let id = task.id;
    if let Some(edit) = editing.filter(|edit| edit.id == id) {
        return edit_row(edit);
    }
    let starred = task.starred;

    let star = button(text(if starred { "★" } else { "☆" }).size(typography::TITLE_SM).style(
        move |theme: &Theme| {
            let colors = ColorScheme::for_theme(theme);
            text::Style {
                color: Some(if starred { colors.star } else { colors.text_secondary }),
            }
        },
    ))
    .style(button::text)
    .on_press(Message::ToggleStarred(id));

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            checkbox(task.completed)
                .label(task.title.as_str())
                .on_toggle(move |_| Message::ToggleCompleted(id))
                .width(Length::Fill),
        )
        .push(star)
        .push(
            button(text("Edit").size(typography::BODY))
                .style(button::secondary)
                .on_press(Message::StartEdit(id)),
        )
        .push(
            button(text("Delete").size(typography::BODY))
                .style(button::danger)
                .on_press(Message::Delete(id)),
        )
        .into()
}

fn edit_row(edit: &Edit) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text_input("Task title", &edit.title)
                .on_input(Message::EditChanged)
                .on_submit(Message::SaveEdit)
                .padding(spacing::XS)
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(button(text("Save").size(typography::BODY)).on_press(Message::SaveEdit))
        .push(
            button(text("Cancel").size(typography::BODY))
                .style(button::secondary)
                .on_press(Message::CancelEdit),
        )
        .into()
}
