// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the login screen and the
//! task dashboard.
//!
//! The `App` owns the client storage and the mounted notification provider.
//! Switching screens replaces the provider with a fresh mount, which is when
//! the pending notification relay gets drained. Screens only ever receive a
//! `Notifier`.

pub mod config;
mod message;
pub mod paths;
mod screen;
pub mod storage;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::ui::login;
use crate::ui::notifications::{self, Entry, Kind, Notification, Provider, Relay};
use crate::ui::tasks;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use storage::{FileStorage, MemoryStorage, Storage};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

pub const LOGOUT_MESSAGE: &str = "You have been logged out.";

/// Root Iced application state.
pub struct App {
    screen: Screen,
    config: Config,
    /// Directory `settings.toml` is read from and written to.
    config_dir: Option<PathBuf>,
    /// Client storage shared by every provider mount.
    storage: Arc<dyn Storage>,
    notification_settings: notifications::Settings,
    /// Provider of the current screen.
    notifications: Provider,
    login: login::State,
    tasks: tasks::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Opens the client storage selected by `flags`.
///
/// Falls back to memory when no data directory is available, so the relay
/// still works within this process.
fn open_storage(flags: &Flags) -> Arc<dyn Storage> {
    if flags.ephemeral {
        log::info!("using in-memory client storage");
        return Arc::new(MemoryStorage::new());
    }
    let opened = match &flags.data_dir {
        Some(dir) => Ok(FileStorage::new(dir)),
        None => FileStorage::open_default(),
    };
    match opened {
        Ok(storage) => {
            log::info!("client storage at {}", storage.dir().display());
            Arc::new(storage)
        }
        Err(error) => {
            log::warn!("{error}; falling back to in-memory client storage");
            Arc::new(MemoryStorage::new())
        }
    }
}

impl App {
    /// Initializes application state and mounts the first provider.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let storage = open_storage(&flags);
        let notification_settings = config.notifications.settings();

        let (provider, mount_task) =
            Provider::mount(Relay::new(storage.clone()), notification_settings);

        let mut app = App {
            screen: flags.screen,
            config,
            config_dir,
            storage,
            notification_settings,
            notifications: provider,
            login: login::State::new(),
            tasks: tasks::State::new(),
        };

        let mut tasks = vec![mount_task];
        if let Some(warning) = config_warning {
            tasks.push(app.notifications.add(Notification::warning(warning)));
        }

        log::info!("starting on the {} screen", app.screen);
        (app, Task::batch(tasks).map(Message::Notification))
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Login => "Sign in - TaskDeck".to_string(),
            Screen::Dashboard => {
                let open = self
                    .tasks
                    .tasks()
                    .iter()
                    .filter(|task| !task.completed)
                    .count();
                if open == 0 {
                    "TaskDeck".to_string()
                } else {
                    format!("({open}) TaskDeck")
                }
            }
        }
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_notification_subscription(&self.notifications),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => {
                self.notifications.update(message).map(Message::Notification)
            }
            Message::DismissLatest => {
                let latest = self.notifications.visible().last().map(Entry::id);
                match latest {
                    Some(id) => self
                        .notifications
                        .update(notifications::Message::Dismiss(id))
                        .map(Message::Notification),
                    None => Task::none(),
                }
            }
            Message::SwitchScreen(screen) => self.navigate(screen),
            Message::CycleTheme => {
                self.config.general.theme_mode = self.config.general.theme_mode.next();
                log::info!("theme set to {}", self.config.general.theme_mode.label());
                self.persist_preferences()
            }
            Message::Login(message) => self.handle_login_message(message),
            Message::Tasks(message) => self.handle_tasks_message(message),
        }
    }

    fn handle_login_message(&mut self, message: login::Message) -> Task<Message> {
        let notifier = self.notifications.notifier();
        match login::update(&mut self.login, message, &notifier) {
            Ok(login::Event::None) => self.flush_notifications(),
            Ok(login::Event::Authenticate) => {
                let latency = Duration::from_millis(config::LOGIN_LATENCY_MS);
                Task::batch([
                    self.flush_notifications(),
                    Task::perform(
                        async move { tokio::time::sleep(latency).await },
                        |()| Message::Login(login::Message::Authenticated),
                    ),
                ])
            }
            Ok(login::Event::LoggedIn) => self.navigate(Screen::Dashboard),
            Err(error) => {
                log::error!("login screen could not notify: {error}");
                Task::none()
            }
        }
    }

    fn handle_tasks_message(&mut self, message: tasks::Message) -> Task<Message> {
        let notifier = self.notifications.notifier();
        match tasks::update(&mut self.tasks, message, &notifier) {
            Ok(tasks::Event::None) => self.flush_notifications(),
            Ok(tasks::Event::Logout) => {
                if let Err(error) =
                    notifier.set_pending_notification(Kind::Info, None, LOGOUT_MESSAGE, None)
                {
                    log::warn!("logout notice not parked: {error}");
                }
                self.navigate(Screen::Login)
            }
            Err(error) => {
                log::error!("dashboard could not notify: {error}");
                Task::none()
            }
        }
    }

    /// Writes the current preferences to `settings.toml`.
    fn persist_preferences(&mut self) -> Task<Message> {
        match config::save_with_override(&self.config, self.config_dir.clone()) {
            Ok(()) => Task::none(),
            Err(error) => {
                log::warn!("Failed to save config: {error}");
                self.notifications
                    .add(Notification::warning(config::CONFIG_SAVE_WARNING))
                    .map(Message::Notification)
            }
        }
    }

    fn flush_notifications(&mut self) -> Task<Message> {
        self.notifications.flush().map(Message::Notification)
    }

    /// Shows `screen` with fresh screen state and a fresh provider mount.
    fn navigate(&mut self, screen: Screen) -> Task<Message> {
        log::info!("navigating from {} to {screen}", self.screen);
        self.screen = screen;
        match screen {
            Screen::Login => self.login = login::State::new(),
            Screen::Dashboard => self.tasks = tasks::State::new(),
        }

        let (provider, task) = Provider::mount(
            Relay::new(self.storage.clone()),
            self.notification_settings,
        );
        self.notifications = provider;
        task.map(Message::Notification)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            theme_mode: self.config.general.theme_mode,
            login: &self.login,
            tasks: &self.tasks,
            notifications: &self.notifications,
        })
    }
}
