//! Main vsext window using iced.

use std::path::Path;

use super::state::{PanelState, Status, ViewState};
use super::style;
use super::theme::AppTheme;
use crate::config::Config;
use crate::guide::{command_line_guide, Shell};
use crate::manager::ExtensionManager;
use crate::platform;

use iced::widget::{button, checkbox, column, container, row, scrollable, text, text_input, Column};
use iced::window;
use iced::{Alignment, Element, Font, Length, Task};

/// The main window state.
pub struct ExtensionsApp {
    manager: ExtensionManager,
    theme: AppTheme,
    state: ViewState,
    guide: String,
}

/// Messages that the window can handle.
#[derive(Debug, Clone)]
pub enum Message {
    ExportPathChanged(String),
    InstallPathChanged(String),
    Export,
    Install,
    PanelToggled(bool),
    Quit,
}

impl ExtensionsApp {
    /// Load config and resolve the launcher once for the whole session.
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let locator = platform::current();
        let manager = ExtensionManager::discover(&config, locator.as_ref(), None);

        let mut state = ViewState::default();
        if let Err(e) = manager.launcher() {
            state.fatal = Some(e.to_string());
        }
        if let Ok(cwd) = std::env::current_dir() {
            state.suggest_export_path(&cwd, &config.export.file_name);
        }

        let guide = command_line_guide(
            config.editor.flavor,
            &config.export.file_name,
            Shell::native(),
        );

        let app = Self {
            manager,
            theme: AppTheme::by_name(&config.appearance.theme),
            state,
            guide,
        };

        (app, Task::none())
    }

    /// Update the window state based on a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ExportPathChanged(path) => self.state.export_path = path,

            Message::InstallPathChanged(path) => self.state.install_path = path,

            Message::Export => {
                let result = self.manager.export(Path::new(self.state.export_path.trim()));
                self.state.status = Status::from_export(result);
            }

            Message::Install => {
                let list_file = self.state.install_path.trim().to_string();
                let state = &mut self.state;
                let result = self
                    .manager
                    .install(Path::new(&list_file), |event| state.record_progress(event));
                self.state.status = Status::from_install(result);
            }

            Message::PanelToggled(expanded) => {
                self.state.panel = PanelState::from_expanded(expanded);
            }

            Message::Quit => return window::get_latest().and_then(window::close),
        }

        Task::none()
    }

    /// Create the view for the window.
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.state.fatal {
            Some(ref message) => self.build_fatal(message),
            None => self.build_main(),
        };

        container(content)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| style::main_container(&self.theme))
            .into()
    }

    // --- Private methods ---

    fn build_fatal<'a>(&'a self, message: &'a str) -> Element<'a, Message> {
        column![
            text("Editor not found").size(20).color(self.theme.error),
            text(message).size(14),
            button(text("Quit"))
                .on_press(Message::Quit)
                .padding([8, 16])
                .style(|_, status| style::action_button(&self.theme, status)),
        ]
        .spacing(12)
        .into()
    }

    fn build_main(&self) -> Element<'_, Message> {
        let export = self.build_path_row(
            "Export path",
            &self.state.export_path,
            Message::ExportPathChanged,
            "Export list",
            Message::Export,
        );
        let install = self.build_path_row(
            "Extension list",
            &self.state.install_path,
            Message::InstallPathChanged,
            "Install",
            Message::Install,
        );

        let mut content = Column::new()
            .spacing(12)
            .push(text("Export extensions").size(18))
            .push(export)
            .push(text("Install extensions").size(18))
            .push(install);

        if let Some(status) = self.build_status() {
            content = content.push(status);
        }

        if !self.state.install_log.is_empty() {
            let lines = self
                .state
                .install_log
                .iter()
                .fold(Column::new().spacing(2), |col, line| {
                    col.push(text(line.as_str()).size(13).color(self.theme.subtext))
                });
            content = content.push(scrollable(lines).height(Length::Fixed(80.0)));
        }

        content = content.push(
            checkbox("Show command-line usage", self.state.panel.is_expanded())
                .on_toggle(Message::PanelToggled),
        );

        if self.state.panel.is_expanded() {
            let panel = container(scrollable(
                text(self.guide.as_str()).font(Font::MONOSPACE).size(13),
            ))
            .padding(10)
            .width(Length::Fill)
            .style(|_| style::help_panel(&self.theme));
            content = content.push(panel);
        }

        content.into()
    }

    fn build_path_row<'a>(
        &'a self,
        label: &'a str,
        value: &'a str,
        on_input: fn(String) -> Message,
        action: &'a str,
        on_press: Message,
    ) -> Element<'a, Message> {
        let input = text_input("", value)
            .on_input(on_input)
            .on_submit(on_press.clone())
            .padding(8)
            .style(|_, status| {
                style::path_input(&self.theme, status == text_input::Status::Focused)
            });

        row![
            text(label).width(Length::Fixed(120.0)),
            input,
            button(text(action))
                .on_press(on_press)
                .padding([8, 16])
                .style(|_, status| style::action_button(&self.theme, status)),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    }

    fn build_status(&self) -> Option<Element<'_, Message>> {
        let (message, color) = match self.state.status {
            Status::Idle => return None,
            Status::Success(ref m) => (m, self.theme.success),
            Status::Error(ref m) => (m, self.theme.error),
        };
        Some(text(message.as_str()).size(14).color(color).into())
    }
}
