//! Custom styles for vsext UI widgets.

use super::theme::AppTheme;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color};

/// Style for the main container.
pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.background)),
        text_color: Some(theme.text),
        ..Default::default()
    }
}

/// Style for the path inputs.
pub fn path_input(theme: &AppTheme, focused: bool) -> text_input::Style {
    let border_color = if focused {
        AppTheme::with_alpha(theme.accent, 0.5)
    } else {
        theme.border
    };

    text_input::Style {
        background: Background::Color(AppTheme::with_alpha(Color::WHITE, 0.05)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: theme.subtext,
        placeholder: theme.subtext,
        value: theme.text,
        selection: AppTheme::with_alpha(theme.accent, 0.3),
    }
}

/// Style for the action buttons.
pub fn action_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.45,
        button::Status::Pressed => 0.6,
        button::Status::Disabled => 0.1,
        button::Status::Active => 0.3,
    };

    button::Style {
        background: Some(Background::Color(AppTheme::with_alpha(theme.accent, alpha))),
        text_color: theme.text,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the command-line help panel.
pub fn help_panel(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.surface)),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
