//! vsext desktop window - iced UI entry point.
//!
//! Build with: cargo build --features iced-ui

use iced::{window, Size};
use vsext::platform;
use vsext::ui::ExtensionsApp;

fn main() -> iced::Result {
    vsext::init_tracing("vsext=info");
    tracing::info!("Starting vsext window on {}", platform::name());

    let window_settings = window::Settings {
        size: Size::new(800.0, 420.0),
        position: window::Position::Centered,
        ..Default::default()
    };

    iced::application("VS Code Extension Manager", ExtensionsApp::update, ExtensionsApp::view)
        .window(window_settings)
        .run_with(ExtensionsApp::new)
}
