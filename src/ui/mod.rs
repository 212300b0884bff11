//! Desktop front end.
//!
//! `state` holds the framework-independent view model; the iced window that
//! renders it is only built with the `iced-ui` feature.

pub mod state;

#[cfg(feature = "iced-ui")]
pub mod app;
#[cfg(feature = "iced-ui")]
pub mod style;
#[cfg(feature = "iced-ui")]
pub mod theme;

#[cfg(feature = "iced-ui")]
pub use app::ExtensionsApp;
pub use state::{PanelState, Status, ViewState};
