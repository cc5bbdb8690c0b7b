//! Interactive terminal UI for `pagestyle`.
//!
//! [`Host`] mounts the [`SettingsPanel`] beside the [`ArticleViewer`] and owns
//! the applied style variables; [`run`] drives it from terminal events. The
//! presentational building blocks live in [`controls`].

pub mod controls;
mod host;
pub mod panel;
mod runtime;
mod theme;
pub mod viewer;

pub use host::{Host, HostAction, MAIN_ID, apply_style_map};
pub use panel::{FormEvent, FormField, SettingsPanel, StyleCallback};
pub use runtime::run;
pub use theme::Theme;
pub use viewer::{ArticleViewer, ViewerStyle};
