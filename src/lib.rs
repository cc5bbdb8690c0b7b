//! Core crate exports for the `pagestyle` article viewer and its settings
//! panel.
//!
//! The root module re-exports the style catalog and the UI entry points so
//! that embedders can mount the panel without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod article;
mod error;
pub mod logging;
pub mod page;
pub mod params;
pub mod ui;

pub use article::Article;
pub use error::{Error, Result};
pub use page::{Element, Page, PointerEvents, PointerPress, ROOT_ID};
pub use params::{Dimension, StyleMap, StyleOption, StyleSelection};
pub use ui::{Host, HostAction, SettingsPanel, Theme, run};
