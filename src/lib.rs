//! Library exports for the drag-and-drop widgets and the sample app.
/// Application directory helpers.
pub mod app_dirs;
/// Sample app configuration stored as TOML.
pub mod config;
/// Long-press drag and drop widgets.
pub mod dragdrop;
/// Sample screen built on the drag-and-drop widgets.
pub mod egui_app;
/// Tracing setup for the sample binary.
pub mod logging;
