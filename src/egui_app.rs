//! Sample screen showing the drag-and-drop widgets on a list of people.
pub mod ui;
pub mod view_model;
