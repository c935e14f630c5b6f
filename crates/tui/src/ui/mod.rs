//! UI module for the TUI.

mod controls;
mod footer;
mod header;
mod layout;
mod sections;

pub use layout::draw_ui;
