//! Window views.

pub mod main_window;
