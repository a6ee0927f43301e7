//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_menu_button, render_submit_button, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_print_preview_dialog};
