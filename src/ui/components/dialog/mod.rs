//! Dialog components for TUI

mod base;
mod error_dialog;
mod print_preview_dialog;

pub use error_dialog::render_error_dialog;
pub use print_preview_dialog::render_print_preview_dialog;
