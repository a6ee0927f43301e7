//! Error dialog component

use super::base::Dialog;
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    Dialog {
        title: "Erro",
        accent: Color::Red,
        message: error_message,
        details: Vec::new(),
        close_keys: &["Enter", "Esc"],
        max_width: 60,
    }
    .render(frame);
}
