//! Shirt print preview

use super::base::Dialog;
use crate::state::catalog::Print;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the preview of a print. Images are not drawn; the path is shown instead.
pub fn render_print_preview_dialog(frame: &mut Frame, print: &Print) {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let details = vec![
        Line::from(vec![Span::styled("Estampa: ", label), Span::raw(print.name)]),
        Line::from(vec![
            Span::styled("Imagem: ", label),
            Span::styled(print.image, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    Dialog {
        title: print.name,
        accent: Color::Yellow,
        message: print.description,
        details,
        close_keys: &["Esc", "v"],
        max_width: 64,
    }
    .render(frame);
}
