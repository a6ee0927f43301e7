//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field (border + value + border)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if field.locked {
        Style::default().fg(Color::Gray)
    } else if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default()
    };

    let display_value = field.display_value();
    let mut spans = if display_value.is_empty() {
        let placeholder = if field.is_select() && is_active {
            format!("◀ {} ▶", field.placeholder)
        } else {
            field.placeholder.clone()
        };
        vec![Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::styled(display_value, value_style)]
    };

    // Selects are cycled, not typed into
    if is_active && !field.is_select() && !field.locked {
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        if field.as_text().is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let marker = if field.is_required() { " *" } else { "" };
    let title = if field.locked {
        format!(" {}{marker} (preenchido pelo CEP) ", field.label)
    } else {
        format!(" {}{marker} ", field.label)
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = &field.error {
        block = block.title_bottom(Line::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
