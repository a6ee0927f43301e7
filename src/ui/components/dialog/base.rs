//! Shared overlay used by the error and print preview dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Columns between the border and the text on each side
const SIDE_PADDING: u16 = 2;

/// A centred modal with a wrapped message, optional detail lines and a close hint
pub struct Dialog<'a> {
    pub title: &'a str,
    /// Border and title colour
    pub accent: Color,
    /// Free text, wrapped to the dialog width. `\n` starts a new paragraph.
    pub message: &'a str,
    /// Pre-styled lines drawn under the message
    pub details: Vec<Line<'a>>,
    /// Keys that dismiss the dialog, shown as "Pressione X ou Y para fechar"
    pub close_keys: &'a [&'a str],
    pub max_width: u16,
}

impl Dialog<'_> {
    pub fn render(self, frame: &mut Frame) {
        let text_width = self.max_width.saturating_sub(2 * SIDE_PADDING + 2).max(1);
        let message = wrap_text(self.message, text_width as usize);

        let mut body: Vec<Line> = message.into_iter().map(Line::from).collect();
        if !self.details.is_empty() {
            body.push(Line::from(""));
            body.extend(self.details);
        }
        if !self.close_keys.is_empty() {
            body.push(Line::from(""));
            body.push(close_hint(self.close_keys));
        }

        let widest = body
            .iter()
            .map(Line::width)
            .max()
            .unwrap_or(0)
            .max(self.title.chars().count() + 2) as u16;
        let width = (widest + 2 * SIDE_PADDING + 2).min(self.max_width);
        // Body plus one blank row above it and the borders
        let height = body.len() as u16 + 3;
        let area = dialog_rect(frame.area(), width, height);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        let text_area = Rect {
            x: inner.x + SIDE_PADDING.min(inner.width / 2),
            y: inner.y + 1.min(inner.height),
            width: inner.width.saturating_sub(2 * SIDE_PADDING),
            height: inner.height.saturating_sub(1),
        };

        frame.render_widget(Clear, area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(body), text_area);
    }
}

/// "Pressione Enter ou Esc para fechar" with the keys highlighted
fn close_hint<'a>(keys: &[&'a str]) -> Line<'a> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::raw("Pressione ")];
    for (idx, key) in keys.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" ou "));
        }
        spans.push(Span::styled(*key, key_style));
    }
    spans.push(Span::raw(" para fechar"));
    Line::from(spans)
}

/// Centre a `width` x `height` box in `area`, shrinking it to fit
fn dialog_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap, counted in characters so accented text measures right
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + 1 + word.chars().count();
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}
