//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AppState, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Accent used for titles, matching the church's orange
pub const ACCENT: Color = Color::Rgb(0xef, 0x8e, 0x2e);

/// Create the main layout: header, content, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header with the page title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view;
    let mut spans = vec![Span::styled(
        " Lume ",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if view.is_form_view() {
        spans.push(Span::styled("› ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            view.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // In-flight indicator
    if app.state.is_submitting(app.state.current_view) {
        spans.push(Span::styled("◌ enviando  ", Style::default().fg(Color::Yellow)));
    }

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(&app.state),
        Style::default().fg(Color::Gray),
    ));

    // Status message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:sair ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(state: &AppState) -> String {
    if state.print_preview.is_some() {
        return "Esc:fechar".to_string();
    }
    match state.current_view {
        View::Landing => {
            format!("1/2/3:abrir  ↑/↓:navegar  Enter:abrir  {COPY_SHORTCUT}:copiar Instagram  q:sair")
        }
        View::Signup if state.signup.submission.is_submitted() => {
            "n:enviar outro  Esc:voltar".to_string()
        }
        View::Merchandise if state.merchandise.submission.is_submitted() => {
            format!("{COPY_SHORTCUT}:copiar link  Esc:voltar")
        }
        View::Event => match state.event.submission.submitted() {
            Some(registration) if registration.pricing.payment_link.is_some() => {
                format!("{COPY_SHORTCUT}:copiar link  Esc:voltar")
            }
            Some(_) => "Esc:voltar".to_string(),
            None => form_hints(),
        },
        View::Merchandise => format!("{}  v:ver estampa", form_hints()),
        View::Signup => form_hints(),
    }
}

fn form_hints() -> String {
    format!("Tab:próximo  ←/→:opção  {SUBMIT_SHORTCUT}:enviar  Esc:voltar")
}
