//! Under-construction landing page with the page menu

use super::components::{render_menu_button, BUTTON_HEIGHT};
use super::layout::ACCENT;
use crate::app::App;
use crate::state::catalog::INSTAGRAM_URL;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const MENU_WIDTH: u16 = 40;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let menu_height = BUTTON_HEIGHT * View::MENU.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),              // Top padding (flex)
            Constraint::Length(5),           // Message
            Constraint::Length(1),           // Gap
            Constraint::Length(menu_height), // Menu
            Constraint::Min(0),              // Bottom padding (flex)
        ])
        .split(area);

    let message = vec![
        Line::from(Span::styled(
            "Estamos preparando algo especial!",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("O site da igreja Batista Lume está em construção."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Novidades no Instagram: "),
            Span::styled(INSTAGRAM_URL, Style::default().fg(Color::Magenta)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    draw_menu(frame, chunks[3], app);
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let width = MENU_WIDTH.min(area.width);
    let menu_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(View::MENU.map(|_| Constraint::Length(BUTTON_HEIGHT)))
        .split(menu_area);

    for (idx, view) in View::MENU.iter().enumerate() {
        render_menu_button(
            frame,
            rows[idx],
            &(idx + 1).to_string(),
            view.title(),
            app.state.menu_index == idx,
        );
    }
}
