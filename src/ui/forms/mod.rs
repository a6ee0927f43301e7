//! Form rendering module
//!
//! This module contains UI components for rendering the form pages:
//! - `field_renderer`: Field rendering utilities
//! - `signup_form`: "Formulário" sign-up
//! - `merchandise_form`: Camisas Lume order
//! - `event_form`: Jantar Genesis registration
//! - `success`: Views shown once a page was submitted

mod event_form;
mod field_renderer;
mod merchandise_form;
mod signup_form;
mod success;

pub use event_form::draw as draw_event;
pub use merchandise_form::draw as draw_merchandise;
pub use signup_form::draw as draw_signup;

use super::components::{render_submit_button, BUTTON_HEIGHT};
use super::layout::ACCENT;
use crate::state::Form;
use field_renderer::{draw_field, FIELD_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::ops::Range;

/// Width of the info panel next to a form
const SIDE_PANEL_WIDTH: u16 = 38;

/// Label and state of a form's submit button
pub struct SubmitButton<'a> {
    pub label: &'a str,
    pub busy_label: &'a str,
    pub busy: bool,
    /// Failure of the last attempt, shown under the button
    pub error: Option<&'a str>,
}

/// Split a page into form and info panel. Narrow terminals get the form only.
fn split_page(area: Rect) -> (Rect, Option<Rect>) {
    if area.width < SIDE_PANEL_WIDTH * 2 {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                  // Form area
            Constraint::Length(SIDE_PANEL_WIDTH), // Info panel
        ])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

/// Draw the bordered page frame with heading and subtitle, returning the inner area
fn draw_page_frame(frame: &mut Frame, area: Rect, heading: &str, subtitle: &str) -> Rect {
    let block = Block::default()
        .title(Line::styled(
            format!(" {heading} "),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Min(0),    // Body
        ])
        .margin(1)
        .split(inner);
    frame.render_widget(
        Paragraph::new(subtitle).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );
    chunks[1]
}

/// Draw an info panel with a title and free-form lines
fn draw_panel(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Draw every field plus the submit button, scrolled so the focus stays visible
fn draw_form_body(frame: &mut Frame, area: Rect, form: &impl Form, submit: &SubmitButton) {
    let fields = form.fields();
    let rows = fields.len() + 1;
    let active = form.active_field();
    let capacity = (area.height / FIELD_HEIGHT).max(1) as usize;
    let window = visible_window(rows, active, capacity);

    let constraints: Vec<Constraint> = window
        .clone()
        .map(|row| {
            if row < fields.len() {
                Constraint::Length(FIELD_HEIGHT)
            } else {
                Constraint::Length(BUTTON_HEIGHT)
            }
        })
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, row) in window.clone().enumerate() {
        let is_active = row == active;
        match fields.get(row) {
            Some(field) => draw_field(frame, chunks[slot], field, is_active),
            None => render_submit_button(
                frame,
                chunks[slot],
                submit.label,
                submit.busy_label,
                is_active,
                submit.busy,
            ),
        }
    }

    if let Some(error) = submit.error {
        frame.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Left)
                .wrap(Wrap { trim: true }),
            chunks[window.len()],
        );
    }
}

/// Rows to draw out of `rows` so that `active` is inside a window of `capacity`
fn visible_window(rows: usize, active: usize, capacity: usize) -> Range<usize> {
    if rows <= capacity {
        return 0..rows;
    }
    let start = active
        .saturating_sub(capacity.saturating_sub(1))
        .min(rows - capacity);
    start..start + capacity
}
