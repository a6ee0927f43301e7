//! Jantar Genesis registration page

use super::{draw_form_body, draw_page_frame, draw_panel, split_page, success, SubmitButton};
use crate::app::App;
use crate::state::pricing::{format_brl, ADULT_PRICE, CHILD_PRICE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let page = &app.state.event;
    if let Some(registration) = page.submission.submitted() {
        success::draw_event(frame, area, registration);
        return;
    }

    let (form_area, panel_area) = split_page(area);
    let body = draw_page_frame(
        frame,
        form_area,
        "Jantar Genesis",
        "Faça sua inscrição para este evento especial",
    );
    draw_form_body(
        frame,
        body,
        &page.form,
        &SubmitButton {
            label: "Confirmar Inscrição",
            busy_label: "Processando...",
            busy: page.submission.is_submitting(),
            error: page.submission.error(),
        },
    );

    let Some(panel_area) = panel_area else {
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let tier = |range: &str, price: String| {
        Line::from(vec![
            Span::raw(format!("• {range}: ")),
            Span::styled(price, bold),
        ])
    };
    let mut lines = vec![
        tier("Até 5 anos", "Gratuito".to_string()),
        tier("6 a 12 anos", format_brl(CHILD_PRICE)),
        tier("Acima de 12 anos", format_brl(ADULT_PRICE)),
    ];

    if let Some(pricing) = page.form.preview_pricing() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("💡 {}", pricing.description()),
            Style::default().fg(Color::Yellow),
        ));
    }

    draw_panel(frame, panel_area, "💰 Valores", lines);
}
