//! Camisas Lume order page

use super::{draw_form_body, draw_page_frame, draw_panel, split_page, success, SubmitButton};
use crate::app::App;
use crate::state::catalog::{merchandise_price_label, PRINTS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let page = &app.state.merchandise;
    if let Some(order) = page.submission.submitted() {
        success::draw_merchandise(frame, area, order);
        return;
    }

    let (form_area, panel_area) = split_page(area);
    let body = draw_page_frame(
        frame,
        form_area,
        "Camisas Lume 2026",
        "Adquira sua camisa do Ano de Frutificar",
    );
    draw_form_body(
        frame,
        body,
        &page.form,
        &SubmitButton {
            label: "Finalizar Pedido",
            busy_label: "Processando...",
            busy: page.submission.is_submitting(),
            error: page.submission.error(),
        },
    );

    let Some(panel_area) = panel_area else {
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::styled(
            format!("💰 Valor: {}", merchandise_price_label()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Estampas:", bold),
    ];

    let selected_print = page.form.selected_print();
    for print in PRINTS {
        let is_selected = selected_print.is_some_and(|p| p.id == print.id);
        let marker = if is_selected { "● " } else { "○ " };
        let style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(print.name, style),
        ]));
        lines.push(Line::styled(
            format!("  {}", print.description),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if page.form.has_selection() {
        let order = page.form.order();
        lines.push(Line::from(""));
        lines.push(Line::styled("📋 Resumo do Pedido:", bold));
        lines.push(Line::from(format!(
            "Tamanho: {}",
            order.size.map_or("-", |s| s.name)
        )));
        lines.push(Line::from(format!(
            "Estampa: {}",
            order.print.map_or("-", |p| p.name)
        )));
        lines.push(Line::from(vec![
            Span::styled("Valor Total: ", bold),
            Span::raw(order.price_label()),
        ]));
    }

    draw_panel(frame, panel_area, "Pedido", lines);
}
