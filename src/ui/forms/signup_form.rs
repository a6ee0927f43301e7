//! Sign-up ("Formulário") page

use super::{draw_form_body, draw_page_frame, draw_panel, split_page, success, SubmitButton};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let page = &app.state.signup;
    if let Some(row) = page.submission.submitted() {
        success::draw_signup(frame, area, row);
        return;
    }

    let (form_area, panel_area) = split_page(area);
    let body = draw_page_frame(
        frame,
        form_area,
        "Bem vindo",
        "Preencha seus dados para se conectar conosco",
    );
    draw_form_body(
        frame,
        body,
        &page.form,
        &SubmitButton {
            label: "Enviar Cadastro",
            busy_label: "Enviando...",
            busy: page.submission.is_submitting(),
            error: page.submission.error(),
        },
    );

    if let Some(panel_area) = panel_area {
        let address = if page.form.is_address_resolved() {
            Line::styled(
                "✔ Endereço preenchido pelo CEP",
                Style::default().fg(Color::Green),
            )
        } else {
            Line::styled(
                "Digite o CEP para preencher o endereço automaticamente.",
                Style::default().fg(Color::Gray),
            )
        };
        let lines = vec![
            address,
            Line::from(""),
            Line::from("Campos com * são obrigatórios."),
            Line::from("Data no formato DD/MM/AAAA."),
        ];
        draw_panel(frame, panel_area, "Endereço", lines);
    }
}
