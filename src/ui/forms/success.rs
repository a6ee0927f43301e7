//! Views shown once a page was submitted

use crate::platform::COPY_SHORTCUT;
use crate::state::{first_name, EventRegistration, MerchandiseOrder, SignupRow};
use crate::ui::layout::ACCENT;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn heading(text: String) -> Line<'static> {
    Line::styled(
        text,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )
}

fn labeled(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.into()),
    ])
}

fn payment_lines(link: &str, price_label: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from("Use o link abaixo para realizar o pagamento:"),
        Line::styled(
            format!("💳 Pagar {price_label}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            link.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Line::styled(
            format!("{COPY_SHORTCUT} copia o link do Mercado Pago"),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

fn draw_card(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let block = Block::default()
        .title(" ✔ Sucesso ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

pub fn draw_signup(frame: &mut Frame, area: Rect, row: &SignupRow) {
    let mut lines = vec![
        Line::from(""),
        heading(format!("Que bom ter você aqui, {}!", first_name(&row.name))),
        Line::from(""),
        Line::from("Bem-vindo à família Lume! 🎉"),
        Line::from("Seu cadastro foi realizado com sucesso e já faz parte da nossa comunidade."),
        Line::styled(
            "Entraremos em contato em breve para conhecê-lo melhor!",
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        labeled("Nome", row.name.as_str()),
        labeled("Telefone", row.phone.as_str()),
    ];
    if !row.city.is_empty() {
        lines.push(labeled(
            "Cidade",
            format!("{} - {}", row.city, row.region),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "[n] Enviar Outro Formulário",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    draw_card(frame, area, lines);
}

pub fn draw_merchandise(frame: &mut Frame, area: Rect, order: &MerchandiseOrder) {
    let price = order.price_label();
    let mut lines = vec![
        Line::from(""),
        heading(format!("Obrigado, {}!", first_name(&order.row.name))),
        Line::from(""),
        Line::from("Seu pedido foi realizado com sucesso! 👕"),
        Line::from(""),
        Line::styled(
            "📋 Resumo do Pedido:",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        labeled("Tamanho", order.size.map_or("-", |s| s.name)),
        labeled("Estampa", order.print.map_or("-", |p| p.name)),
        labeled("Valor", price.as_str()),
    ];
    lines.extend(payment_lines(order.payment_link(), &price));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "ℹ️ Após o pagamento, entraremos em contato para confirmar a entrega.",
        Style::default().fg(Color::Blue),
    ));
    draw_card(frame, area, lines);
}

pub fn draw_event(frame: &mut Frame, area: Rect, registration: &EventRegistration) {
    let pricing = &registration.pricing;
    let mut lines = vec![
        Line::from(""),
        heading(format!("Obrigado, {}!", first_name(&registration.row.name))),
        Line::from(""),
        Line::from("Sua inscrição para o Jantar Genesis foi realizada com sucesso! ✨"),
        Line::from(""),
        labeled("Nome", registration.row.name.as_str()),
        labeled("Telefone", registration.row.phone.as_str()),
        labeled("Idade", registration.row.age.to_string()),
        Line::from(""),
        Line::styled(
            "Valor da inscrição:",
            Style::default().fg(Color::Gray),
        ),
        Line::styled(
            pricing.description(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ];

    match pricing.payment_link {
        Some(link) if !pricing.is_free() => {
            lines.extend(payment_lines(link, &pricing.price_label()));
        }
        _ => {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "🎉 Sua inscrição é gratuita!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(
                "Não é necessário realizar pagamento.",
                Style::default().fg(Color::Green),
            ));
        }
    }
    draw_card(frame, area, lines);
}
