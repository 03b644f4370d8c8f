//! The services listing and the placeholder sections.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::create_titled_block;

/// Draw the service catalog listing.
pub fn draw_services(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .catalog
        .services()
        .iter()
        .map(|service| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("  {:20}", service.name),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>4} минут", service.duration_min),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>8} {}", service.price, app.config.currency),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(create_titled_block("Список услуг", true));
    f.render_widget(list, area);
}

/// Draw the client-base placeholder.
pub fn draw_clients(f: &mut Frame, _app: &mut App, area: Rect) {
    let block = create_titled_block("База клиентов", true);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let placeholder =
        Paragraph::new(" Раздел в разработке").style(Style::default().fg(Color::Gray));
    f.render_widget(placeholder, inner);
}

/// Draw the settings section with the loaded profile values.
pub fn draw_settings(f: &mut Frame, app: &mut App, area: Rect) {
    let block = create_titled_block("Настройки профиля", true);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = [
        ("Имя", app.config.profile_name.clone()),
        ("Специализация", app.config.profile_role.clone()),
        ("Локаль", app.config.locale.clone()),
        ("Валюта", app.config.currency.clone()),
        (
            "Версия",
            format!("{} {}", app.config.app_name(), app.config.app_version()),
        ),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!(" {label:16}"),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(value.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    let mut text = lines;
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        " Раздел в разработке",
        Style::default().fg(Color::Gray),
    )));

    f.render_widget(Paragraph::new(text), inner);
}
