//! Flat list of every booking for the appointments section.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::store::AppointmentStore;
use crate::ui::create_titled_block;

/// Draw the all-appointments list.
pub fn draw_appointments(f: &mut Frame, app: &mut App, area: Rect) {
    let block = create_titled_block("Все записи", true);

    if app.store.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        let empty =
            Paragraph::new(" Записей пока нет").style(Style::default().fg(Color::Gray));
        f.render_widget(empty, inner);
        return;
    }

    let selected = app.appointment_list_state.selected();
    let items: Vec<ListItem> = app
        .store
        .list()
        .iter()
        .enumerate()
        .map(|(i, appointment)| {
            let is_selected = Some(i) == selected;
            let (prefix, name_style) = if is_selected {
                ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            };

            let mut detail = format!(
                "   {} · {} · {} {} · {} мин",
                appointment.phone,
                appointment.service,
                appointment.date,
                appointment.time,
                appointment.duration_min
            );
            if let Some(notes) = &appointment.notes {
                detail.push_str(" · ");
                detail.push_str(notes);
            }

            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(appointment.client_name.clone(), name_style),
                ]),
                Line::from(Span::styled(detail, Style::default().fg(Color::Gray))),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(80, 80, 120)));

    f.render_stateful_widget(list, area, &mut app.appointment_list_state);
}
