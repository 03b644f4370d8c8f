//! Appointment creation dialog.
//!
//! A centered modal over the active section. The Create action renders
//! disabled until every required field is filled; committing while incomplete
//! is a no-op rather than an error.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::constants::ui::{DIALOG_HEIGHT, DIALOG_WIDTH};
use crate::draft::FormField;

/// Draw the creation dialog over the current frame.
pub fn draw_dialog(f: &mut Frame, app: &App) {
    let size = f.size();

    let width = DIALOG_WIDTH.min(size.width.saturating_sub(4));
    let height = DIALOG_HEIGHT.min(size.height.saturating_sub(2));

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            " Создать запись ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // client name
            Constraint::Length(2), // phone
            Constraint::Length(2), // service
            Constraint::Length(2), // time
            Constraint::Length(2), // notes
            Constraint::Min(0),
            Constraint::Length(1), // actions
        ])
        .margin(1)
        .split(area);

    for (i, field) in FormField::all().iter().enumerate() {
        draw_field(f, app, *field, inner[i]);
    }

    draw_actions(f, app, inner[6]);
}

fn draw_field(f: &mut Frame, app: &App, field: FormField, area: Rect) {
    let focused = app.form_focus == field;
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value_line = match field {
        FormField::ClientName => text_value(&app.draft.client_name, "Введите имя", focused),
        FormField::Phone => text_value(&app.draft.phone, "+7 999 123-45-67", focused),
        FormField::Notes => text_value(&app.draft.notes, "Дополнительная информация", focused),
        FormField::Service => {
            let display = app.catalog.find(&app.draft.service).map(|s| {
                format!(
                    "{} ({} мин, {} {})",
                    s.name, s.duration_min, s.price, app.config.currency
                )
            });
            select_value(display, "Выберите услугу", focused)
        }
        FormField::Time => {
            let display = (!app.draft.time.is_empty()).then(|| app.draft.time.clone());
            select_value(display, "Выберите время", focused)
        }
    };

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(format!(" {}", field.label()), label_style)),
        value_line,
    ]);
    f.render_widget(paragraph, area);
}

/// Render a typed value, a cursor marker when focused, or the placeholder.
fn text_value(value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    if value.is_empty() && !focused {
        return Line::from(Span::styled(
            format!("   {placeholder}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let cursor = if focused { "▏" } else { "" };
    Line::from(Span::styled(
        format!("   {value}{cursor}"),
        Style::default().fg(Color::White),
    ))
}

/// Render a select value with cycle arrows when focused.
fn select_value(value: Option<String>, placeholder: &str, focused: bool) -> Line<'static> {
    let (text, style) = match value {
        Some(v) => (v, Style::default().fg(Color::White)),
        None => (placeholder.to_string(), Style::default().fg(Color::DarkGray)),
    };
    if focused {
        Line::from(vec![
            Span::styled("   ◂ ", Style::default().fg(Color::Yellow)),
            Span::styled(text, style),
            Span::styled(" ▸", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(Span::styled(format!("   {text}"), style))
    }
}

fn draw_actions(f: &mut Frame, app: &App, area: Rect) {
    let create_style = if app.draft.is_complete() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        // Disabled until all required fields are filled
        Style::default().fg(Color::DarkGray)
    };

    let actions = Line::from(vec![
        Span::styled(" Отмена (Esc)", Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled("Создать (Enter)", create_style),
    ]);
    f.render_widget(Paragraph::new(actions), area);
}
