//! Week grid and summary tiles for the schedule section.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::constants::ui::{GRID_ROW_HEIGHT, TIME_COLUMN_WIDTH};
use crate::schedule::{appointment_at, TIME_SLOTS};
use crate::store::AppointmentStore;
use crate::ui::create_titled_block;

/// Draw the week/time grid with the derived summary tiles underneath.
pub fn draw_schedule(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(area);

    draw_week_grid(f, app, chunks[0]);
    draw_summary_tiles(f, app, chunks[1]);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_week_grid(f: &mut Frame, app: &App, area: Rect) {
    let locale = app.config.chrono_locale();
    let today = Local::now().date_naive();
    let days = app.week_window().days();
    let appointments = app.store.list();

    // Header: time column label plus one cell per weekday
    let mut header_cells = vec![Cell::from(Span::styled(
        "Время",
        Style::default().fg(Color::Gray),
    ))];
    for day in &days {
        let weekday = day.format_localized("%a", locale).to_string();
        let date = day.format_localized("%e %b", locale).to_string();
        let style = if *day == today {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        header_cells.push(Cell::from(Text::from(vec![
            Line::from(Span::styled(weekday, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(date.trim().to_string(), style)),
        ])));
    }
    let header = Row::new(header_cells).height(GRID_ROW_HEIGHT);

    // One row per slot; cells match on (date, slot)
    let rows: Vec<Row> = TIME_SLOTS
        .iter()
        .map(|slot| {
            let mut cells = vec![Cell::from(Span::styled(
                slot.clone(),
                Style::default().fg(Color::Gray),
            ))];
            for day in &days {
                let cell = appointment_at(appointments, *day, slot).map_or_else(
                    || Cell::from(""),
                    |appointment| {
                        Cell::from(Text::from(vec![
                            Line::from(Span::styled(
                                appointment.client_name.clone(),
                                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                            )),
                            Line::from(Span::styled(
                                format!("{} · {} мин", appointment.service, appointment.duration_min),
                                Style::default().fg(Color::Gray),
                            )),
                        ]))
                    },
                );
                cells.push(cell);
            }
            Row::new(cells).height(GRID_ROW_HEIGHT)
        })
        .collect();

    let mut widths = vec![Constraint::Length(TIME_COLUMN_WIDTH)];
    widths.extend(std::iter::repeat(Constraint::Ratio(1, 7)).take(days.len()));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(create_titled_block("Календарь записей", true));

    f.render_widget(table, area);
}

fn draw_summary_tiles(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let tiles = [
        (app.day_appointment_count().to_string(), "Записей за день"),
        (app.day_free_slots().to_string(), "Свободных слотов"),
        (
            format!("{} {}", app.day_revenue(), app.config.currency),
            "Выручка за день",
        ),
    ];

    for (chunk, (value, caption)) in chunks.iter().zip(tiles) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(*chunk);
        f.render_widget(block, *chunk);

        let tile = Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {value}"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {caption}"),
                Style::default().fg(Color::Gray),
            )),
        ]);
        f.render_widget(tile, inner);
    }
}
