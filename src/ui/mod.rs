//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the application's
//! terminal-based user interface using ratatui.

mod appointments;
mod dialog;
mod schedule;
mod sections;

pub use appointments::draw_appointments;
pub use dialog::draw_dialog;
pub use schedule::draw_schedule;
pub use sections::{draw_clients, draw_services, draw_settings};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Section};
use crate::constants::ui::{HEADER_HEIGHT, SIDEBAR_WIDTH};

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3), // Command/status bar at bottom
        ])
        .split(f.size());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(chunks[0]);

    draw_sidebar(f, app, body[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
        .split(body[1]);

    draw_header(f, app, main[0]);

    match app.section {
        Section::Schedule => draw_schedule(f, app, main[1]),
        Section::Appointments => draw_appointments(f, app, main[1]),
        Section::Clients => draw_clients(f, app, main[1]),
        Section::Services => draw_services(f, app, main[1]),
        Section::Settings => draw_settings(f, app, main[1]),
    }

    if app.dialog_open {
        draw_dialog(f, app);
    }

    // Draw status/info modal (blocking)
    if let Some(status) = &app.status_message {
        draw_status_message(f, status);
        return;
    }
    // Draw error message if present (blocking)
    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
        return;
    }

    if app.show_help {
        draw_help_modal(f, app);
    }

    draw_command_bar(f, app, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " BookMaster ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // subtitle
            Constraint::Min(1),    // navigation
            Constraint::Length(2), // profile footer
        ])
        .split(inner);

    let subtitle = Paragraph::new(" Личный кабинет").style(Style::default().fg(Color::Gray));
    f.render_widget(subtitle, chunks[0]);

    let nav_items: Vec<ListItem> = Section::all()
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let is_active = *section == app.section;
            let (prefix, style) = if is_active {
                ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Gray)),
                Span::styled(section.title(), style),
            ]))
        })
        .collect();
    f.render_widget(List::new(nav_items), chunks[1]);

    let profile = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", app.config.profile_name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", app.config.profile_role),
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(profile, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let date_line = app
        .selected_date
        .format_localized("%e %B %Y", app.config.chrono_locale())
        .to_string();

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            app.section.title(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            date_line.trim().to_string(),
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(header, inner);
}

fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_global_command_mode {
        "Command"
    } else {
        "Commands/Status"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(title, Style::default().fg(Color::Yellow)));

    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1) // Account for the border
        .split(area)[0];

    if app.is_global_command_mode {
        let command = Paragraph::new(format!(" :{}", app.global_command_buffer))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(command, inner_area);
        #[allow(clippy::cast_possible_truncation)]
        f.set_cursor(
            inner_area.left() + app.global_command_buffer.len() as u16 + 2,
            inner_area.top(),
        );
    } else {
        let help_text = if app.dialog_open {
            create_help_text(&[
                ("Tab/↑↓", "Поле"),
                ("←/→", "Выбор"),
                ("Enter", "Создать"),
                ("Esc", "Отмена"),
            ])
        } else {
            match app.section {
                Section::Schedule => create_help_text(&[
                    ("←/→", "Неделя"),
                    ("t", "Сегодня"),
                    ("n", "Новая запись"),
                    ("1-5", "Разделы"),
                    (":q", "Выход"),
                ]),
                Section::Appointments => create_help_text(&[
                    ("↑/↓", "Навигация"),
                    ("n", "Новая запись"),
                    ("1-5", "Разделы"),
                    (":q", "Выход"),
                ]),
                _ => create_help_text(&[
                    ("n", "Новая запись"),
                    ("1-5", "Разделы"),
                    ("?", "Помощь"),
                    (":q", "Выход"),
                ]),
            }
        };

        let status_bar =
            Paragraph::new(Line::from(help_text)).style(Style::default().fg(Color::Gray));
        f.render_widget(status_bar, inner_area);
    }
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        text.push(Span::raw(format!(": {description}")));
        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

// Draw an error message overlay
fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();

    let width = 40.min(size.width.saturating_sub(4));
    let height = 5;

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            "Ошибка",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[1]);

    let hint = Paragraph::new("Esc — закрыть")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hint, inner_area[2]);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_status_message(f: &mut Frame, message: &str) {
    use unicode_width::UnicodeWidthStr;
    let size = f.size();

    // Calculate box width (max 80% of screen, min 40)
    let max_width = (size.width as usize * 80) / 100;
    let width = message.width().saturating_add(6).min(max_width).max(40) as u16;

    let inner_width = width.saturating_sub(4) as usize;
    let msg_lines = (message.width() + inner_width - 1) / inner_width.max(1);
    let height = (msg_lines as u16 + 4).min(size.height.saturating_sub(4));

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            "Готово",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Esc — закрыть")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hint, inner_area[1]);
}

// Draw the help modal with keybindings
fn draw_help_modal(f: &mut Frame, app: &App) {
    let size = f.size();

    let width = 56.min(size.width.saturating_sub(4));
    let height = 20.min(size.height.saturating_sub(4));

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            " Помощь — клавиши ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1)
        .split(area)[0];

    let help_lines = build_help_content(app);

    let help_text: Vec<Line> = help_lines
        .iter()
        .map(|(key, desc, is_header)| {
            if *is_header {
                Line::from(vec![Span::styled(
                    *key,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{key:>12}"),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(*desc, Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: true });
    f.render_widget(paragraph, inner_area);
}

// Build help content based on current mode
fn build_help_content(app: &App) -> Vec<(&'static str, &'static str, bool)> {
    let mut lines = vec![
        ("── Общие ──", "", true),
        ("F1 / ?", "Показать помощь", false),
        ("1-5", "Выбрать раздел", false),
        ("Tab", "Следующий раздел", false),
        (":", "Командный режим", false),
        (":q / :quit", "Выход", false),
        (":today", "Текущая дата", false),
        (":new", "Новая запись", false),
        ("Esc", "Назад / закрыть", false),
        ("", "", false),
    ];

    if app.dialog_open {
        lines.extend([
            ("── Создание записи ──", "", true),
            ("Tab / ↑↓", "Перейти между полями", false),
            ("←/→", "Выбрать услугу или время", false),
            ("Enter", "Создать (когда поля заполнены)", false),
            ("Esc", "Отмена", false),
        ]);
    } else {
        match app.section {
            Section::Schedule => {
                lines.extend([
                    ("── Расписание ──", "", true),
                    ("←/→ or h/l", "Предыдущая / следующая неделя", false),
                    ("t", "Вернуться к сегодня", false),
                    ("n", "Новая запись", false),
                ]);
            }
            Section::Appointments => {
                lines.extend([
                    ("── Записи ──", "", true),
                    ("↑/↓ or j/k", "Навигация по списку", false),
                    ("n", "Новая запись", false),
                ]);
            }
            _ => {}
        }
    }

    lines.push(("", "", false));
    lines.push(("Esc, F1 или ? — закрыть", "", true));

    lines
}
