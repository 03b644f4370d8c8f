//! End-to-end booking flow driven through key events.
//!
//! Exercises the same dispatch path the terminal loop uses, without a
//! rendering environment: open the dialog, fill the draft, commit, and check
//! what the grid and the store observe.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use bookmaster::app::{App, Section};
use bookmaster::config::Config;
use bookmaster::draft::Draft;
use bookmaster::schedule::{appointment_at, TIME_SLOTS};
use bookmaster::store::{AppointmentStore, InMemoryStore};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Monday used as the fixed reference date for all flows.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn empty_app() -> App {
    App::with_store(Config::default(), Box::new(InMemoryStore::new()), monday())
}

#[test]
fn booking_appears_in_grid_on_the_selected_day() {
    let mut app = empty_app();

    // Move to the next week, then book; the appointment must carry that date.
    app.handle_key(key(KeyCode::Right));
    let booked_day = app.selected_date;
    assert_eq!(booked_day, monday() + chrono::Days::new(7));

    app.handle_key(key(KeyCode::Char('n')));
    type_str(&mut app, "Ольга Козлова");
    app.handle_key(key(KeyCode::Tab));
    type_str(&mut app, "+7 999 345-67-89");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Right)); // Стрижка
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Right)); // 09:00
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.store.len(), 1);
    let placed = appointment_at(app.store.list(), booked_day, "09:00");
    assert_eq!(placed.map(|a| a.client_name.as_str()), Some("Ольга Козлова"));

    // The same slot a week earlier stays empty: placement is date-aware.
    assert!(appointment_at(app.store.list(), monday(), "09:00").is_none());
}

#[test]
fn worked_example_commits_with_catalog_duration() {
    let mut app = empty_app();

    app.handle_key(key(KeyCode::Char('n')));
    type_str(&mut app, "Ann");
    app.handle_key(key(KeyCode::Tab));
    type_str(&mut app, "123");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Right)); // Стрижка (60 мин)
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Right)); // 09:00
    app.handle_key(key(KeyCode::Right)); // 10:00
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.store.len(), 1);
    let created = &app.store.list()[0];
    assert_eq!(created.client_name, "Ann");
    assert_eq!(created.phone, "123");
    assert_eq!(created.service, "Стрижка");
    assert_eq!(created.time, "10:00");
    assert_eq!(created.duration_min, 60);
    assert_eq!(app.draft, Draft::default());

    // The confirmation overlay blocks input until dismissed.
    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.section, Section::Schedule);
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.section, Section::Appointments);
}

#[test]
fn incomplete_draft_keeps_dialog_open_and_store_untouched() {
    let mut app = empty_app();

    app.handle_key(key(KeyCode::Char('n')));
    type_str(&mut app, "Ann");
    app.handle_key(key(KeyCode::Tab));
    type_str(&mut app, "123");
    // Service and time never selected
    app.handle_key(key(KeyCode::Enter));

    assert!(app.dialog_open);
    assert!(app.store.is_empty());
    assert!(app.status_message.is_none());
}

#[test]
fn cancelling_mid_flow_discards_everything() {
    let mut app = empty_app();

    app.handle_key(key(KeyCode::Char('n')));
    type_str(&mut app, "Ann");
    app.handle_key(key(KeyCode::Tab));
    type_str(&mut app, "123");
    app.handle_key(key(KeyCode::Esc));

    assert!(!app.dialog_open);
    assert!(app.store.is_empty());
    assert_eq!(app.draft, Draft::default());

    // A fresh dialog starts from empty defaults
    app.handle_key(key(KeyCode::Char('n')));
    assert_eq!(app.draft, Draft::default());
}

#[test]
fn section_tour_leaves_data_alone() {
    let mut app = App::with_store(
        Config::default(),
        Box::new(InMemoryStore::with_samples(monday())),
        monday(),
    );
    let before = app.store.len();

    for n in ['2', '3', '4', '5', '1'] {
        app.handle_key(key(KeyCode::Char(n)));
    }
    assert_eq!(app.section, Section::Schedule);
    assert_eq!(app.store.len(), before);
    assert_eq!(app.draft, Draft::default());
}

#[test]
fn time_cycling_walks_the_fixed_slots() {
    let mut app = empty_app();

    app.handle_key(key(KeyCode::Char('n')));
    app.handle_key(key(KeyCode::Tab)); // phone
    app.handle_key(key(KeyCode::Tab)); // service
    app.handle_key(key(KeyCode::Tab)); // time

    // Cycling left from an empty selection lands on the last slot.
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.draft.time, *TIME_SLOTS.last().unwrap());

    // One step right wraps back to the first.
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.draft.time, TIME_SLOTS[0]);
}
