//! Application state and key dispatch.
//!
//! `App` owns the whole view model: the active section, the reference date
//! driving the week grid, the injected appointment store, the service
//! catalog, and the draft buffer behind the creation dialog. Every mutation
//! happens synchronously inside `handle_key`, one event at a time.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;
use tracing::{debug, info};

use crate::catalog::ServiceCatalog;
use crate::config::Config;
use crate::draft::{Draft, FormField};
use crate::schedule::{self, WeekWindow, TIME_SLOTS};
use crate::store::{AppointmentStore, InMemoryStore};

/// The five navigation sections. Mutually exclusive, one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Week grid with summary tiles.
    #[default]
    Schedule,
    /// Flat list of every booking.
    Appointments,
    /// Client base (not built yet).
    Clients,
    /// Service catalog listing.
    Services,
    /// Profile settings (not built yet).
    Settings,
}

impl Section {
    /// All sections in sidebar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Schedule,
            Self::Appointments,
            Self::Clients,
            Self::Services,
            Self::Settings,
        ]
    }

    /// Sidebar label for this section.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Schedule => "Расписание",
            Self::Appointments => "Записи",
            Self::Clients => "Клиенты",
            Self::Services => "Услуги",
            Self::Settings => "Настройки",
        }
    }

    /// The section after this one, wrapping around (for Tab cycling).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Schedule => Self::Appointments,
            Self::Appointments => Self::Clients,
            Self::Clients => Self::Services,
            Self::Services => Self::Settings,
            Self::Settings => Self::Schedule,
        }
    }

    /// Section bound to a number key, 1-based.
    #[must_use]
    pub fn from_number(n: u32) -> Option<Self> {
        Self::all().get(n.checked_sub(1)? as usize).copied()
    }
}

/// The whole dashboard state.
pub struct App {
    /// Active navigation section.
    pub section: Section,
    /// Reference date anchoring the week window.
    pub selected_date: NaiveDate,
    /// Booked appointments, injected so tests can run without a terminal.
    pub store: Box<dyn AppointmentStore>,
    /// Fixed service catalog.
    pub catalog: ServiceCatalog,
    /// Loaded configuration.
    pub config: Config,
    /// Whether the creation dialog is open.
    pub dialog_open: bool,
    /// Draft buffer behind the creation dialog.
    pub draft: Draft,
    /// Focused field inside the dialog.
    pub form_focus: FormField,
    /// Selection state for the appointments list view.
    pub appointment_list_state: ListState,
    /// Whether the ':' command bar is capturing input.
    pub is_global_command_mode: bool,
    /// Text typed into the command bar.
    pub global_command_buffer: String,
    /// Whether the help modal is shown.
    pub show_help: bool,
    /// Blocking info overlay, if any.
    pub status_message: Option<String>,
    /// Blocking error overlay, if any.
    pub error_message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create the app with the demo store seeded on today's date.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let today = Local::now().date_naive();
        let store = Box::new(InMemoryStore::with_samples(today));
        Self::with_store(config, store, today)
    }

    /// Create the app around an injected store and reference date.
    #[must_use]
    pub fn with_store(
        config: Config,
        store: Box<dyn AppointmentStore>,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            section: Section::default(),
            selected_date: reference_date,
            store,
            catalog: ServiceCatalog::standard(),
            config,
            dialog_open: false,
            draft: Draft::new(),
            form_focus: FormField::default(),
            appointment_list_state: ListState::default(),
            is_global_command_mode: false,
            global_command_buffer: String::new(),
            show_help: false,
            status_message: None,
            error_message: None,
            should_quit: false,
        }
    }

    /// Whether the event loop should exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request a clean exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The week window currently on display.
    #[must_use]
    pub fn week_window(&self) -> WeekWindow {
        WeekWindow::containing(self.selected_date)
    }

    /// Shift the reference date one week forward.
    pub fn next_week(&mut self) {
        self.selected_date = schedule::next_week(self.selected_date);
        debug!(date = %self.selected_date, "week forward");
    }

    /// Shift the reference date one week back.
    pub fn previous_week(&mut self) {
        self.selected_date = schedule::previous_week(self.selected_date);
        debug!(date = %self.selected_date, "week back");
    }

    /// Reset the reference date to today.
    pub fn go_to_today(&mut self) {
        self.selected_date = Local::now().date_naive();
        debug!(date = %self.selected_date, "jump to today");
    }

    /// Switch the active section. Unconditional; touches neither the store
    /// nor the draft.
    pub fn set_section(&mut self, section: Section) {
        self.section = section;
        if section == Section::Appointments
            && self.appointment_list_state.selected().is_none()
            && !self.store.is_empty()
        {
            self.appointment_list_state.select(Some(0));
        }
    }

    /// Open the creation dialog over a fresh draft.
    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
        self.form_focus = FormField::default();
        debug!("creation dialog opened");
    }

    /// Close the dialog and discard the draft.
    pub fn cancel_dialog(&mut self) {
        self.dialog_open = false;
        self.draft.reset();
        self.form_focus = FormField::default();
        debug!("creation dialog cancelled");
    }

    /// Commit the draft if complete: append to the store, close the dialog,
    /// reset the buffer. A no-op while any required field is empty.
    pub fn commit_draft(&mut self) {
        let Some(appointment) = self.draft.commit(self.selected_date) else {
            return;
        };
        info!(
            client = %appointment.client_name,
            service = %appointment.service,
            date = %appointment.date,
            time = %appointment.time,
            "appointment committed"
        );
        self.status_message = Some(format!(
            "Запись создана: {} · {} {}",
            appointment.client_name, appointment.date, appointment.time
        ));
        self.store.create(appointment);
        self.dialog_open = false;
        self.draft.reset();
        self.form_focus = FormField::default();
    }

    // --- Summary tiles (derived for the selected date) ---

    /// Bookings on the selected date.
    #[must_use]
    pub fn day_appointment_count(&self) -> usize {
        self.store.on_date(self.selected_date).len()
    }

    /// Slots still free on the selected date.
    #[must_use]
    pub fn day_free_slots(&self) -> usize {
        let booked = self
            .store
            .on_date(self.selected_date)
            .iter()
            .filter(|a| TIME_SLOTS.iter().any(|s| *s == a.time))
            .map(|a| a.time.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();
        TIME_SLOTS.len().saturating_sub(booked)
    }

    /// Catalog revenue booked for the selected date.
    #[must_use]
    pub fn day_revenue(&self) -> u32 {
        self.store
            .on_date(self.selected_date)
            .iter()
            .map(|a| self.catalog.price_of(&a.service))
            .sum()
    }

    // --- Key dispatch ---

    /// Process one key event. Ordering matters: blocking overlays first, then
    /// the dialog, then the command bar, then section keys.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Help modal swallows everything except its dismiss keys
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        // Blocking overlays dismiss on Esc only
        if self.error_message.is_some() {
            if key.code == KeyCode::Esc {
                self.error_message = None;
            }
            return;
        }
        if self.status_message.is_some() {
            if key.code == KeyCode::Esc {
                self.status_message = None;
            }
            return;
        }

        // Dialog captures all input while open
        if self.dialog_open {
            self.handle_dialog_input(key);
            return;
        }

        if self.is_global_command_mode {
            self.handle_global_command_input(key);
            return;
        }

        if key.code == KeyCode::Char(':') {
            self.is_global_command_mode = true;
            self.global_command_buffer.clear();
            return;
        }

        if key.code == KeyCode::F(1) || key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        // Number keys jump straight to a section
        if let KeyCode::Char(c) = key.code {
            if let Some(section) = c.to_digit(10).and_then(Section::from_number) {
                self.set_section(section);
                return;
            }
        }

        if key.code == KeyCode::Tab {
            self.set_section(self.section.next());
            return;
        }

        match self.section {
            Section::Schedule => self.handle_schedule_input(key),
            Section::Appointments => self.handle_appointments_input(key),
            Section::Clients | Section::Services | Section::Settings => {
                if key.code == KeyCode::Char('n') {
                    self.open_dialog();
                }
            }
        }
    }

    fn handle_schedule_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.previous_week(),
            KeyCode::Right | KeyCode::Char('l') => self.next_week(),
            KeyCode::Char('t') => self.go_to_today(),
            KeyCode::Char('n') => self.open_dialog(),
            _ => {}
        }
    }

    fn handle_appointments_input(&mut self, key: KeyEvent) {
        let len = self.store.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selected) = self.appointment_list_state.selected() {
                    if selected > 0 {
                        self.appointment_list_state.select(Some(selected - 1));
                    }
                } else if len > 0 {
                    self.appointment_list_state.select(Some(len - 1));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(selected) = self.appointment_list_state.selected() {
                    if selected < len.saturating_sub(1) {
                        self.appointment_list_state.select(Some(selected + 1));
                    }
                } else if len > 0 {
                    self.appointment_list_state.select(Some(0));
                }
            }
            KeyCode::Char('n') => self.open_dialog(),
            _ => {}
        }
    }

    fn handle_dialog_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_dialog(),
            KeyCode::Enter => self.commit_draft(),
            KeyCode::Tab | KeyCode::Down => self.form_focus = self.form_focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.form_focus = self.form_focus.previous(),
            KeyCode::Left => self.cycle_selection(-1),
            KeyCode::Right => self.cycle_selection(1),
            KeyCode::Backspace => {
                if let Some(buffer) = self.focused_text_buffer() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.focused_text_buffer() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    /// The text buffer behind the focused field, when it accepts typing.
    fn focused_text_buffer(&mut self) -> Option<&mut String> {
        match self.form_focus {
            FormField::ClientName => Some(&mut self.draft.client_name),
            FormField::Phone => Some(&mut self.draft.phone),
            FormField::Notes => Some(&mut self.draft.notes),
            FormField::Service | FormField::Time => None,
        }
    }

    /// Cycle the focused select field (service or time) by `delta`.
    fn cycle_selection(&mut self, delta: i64) {
        match self.form_focus {
            FormField::Service => {
                let names: Vec<String> = self
                    .catalog
                    .services()
                    .iter()
                    .map(|s| s.name.clone())
                    .collect();
                if let Some(name) = cycled(&names, &self.draft.service, delta) {
                    self.draft.select_service(name, &self.catalog);
                }
            }
            FormField::Time => {
                if let Some(slot) = cycled(&TIME_SLOTS, &self.draft.time, delta) {
                    self.draft.select_time(slot);
                }
            }
            _ => {}
        }
    }

    fn handle_global_command_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.is_global_command_mode = false;
                self.global_command_buffer.clear();
            }
            KeyCode::Enter => {
                self.execute_global_command();
                self.is_global_command_mode = false;
                self.global_command_buffer.clear();
            }
            KeyCode::Backspace => {
                self.global_command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.global_command_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Execute the command typed into the ':' bar.
    pub fn execute_global_command(&mut self) {
        match self.global_command_buffer.as_str() {
            "q" | "quit" => self.quit(),
            "h" | "help" => self.show_help = true,
            "t" | "today" => self.go_to_today(),
            "n" | "new" => self.open_dialog(),
            _ => {}
        }
    }
}

/// Pick the entry `delta` steps from `current` in `options`, wrapping.
/// An empty or unknown `current` starts from the first entry.
fn cycled(options: &[String], current: &str, delta: i64) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let len = options.len() as i64;
    let next = match options.iter().position(|o| o == current) {
        Some(idx) => (idx as i64 + delta).rem_euclid(len),
        None => {
            if delta >= 0 {
                0
            } else {
                len - 1
            }
        }
    };
    options.get(next as usize).cloned()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        App::with_store(
            Config::default(),
            Box::new(InMemoryStore::with_samples(day)),
            day,
        )
    }

    #[test]
    fn number_keys_switch_sections() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.section, Section::Services);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.section, Section::Schedule);
    }

    #[test]
    fn tab_cycles_sections_in_order() {
        let mut app = test_app();
        let mut seen = Vec::new();
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Tab));
            seen.push(app.section);
        }
        assert_eq!(seen.last(), Some(&Section::Schedule));
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn section_switching_never_mutates_store_or_draft() {
        let mut app = test_app();
        app.draft.client_name = "Ann".to_string();
        let before_len = app.store.len();
        let before_draft = app.draft.clone();

        for code in ['2', '3', '4', '5', '1'] {
            app.handle_key(key(KeyCode::Char(code)));
        }
        app.handle_key(key(KeyCode::Tab));

        assert_eq!(app.store.len(), before_len);
        assert_eq!(app.draft, before_draft);
    }

    #[test]
    fn week_navigation_round_trips_reference_date() {
        let mut app = test_app();
        let start = app.selected_date;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.selected_date, start + chrono::Days::new(7));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.selected_date, start);
    }

    #[test]
    fn commit_is_noop_while_draft_incomplete() {
        let mut app = test_app();
        let before = app.store.len();
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.dialog_open);

        for c in "Ann".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.store.len(), before);
        assert!(app.dialog_open);
    }

    #[test]
    fn full_dialog_flow_commits_one_appointment() {
        let mut app = test_app();
        let before = app.store.len();

        app.handle_key(key(KeyCode::Char('n')));
        for c in "Ann".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab)); // -> phone
        for c in "123".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab)); // -> service
        app.handle_key(key(KeyCode::Right)); // select "Стрижка"
        app.handle_key(key(KeyCode::Tab)); // -> time
        app.handle_key(key(KeyCode::Right)); // select "09:00"
        app.handle_key(key(KeyCode::Right)); // -> "10:00"
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.store.len(), before + 1);
        assert!(!app.dialog_open);
        assert_eq!(app.draft, Draft::default());

        let created = app.store.list().last().unwrap();
        assert_eq!(created.client_name, "Ann");
        assert_eq!(created.service, "Стрижка");
        assert_eq!(created.duration_min, 60);
        assert_eq!(created.time, "10:00");
        assert_eq!(created.date, app.selected_date);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn cancel_discards_draft_without_append() {
        let mut app = test_app();
        let before = app.store.len();

        app.handle_key(key(KeyCode::Char('n')));
        for c in "Ann".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Esc));

        assert!(!app.dialog_open);
        assert_eq!(app.store.len(), before);
        assert_eq!(app.draft, Draft::default());
    }

    #[test]
    fn service_cycling_updates_duration_from_catalog() {
        let mut app = test_app();
        app.open_dialog();
        app.form_focus = FormField::Service;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.draft.service, "Стрижка");
        assert_eq!(app.draft.duration_min, 60);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.draft.service, "Окрашивание");
        assert_eq!(app.draft.duration_min, 120);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.draft.service, "Стрижка");
    }

    #[test]
    fn summary_tiles_derive_from_selected_day() {
        let app = test_app();
        assert_eq!(app.day_appointment_count(), 2);
        assert_eq!(app.day_free_slots(), 10);
        // Стрижка 1500 + Окрашивание 3500
        assert_eq!(app.day_revenue(), 5000);
    }

    #[test]
    fn summary_tiles_empty_on_other_days() {
        let mut app = test_app();
        app.next_week();
        assert_eq!(app.day_appointment_count(), 0);
        assert_eq!(app.day_free_slots(), 12);
        assert_eq!(app.day_revenue(), 0);
    }

    #[test]
    fn quit_command_sets_flag() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char(':')));
        app.handle_key(key(KeyCode::Char('q')));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.should_quit());
    }

    #[test]
    fn help_modal_blocks_and_dismisses() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);
        // Section keys are swallowed while help is up
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.section, Section::Schedule);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.show_help);
    }
}
