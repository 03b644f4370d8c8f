//! Draft appointment buffer.
//!
//! Stages user input from the creation dialog until all required fields are
//! present, then commits into a real [`Appointment`]. Incomplete drafts are
//! simply not committable; no error is surfaced (the Create action renders
//! disabled instead).

use chrono::NaiveDate;

use crate::catalog::ServiceCatalog;
use crate::constants::schedule::FALLBACK_DURATION_MIN;
use crate::model::Appointment;
use crate::types::AppointmentId;

/// The input field currently focused in the creation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Client name text input.
    #[default]
    ClientName,
    /// Phone text input.
    Phone,
    /// Service selection.
    Service,
    /// Time slot selection.
    Time,
    /// Free-text notes.
    Notes,
}

impl FormField {
    /// All fields in traversal order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ClientName,
            Self::Phone,
            Self::Service,
            Self::Time,
            Self::Notes,
        ]
    }

    /// Human-readable field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClientName => "Имя клиента",
            Self::Phone => "Телефон",
            Self::Service => "Услуга",
            Self::Time => "Время",
            Self::Notes => "Примечания",
        }
    }

    /// The field after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ClientName => Self::Phone,
            Self::Phone => Self::Service,
            Self::Service => Self::Time,
            Self::Time => Self::Notes,
            Self::Notes => Self::ClientName,
        }
    }

    /// The field before this one, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::ClientName => Self::Notes,
            Self::Phone => Self::ClientName,
            Self::Service => Self::Phone,
            Self::Time => Self::Service,
            Self::Notes => Self::Time,
        }
    }

    /// Whether the field accepts typed characters.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::ClientName | Self::Phone | Self::Notes)
    }
}

/// The in-progress, uncommitted appointment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Client name, required.
    pub client_name: String,
    /// Client phone, required.
    pub phone: String,
    /// Selected service name, required.
    pub service: String,
    /// Selected slot label, required.
    pub time: String,
    /// Duration in minutes, derived from the service selection.
    pub duration_min: u32,
    /// Optional notes.
    pub notes: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            phone: String::new(),
            service: String::new(),
            time: String::new(),
            duration_min: FALLBACK_DURATION_MIN,
            notes: String::new(),
        }
    }
}

impl Draft {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a service and pull its duration from the catalog.
    ///
    /// An unknown name keeps the selection but takes the fallback duration.
    pub fn select_service(&mut self, name: impl Into<String>, catalog: &ServiceCatalog) {
        self.service = name.into();
        self.duration_min = catalog.duration_of(&self.service);
    }

    /// Select a starting time slot.
    pub fn select_time(&mut self, slot: impl Into<String>) {
        self.time = slot.into();
    }

    /// Whether all required fields are filled in.
    ///
    /// Notes and duration are optional/derived and never gate the commit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.client_name.is_empty()
            && !self.phone.is_empty()
            && !self.service.is_empty()
            && !self.time.is_empty()
    }

    /// Build the appointment for `date`, consuming nothing; the caller is
    /// expected to reset the draft afterwards.
    ///
    /// Returns `None` while any required field is missing.
    #[must_use]
    pub fn commit(&self, date: NaiveDate) -> Option<Appointment> {
        if !self.is_complete() {
            return None;
        }
        let notes = self.notes.trim();
        Some(Appointment {
            id: AppointmentId::generate(),
            client_name: self.client_name.clone(),
            service: self.service.clone(),
            date,
            time: self.time.clone(),
            duration_min: self.duration_min,
            phone: self.phone.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }

    /// Discard staged input, restoring the empty defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_draft(catalog: &ServiceCatalog) -> Draft {
        let mut draft = Draft::new();
        draft.client_name = "Ann".to_string();
        draft.phone = "123".to_string();
        draft.select_service("Стрижка", catalog);
        draft.select_time("10:00");
        draft
    }

    #[test]
    fn commit_gated_on_every_required_field() {
        let catalog = ServiceCatalog::standard();
        let day = date(2024, 6, 10);
        let complete = filled_draft(&catalog);
        assert!(complete.is_complete());

        let clears: [fn(&mut Draft); 4] = [
            |d| d.client_name.clear(),
            |d| d.phone.clear(),
            |d| d.service.clear(),
            |d| d.time.clear(),
        ];
        for clear in clears {
            let mut draft = complete.clone();
            clear(&mut draft);
            assert!(!draft.is_complete());
            assert!(draft.commit(day).is_none());
        }
    }

    #[test]
    fn commit_builds_appointment_with_catalog_duration() {
        let catalog = ServiceCatalog::standard();
        let day = date(2024, 6, 10);
        let draft = filled_draft(&catalog);

        let appointment = draft.commit(day).unwrap();
        assert_eq!(appointment.client_name, "Ann");
        assert_eq!(appointment.service, "Стрижка");
        assert_eq!(appointment.duration_min, 60);
        assert_eq!(appointment.date, day);
        assert_eq!(appointment.time, "10:00");
        assert_eq!(appointment.notes, None);
    }

    #[test]
    fn unknown_service_takes_fallback_duration() {
        let catalog = ServiceCatalog::standard();
        let mut draft = Draft::new();
        draft.select_service("Массаж", &catalog);
        assert_eq!(draft.duration_min, 60);
    }

    #[test]
    fn selecting_known_service_overrides_fallback() {
        let catalog = ServiceCatalog::standard();
        let mut draft = Draft::new();
        draft.select_service("Окрашивание", &catalog);
        assert_eq!(draft.duration_min, 120);
        draft.select_service("Укладка", &catalog);
        assert_eq!(draft.duration_min, 45);
    }

    #[test]
    fn reset_restores_empty_defaults() {
        let catalog = ServiceCatalog::standard();
        let mut draft = filled_draft(&catalog);
        draft.notes = "после 18:00 не звонить".to_string();
        draft.reset();
        assert_eq!(draft, Draft::default());
        assert_eq!(draft.duration_min, 60);
    }

    #[test]
    fn blank_notes_become_none() {
        let catalog = ServiceCatalog::standard();
        let mut draft = filled_draft(&catalog);
        draft.notes = "   ".to_string();
        let appointment = draft.commit(date(2024, 6, 10)).unwrap();
        assert_eq!(appointment.notes, None);

        draft.notes = "аллергия на краску".to_string();
        let appointment = draft.commit(date(2024, 6, 10)).unwrap();
        assert_eq!(appointment.notes.as_deref(), Some("аллергия на краску"));
    }

    #[test]
    fn field_traversal_wraps_in_both_directions() {
        let mut field = FormField::ClientName;
        for _ in 0..FormField::all().len() {
            field = field.next();
        }
        assert_eq!(field, FormField::ClientName);
        assert_eq!(FormField::ClientName.previous(), FormField::Notes);
        assert!(FormField::Phone.is_text());
        assert!(!FormField::Service.is_text());
    }
}
