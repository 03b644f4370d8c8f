//! Appointment storage.
//!
//! The store is an explicit collaborator handed to the view layer instead of
//! ambient state, so the booking logic can be unit tested without a terminal
//! and a real backing store can be substituted later. Update and delete are
//! reserved for future scope.

use chrono::NaiveDate;
use tracing::debug;

use crate::model::Appointment;
use crate::types::AppointmentId;

/// Collection of booked appointments.
pub trait AppointmentStore {
    /// Append a newly created appointment.
    fn create(&mut self, appointment: Appointment);

    /// Every appointment, in creation order.
    fn list(&self) -> &[Appointment];

    /// Appointments falling on the given day.
    fn on_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.list().iter().filter(|a| a.date == date).collect()
    }

    /// Number of stored appointments.
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Whether the store holds no appointments.
    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Session-lifetime store backed by a plain vector.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    appointments: Vec<Appointment>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demo bookings on the given day.
    #[must_use]
    pub fn with_samples(day: NaiveDate) -> Self {
        let mut store = Self::new();
        store.create(Appointment {
            id: AppointmentId::generate(),
            client_name: "Анна Петрова".to_string(),
            service: "Стрижка".to_string(),
            date: day,
            time: "10:00".to_string(),
            duration_min: 60,
            phone: "+7 999 123-45-67".to_string(),
            notes: None,
        });
        store.create(Appointment {
            id: AppointmentId::generate(),
            client_name: "Мария Иванова".to_string(),
            service: "Окрашивание".to_string(),
            date: day,
            time: "14:00".to_string(),
            duration_min: 120,
            phone: "+7 999 234-56-78".to_string(),
            notes: None,
        });
        store
    }
}

impl AppointmentStore for InMemoryStore {
    fn create(&mut self, appointment: Appointment) {
        debug!(
            id = %appointment.id,
            client = %appointment.client_name,
            date = %appointment.date,
            time = %appointment.time,
            "appointment created"
        );
        self.appointments.push(appointment);
    }

    fn list(&self) -> &[Appointment] {
        &self.appointments
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn create_appends_in_order() {
        let day = date(2024, 6, 10);
        let mut store = InMemoryStore::new();
        assert!(store.is_empty());

        for (name, time) in [("Анна", "10:00"), ("Мария", "14:00")] {
            store.create(Appointment {
                id: AppointmentId::generate(),
                client_name: name.to_string(),
                service: "Стрижка".to_string(),
                date: day,
                time: time.to_string(),
                duration_min: 60,
                phone: "123".to_string(),
                notes: None,
            });
        }

        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].client_name, "Анна");
        assert_eq!(store.list()[1].client_name, "Мария");
    }

    #[test]
    fn on_date_filters_by_day() {
        let monday = date(2024, 6, 10);
        let store = InMemoryStore::with_samples(monday);

        assert_eq!(store.on_date(monday).len(), 2);
        assert!(store.on_date(date(2024, 6, 11)).is_empty());
    }

    #[test]
    fn sample_store_mirrors_demo_data() {
        let day = date(2024, 6, 10);
        let store = InMemoryStore::with_samples(day);
        let first = &store.list()[0];
        assert_eq!(first.client_name, "Анна Петрова");
        assert_eq!(first.service, "Стрижка");
        assert_eq!(first.duration_min, 60);
    }
}
