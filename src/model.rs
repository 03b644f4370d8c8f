//! Domain records for the appointment book.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::AppointmentId;

/// A booked client visit.
///
/// Created only by committing the creation dialog; never updated or deleted
/// afterwards, and held in memory for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Session-unique identifier.
    pub id: AppointmentId,
    /// Client display name.
    pub client_name: String,
    /// Name of the booked service (a catalog key).
    pub service: String,
    /// Calendar day of the visit.
    pub date: NaiveDate,
    /// Starting slot label, e.g. "10:00".
    pub time: String,
    /// Duration in minutes, copied from the catalog at creation time.
    pub duration_min: u32,
    /// Client contact phone.
    pub phone: String,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// A catalog offering with fixed duration and price.
///
/// Defined at startup and immutable for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Unique service name, used as the catalog key.
    pub name: String,
    /// Duration in minutes.
    pub duration_min: u32,
    /// Price in whole currency units.
    pub price: u32,
}

impl Service {
    /// Create a new catalog entry.
    pub fn new(name: impl Into<String>, duration_min: u32, price: u32) -> Self {
        Self {
            name: name.into(),
            duration_min,
            price,
        }
    }
}
