//! Fixed service catalog.
//!
//! The catalog is defined at startup and never edited by the user. Duration
//! lookups fall back to a default when the name is not a known service, so a
//! stale draft can still be committed with a sane length.

use crate::constants::schedule::FALLBACK_DURATION_MIN;
use crate::model::Service;

/// The immutable set of offered services.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    /// Build a catalog from an explicit list of services.
    #[must_use]
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// The services offered by the salon.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Service::new("Стрижка", 60, 1500),
            Service::new("Окрашивание", 120, 3500),
            Service::new("Укладка", 45, 1200),
            Service::new("Маникюр", 90, 2000),
        ])
    }

    /// All catalog entries in display order.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Look up a service by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Duration of the named service, or the fallback when unknown.
    #[must_use]
    pub fn duration_of(&self, name: &str) -> u32 {
        self.find(name)
            .map_or(FALLBACK_DURATION_MIN, |s| s.duration_min)
    }

    /// Price of the named service, or zero when unknown.
    #[must_use]
    pub fn price_of(&self, name: &str) -> u32 {
        self.find(name).map_or(0, |s| s.price)
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
