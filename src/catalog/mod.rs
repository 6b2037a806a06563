//! Read-only catalogs behind the fleet, track, schedule and prediction
//! pages.
//!
//! The dashboard never fetches data itself; it reads whatever a
//! [`CatalogSource`] hands it. [`MockCatalog`] serves the canned tables.

pub mod data;
pub mod filter;
pub mod types;

pub use data::MockCatalog;
pub use filter::{ScheduleFilter, TrackFilter, TrainFilter};
pub use types::*;

/// Supplier of catalog records.
pub trait CatalogSource {
    fn trains(&self) -> &[Train];
    fn tracks(&self) -> &[Track];
    fn schedules(&self) -> &[Schedule];
    fn predictions(&self) -> &[Prediction];

    fn train(&self, id: u32) -> Option<&Train> {
        self.trains().iter().find(|t| t.id == id)
    }

    fn track(&self, id: u32) -> Option<&Track> {
        self.tracks().iter().find(|t| t.id == id)
    }
}
