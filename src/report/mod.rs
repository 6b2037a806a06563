//! Run history records and report rendering.
//!
//! A [`RunRecord`] is captured whenever a run completes or is stopped
//! part-way; the controller keeps the per-tick [`KpiSample`] timeline of
//! the current run so a [`RunReport`] can render it as text, CSV or JSON.

mod record;
mod render;

pub use record::{KpiSample, RunOutcome, RunRecord};
pub use render::RunReport;
