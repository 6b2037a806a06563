//! Dashboard aggregates computed from a catalog.

use crate::catalog::{CatalogSource, ScheduleStatus, TrackStatus, TrainStatus};
use crate::core::constants::ON_TIME_THRESHOLD_MINUTES;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FleetSummary {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    pub out_of_service: usize,
    pub retired: usize,
    /// Active trains as a percentage of the whole fleet
    pub availability_percent: f64,
    pub total_capacity: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub total_tracks: usize,
    pub operational: usize,
    pub operational_percent: f64,
    pub total_length_km: f64,
    pub hourly_capacity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub total: usize,
    pub cancelled: usize,
    pub delayed: usize,
    /// Share of non-cancelled services within the on-time threshold
    pub on_time_percent: f64,
    pub average_delay_minutes: f64,
    pub max_delay_minutes: u32,
    pub passengers_scheduled: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub fleet: FleetSummary,
    pub network: NetworkSummary,
    pub schedules: ScheduleSummary,
    pub prediction_count: usize,
    pub average_prediction_confidence: f64,
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl DashboardSummary {
    pub fn from_catalog(catalog: &impl CatalogSource) -> Self {
        Self {
            fleet: fleet_summary(catalog),
            network: network_summary(catalog),
            schedules: schedule_summary(catalog),
            prediction_count: catalog.predictions().len(),
            average_prediction_confidence: average_confidence(catalog),
        }
    }
}

fn fleet_summary(catalog: &impl CatalogSource) -> FleetSummary {
    let trains = catalog.trains();
    let count = |status: TrainStatus| trains.iter().filter(|t| t.status == status).count();
    let active = count(TrainStatus::Active);

    FleetSummary {
        total: trains.len(),
        active,
        maintenance: count(TrainStatus::Maintenance),
        out_of_service: count(TrainStatus::OutOfService),
        retired: count(TrainStatus::Retired),
        availability_percent: percent(active, trains.len()),
        total_capacity: trains.iter().map(|t| t.capacity as u64).sum(),
    }
}

fn network_summary(catalog: &impl CatalogSource) -> NetworkSummary {
    let tracks = catalog.tracks();
    let operational: Vec<_> = tracks
        .iter()
        .filter(|t| t.status == TrackStatus::Operational)
        .collect();

    NetworkSummary {
        total_tracks: tracks.len(),
        operational: operational.len(),
        operational_percent: percent(operational.len(), tracks.len()),
        total_length_km: tracks.iter().map(|t| t.length_km).sum(),
        hourly_capacity: operational.iter().map(|t| t.capacity_trains_per_hour).sum(),
    }
}

fn schedule_summary(catalog: &impl CatalogSource) -> ScheduleSummary {
    let schedules = catalog.schedules();
    let running: Vec<_> = schedules
        .iter()
        .filter(|s| s.status != ScheduleStatus::Cancelled)
        .collect();
    let on_time = running
        .iter()
        .filter(|s| s.delay_minutes <= ON_TIME_THRESHOLD_MINUTES)
        .count();
    let total_delay: u64 = running.iter().map(|s| s.delay_minutes as u64).sum();

    ScheduleSummary {
        total: schedules.len(),
        cancelled: schedules.len() - running.len(),
        delayed: schedules
            .iter()
            .filter(|s| s.status == ScheduleStatus::Delayed)
            .count(),
        on_time_percent: percent(on_time, running.len()),
        average_delay_minutes: if running.is_empty() {
            0.0
        } else {
            total_delay as f64 / running.len() as f64
        },
        max_delay_minutes: running.iter().map(|s| s.delay_minutes).max().unwrap_or(0),
        passengers_scheduled: running.iter().map(|s| s.passenger_count as u64).sum(),
    }
}

fn average_confidence(catalog: &impl CatalogSource) -> f64 {
    let predictions = catalog.predictions();
    if predictions.is_empty() {
        return 0.0;
    }
    predictions.iter().map(|p| p.confidence).sum::<f64>() / predictions.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Prediction, Schedule, Track, Train};

    struct EmptyCatalog;

    impl CatalogSource for EmptyCatalog {
        fn trains(&self) -> &[Train] {
            &[]
        }
        fn tracks(&self) -> &[Track] {
            &[]
        }
        fn schedules(&self) -> &[Schedule] {
            &[]
        }
        fn predictions(&self) -> &[Prediction] {
            &[]
        }
    }

    #[test]
    fn test_empty_catalog_has_zero_percentages() {
        let summary = DashboardSummary::from_catalog(&EmptyCatalog);
        assert_eq!(summary.fleet.availability_percent, 0.0);
        assert_eq!(summary.network.operational_percent, 0.0);
        assert_eq!(summary.schedules.on_time_percent, 0.0);
        assert_eq!(summary.average_prediction_confidence, 0.0);
    }

    #[test]
    fn test_percent_helper() {
        assert_eq!(percent(1, 4), 25.0);
        assert_eq!(percent(3, 0), 0.0);
    }
}
