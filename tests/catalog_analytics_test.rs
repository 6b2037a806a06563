//! Integration test: mock catalog, filters and dashboard aggregates

use railops::analytics::DashboardSummary;
use railops::catalog::{
    CatalogSource, MockCatalog, ScheduleFilter, ScheduleStatus, TrackFilter, TrackStatus,
    TrainFilter, TrainStatus, TrainType,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_fleet_summary() {
    let summary = DashboardSummary::from_catalog(&MockCatalog);
    let fleet = summary.fleet;

    assert_eq!(fleet.total, 10);
    assert_eq!(fleet.active, 6);
    assert_eq!(fleet.maintenance, 2);
    assert_eq!(fleet.out_of_service, 1);
    assert_eq!(fleet.retired, 1);
    assert!(approx(fleet.availability_percent, 60.0));
    assert_eq!(fleet.total_capacity, 8450);
}

#[test]
fn test_network_summary() {
    let network = DashboardSummary::from_catalog(&MockCatalog).network;

    assert_eq!(network.total_tracks, 8);
    assert_eq!(network.operational, 5);
    assert!(approx(network.operational_percent, 62.5));
    assert!((network.total_length_km - 557.5).abs() < 1e-6);
    // Only operational tracks contribute capacity
    assert_eq!(network.hourly_capacity, 48);
}

#[test]
fn test_schedule_summary_excludes_cancelled() {
    let schedules = DashboardSummary::from_catalog(&MockCatalog).schedules;

    assert_eq!(schedules.total, 12);
    assert_eq!(schedules.cancelled, 1);
    assert_eq!(schedules.delayed, 3);
    assert!(approx(schedules.on_time_percent, 8.0 / 11.0 * 100.0));
    assert!(approx(schedules.average_delay_minutes, 59.0 / 11.0));
    assert_eq!(schedules.max_delay_minutes, 25);
    assert_eq!(schedules.passengers_scheduled, 4105);
}

#[test]
fn test_prediction_aggregates() {
    let summary = DashboardSummary::from_catalog(&MockCatalog);
    assert_eq!(summary.prediction_count, 8);
    assert!(approx(summary.average_prediction_confidence, 0.82625));
}

#[test]
fn test_status_filters_partition_the_catalog() {
    let catalog = MockCatalog;

    let trains: usize = TrainStatus::all()
        .iter()
        .map(|s| {
            TrainFilter {
                status: Some(*s),
                ..Default::default()
            }
            .apply(catalog.trains())
            .len()
        })
        .sum();
    assert_eq!(trains, catalog.trains().len());

    let tracks: usize = TrackStatus::all()
        .iter()
        .map(|s| {
            TrackFilter {
                status: Some(*s),
                ..Default::default()
            }
            .apply(catalog.tracks())
            .len()
        })
        .sum();
    assert_eq!(tracks, catalog.tracks().len());

    let schedules: usize = ScheduleStatus::all()
        .iter()
        .map(|s| {
            ScheduleFilter {
                status: Some(*s),
                ..Default::default()
            }
            .apply(catalog.schedules())
            .len()
        })
        .sum();
    assert_eq!(schedules, catalog.schedules().len());
}

#[test]
fn test_active_filter_agrees_with_summary() {
    let catalog = MockCatalog;
    let active = TrainFilter {
        status: Some(TrainStatus::Active),
        ..Default::default()
    }
    .apply(catalog.trains());
    assert_eq!(
        active.len(),
        DashboardSummary::from_catalog(&catalog).fleet.active
    );
}

#[test]
fn test_type_filter_and_lookup() {
    let catalog = MockCatalog;
    let freight = TrainFilter {
        train_type: Some(TrainType::Freight),
        ..Default::default()
    }
    .apply(catalog.trains());
    assert_eq!(freight.len(), 2);

    assert_eq!(catalog.train(1).map(|t| t.train_number), Some("IC-101"));
    assert!(catalog.train(99).is_none());
    assert!(catalog.track(8).is_some());
}

#[test]
fn test_summary_serializes() {
    let json = serde_json::to_value(DashboardSummary::from_catalog(&MockCatalog)).unwrap();
    assert_eq!(json["fleet"]["active"], 6);
    assert_eq!(json["schedules"]["cancelled"], 1);
}
