//! Canned catalog data.

use super::types::*;
use super::CatalogSource;

pub static TRAINS: [Train; 10] = [
    Train {
        id: 1,
        train_number: "IC-101",
        name: "Northern Express",
        train_type: TrainType::Passenger,
        status: TrainStatus::Active,
        capacity: 420,
        max_speed_kmh: 160,
        current_location: "Central Station",
    },
    Train {
        id: 2,
        train_number: "HS-201",
        name: "Coastal Arrow",
        train_type: TrainType::HighSpeed,
        status: TrainStatus::Active,
        capacity: 510,
        max_speed_kmh: 300,
        current_location: "Harbor Terminal",
    },
    Train {
        id: 3,
        train_number: "FR-301",
        name: "Iron Hauler",
        train_type: TrainType::Freight,
        status: TrainStatus::Active,
        capacity: 2400,
        max_speed_kmh: 100,
        current_location: "North Yard",
    },
    Train {
        id: 4,
        train_number: "MT-401",
        name: "Metro Line 1",
        train_type: TrainType::Metro,
        status: TrainStatus::Active,
        capacity: 900,
        max_speed_kmh: 80,
        current_location: "Central Station",
    },
    Train {
        id: 5,
        train_number: "MT-402",
        name: "Metro Line 2",
        train_type: TrainType::Metro,
        status: TrainStatus::Maintenance,
        capacity: 900,
        max_speed_kmh: 80,
        current_location: "East Depot",
    },
    Train {
        id: 6,
        train_number: "TR-501",
        name: "City Tram A",
        train_type: TrainType::Tram,
        status: TrainStatus::Active,
        capacity: 180,
        max_speed_kmh: 50,
        current_location: "Old Town",
    },
    Train {
        id: 7,
        train_number: "IC-102",
        name: "Valley Runner",
        train_type: TrainType::Passenger,
        status: TrainStatus::OutOfService,
        capacity: 380,
        max_speed_kmh: 140,
        current_location: "West Depot",
    },
    Train {
        id: 8,
        train_number: "HS-202",
        name: "Summit Bullet",
        train_type: TrainType::HighSpeed,
        status: TrainStatus::Active,
        capacity: 540,
        max_speed_kmh: 320,
        current_location: "Airport Link",
    },
    Train {
        id: 9,
        train_number: "FR-302",
        name: "Grain Carrier",
        train_type: TrainType::Freight,
        status: TrainStatus::Maintenance,
        capacity: 2100,
        max_speed_kmh: 90,
        current_location: "South Yard",
    },
    Train {
        id: 10,
        train_number: "TR-502",
        name: "Heritage Tram",
        train_type: TrainType::Tram,
        status: TrainStatus::Retired,
        capacity: 120,
        max_speed_kmh: 40,
        current_location: "Museum Siding",
    },
];

pub static TRACKS: [Track; 8] = [
    Track {
        id: 1,
        name: "Central Main Line",
        track_type: TrackType::MainLine,
        status: TrackStatus::Operational,
        length_km: 142.5,
        max_speed_kmh: 200,
        capacity_trains_per_hour: 12,
    },
    Track {
        id: 2,
        name: "Coastal High-Speed",
        track_type: TrackType::MainLine,
        status: TrackStatus::Operational,
        length_km: 318.0,
        max_speed_kmh: 300,
        capacity_trains_per_hour: 10,
    },
    Track {
        id: 3,
        name: "Valley Branch",
        track_type: TrackType::BranchLine,
        status: TrackStatus::Maintenance,
        length_km: 56.2,
        max_speed_kmh: 120,
        capacity_trains_per_hour: 6,
    },
    Track {
        id: 4,
        name: "North Freight Siding",
        track_type: TrackType::Siding,
        status: TrackStatus::Operational,
        length_km: 4.8,
        max_speed_kmh: 40,
        capacity_trains_per_hour: 4,
    },
    Track {
        id: 5,
        name: "South Yard",
        track_type: TrackType::Yard,
        status: TrackStatus::Operational,
        length_km: 2.5,
        max_speed_kmh: 25,
        capacity_trains_per_hour: 8,
    },
    Track {
        id: 6,
        name: "Harbor Terminal Approach",
        track_type: TrackType::Terminal,
        status: TrackStatus::Operational,
        length_km: 3.0,
        max_speed_kmh: 60,
        capacity_trains_per_hour: 14,
    },
    Track {
        id: 7,
        name: "Airport Link",
        track_type: TrackType::BranchLine,
        status: TrackStatus::UnderConstruction,
        length_km: 21.0,
        max_speed_kmh: 160,
        capacity_trains_per_hour: 8,
    },
    Track {
        id: 8,
        name: "Old Town Tramway",
        track_type: TrackType::BranchLine,
        status: TrackStatus::Closed,
        length_km: 9.5,
        max_speed_kmh: 50,
        capacity_trains_per_hour: 20,
    },
];

const fn hm(hour: u16, minute: u16) -> u16 {
    hour * 60 + minute
}

pub static SCHEDULES: [Schedule; 12] = [
    Schedule {
        id: 1,
        train_id: 1,
        track_id: 1,
        origin: "Central Station",
        destination: "Northgate",
        departure_minute: hm(6, 15),
        status: ScheduleStatus::Completed,
        delay_minutes: 0,
        passenger_count: 310,
    },
    Schedule {
        id: 2,
        train_id: 2,
        track_id: 2,
        origin: "Harbor Terminal",
        destination: "Bayview",
        departure_minute: hm(7, 0),
        status: ScheduleStatus::Active,
        delay_minutes: 3,
        passenger_count: 480,
    },
    Schedule {
        id: 3,
        train_id: 3,
        track_id: 4,
        origin: "North Yard",
        destination: "Port Freight",
        departure_minute: hm(7, 30),
        status: ScheduleStatus::Scheduled,
        delay_minutes: 0,
        passenger_count: 0,
    },
    Schedule {
        id: 4,
        train_id: 4,
        track_id: 1,
        origin: "Central Station",
        destination: "University",
        departure_minute: hm(7, 45),
        status: ScheduleStatus::Active,
        delay_minutes: 0,
        passenger_count: 760,
    },
    Schedule {
        id: 5,
        train_id: 6,
        track_id: 8,
        origin: "Old Town",
        destination: "Market Square",
        departure_minute: hm(8, 0),
        status: ScheduleStatus::Cancelled,
        delay_minutes: 0,
        passenger_count: 0,
    },
    Schedule {
        id: 6,
        train_id: 8,
        track_id: 2,
        origin: "Airport",
        destination: "Harbor Terminal",
        departure_minute: hm(8, 30),
        status: ScheduleStatus::Delayed,
        delay_minutes: 18,
        passenger_count: 495,
    },
    Schedule {
        id: 7,
        train_id: 1,
        track_id: 1,
        origin: "Northgate",
        destination: "Central Station",
        departure_minute: hm(9, 0),
        status: ScheduleStatus::Scheduled,
        delay_minutes: 0,
        passenger_count: 280,
    },
    Schedule {
        id: 8,
        train_id: 4,
        track_id: 1,
        origin: "University",
        destination: "Central Station",
        departure_minute: hm(9, 15),
        status: ScheduleStatus::Delayed,
        delay_minutes: 7,
        passenger_count: 690,
    },
    Schedule {
        id: 9,
        train_id: 2,
        track_id: 2,
        origin: "Bayview",
        destination: "Harbor Terminal",
        departure_minute: hm(10, 0),
        status: ScheduleStatus::Scheduled,
        delay_minutes: 0,
        passenger_count: 450,
    },
    Schedule {
        id: 10,
        train_id: 3,
        track_id: 4,
        origin: "Port Freight",
        destination: "North Yard",
        departure_minute: hm(10, 30),
        status: ScheduleStatus::Completed,
        delay_minutes: 4,
        passenger_count: 0,
    },
    Schedule {
        id: 11,
        train_id: 6,
        track_id: 6,
        origin: "Market Square",
        destination: "Harbor Terminal",
        departure_minute: hm(11, 0),
        status: ScheduleStatus::Completed,
        delay_minutes: 2,
        passenger_count: 140,
    },
    Schedule {
        id: 12,
        train_id: 8,
        track_id: 2,
        origin: "Harbor Terminal",
        destination: "Airport",
        departure_minute: hm(12, 0),
        status: ScheduleStatus::Delayed,
        delay_minutes: 25,
        passenger_count: 500,
    },
];

pub static PREDICTIONS: [Prediction; 8] = [
    Prediction {
        id: 1,
        subject: "IC-101",
        kind: PredictionKind::Delay,
        value: 4.2,
        unit: "min",
        confidence: 0.86,
    },
    Prediction {
        id: 2,
        subject: "HS-202",
        kind: PredictionKind::Delay,
        value: 12.5,
        unit: "min",
        confidence: 0.78,
    },
    Prediction {
        id: 3,
        subject: "Central - University",
        kind: PredictionKind::Demand,
        value: 820.0,
        unit: "pax/h",
        confidence: 0.91,
    },
    Prediction {
        id: 4,
        subject: "Coastal High-Speed",
        kind: PredictionKind::Demand,
        value: 540.0,
        unit: "pax/h",
        confidence: 0.83,
    },
    Prediction {
        id: 5,
        subject: "MT-402",
        kind: PredictionKind::Maintenance,
        value: 6.0,
        unit: "days",
        confidence: 0.74,
    },
    Prediction {
        id: 6,
        subject: "FR-302",
        kind: PredictionKind::Maintenance,
        value: 2.0,
        unit: "days",
        confidence: 0.88,
    },
    Prediction {
        id: 7,
        subject: "FR-301",
        kind: PredictionKind::Fuel,
        value: 48.3,
        unit: "L/100km",
        confidence: 0.81,
    },
    Prediction {
        id: 8,
        subject: "TR-501",
        kind: PredictionKind::Fuel,
        value: 210.0,
        unit: "kWh/100km",
        confidence: 0.80,
    },
];

/// Catalog backed by the static tables above.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

impl CatalogSource for MockCatalog {
    fn trains(&self) -> &[Train] {
        &TRAINS
    }

    fn tracks(&self) -> &[Track] {
        &TRACKS
    }

    fn schedules(&self) -> &[Schedule] {
        &SCHEDULES
    }

    fn predictions(&self) -> &[Prediction] {
        &PREDICTIONS
    }
}
