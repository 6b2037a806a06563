use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainType {
    Passenger,
    Freight,
    HighSpeed,
    Metro,
    Tram,
}

impl TrainType {
    pub fn name(&self) -> &'static str {
        match self {
            TrainType::Passenger => "Passenger",
            TrainType::Freight => "Freight",
            TrainType::HighSpeed => "High Speed",
            TrainType::Metro => "Metro",
            TrainType::Tram => "Tram",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainStatus {
    Active,
    Maintenance,
    OutOfService,
    Retired,
}

impl TrainStatus {
    pub fn all() -> [TrainStatus; 4] {
        [
            TrainStatus::Active,
            TrainStatus::Maintenance,
            TrainStatus::OutOfService,
            TrainStatus::Retired,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrainStatus::Active => "Active",
            TrainStatus::Maintenance => "Maintenance",
            TrainStatus::OutOfService => "Out of Service",
            TrainStatus::Retired => "Retired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Train {
    pub id: u32,
    pub train_number: &'static str,
    pub name: &'static str,
    pub train_type: TrainType,
    pub status: TrainStatus,
    /// Seats, or tonnes for freight
    pub capacity: u32,
    pub max_speed_kmh: u32,
    pub current_location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackType {
    MainLine,
    BranchLine,
    Siding,
    Yard,
    Terminal,
}

impl TrackType {
    pub fn name(&self) -> &'static str {
        match self {
            TrackType::MainLine => "Main Line",
            TrackType::BranchLine => "Branch Line",
            TrackType::Siding => "Siding",
            TrackType::Yard => "Yard",
            TrackType::Terminal => "Terminal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackStatus {
    Operational,
    Maintenance,
    Closed,
    UnderConstruction,
}

impl TrackStatus {
    pub fn all() -> [TrackStatus; 4] {
        [
            TrackStatus::Operational,
            TrackStatus::Maintenance,
            TrackStatus::Closed,
            TrackStatus::UnderConstruction,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrackStatus::Operational => "Operational",
            TrackStatus::Maintenance => "Maintenance",
            TrackStatus::Closed => "Closed",
            TrackStatus::UnderConstruction => "Under Construction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Track {
    pub id: u32,
    pub name: &'static str,
    pub track_type: TrackType,
    pub status: TrackStatus,
    pub length_km: f64,
    pub max_speed_kmh: u32,
    pub capacity_trains_per_hour: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Scheduled,
    Active,
    Completed,
    Cancelled,
    Delayed,
}

impl ScheduleStatus {
    pub fn all() -> [ScheduleStatus; 5] {
        [
            ScheduleStatus::Scheduled,
            ScheduleStatus::Active,
            ScheduleStatus::Completed,
            ScheduleStatus::Cancelled,
            ScheduleStatus::Delayed,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "Scheduled",
            ScheduleStatus::Active => "Active",
            ScheduleStatus::Completed => "Completed",
            ScheduleStatus::Cancelled => "Cancelled",
            ScheduleStatus::Delayed => "Delayed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Schedule {
    pub id: u32,
    pub train_id: u32,
    pub track_id: u32,
    pub origin: &'static str,
    pub destination: &'static str,
    /// Minutes after midnight
    pub departure_minute: u16,
    pub status: ScheduleStatus,
    pub delay_minutes: u32,
    pub passenger_count: u32,
}

impl Schedule {
    /// Departure formatted as HH:MM.
    pub fn departure_label(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.departure_minute / 60,
            self.departure_minute % 60
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    Delay,
    Demand,
    Maintenance,
    Fuel,
}

impl PredictionKind {
    pub fn name(&self) -> &'static str {
        match self {
            PredictionKind::Delay => "Delay",
            PredictionKind::Demand => "Demand",
            PredictionKind::Maintenance => "Maintenance",
            PredictionKind::Fuel => "Fuel",
        }
    }
}

/// A canned model output shown on the predictions page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub id: u32,
    /// Train number, route or schedule the prediction is about
    pub subject: &'static str,
    pub kind: PredictionKind,
    pub value: f64,
    pub unit: &'static str,
    /// 0.0-1.0
    pub confidence: f64,
}
