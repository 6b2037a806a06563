// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const MAX_CATCH_UP_TICKS: u32 = 5;
pub const INPUT_POLL_MS: u64 = 50;

// Progress
pub const PROGRESS_MIN: f64 = 0.0;
pub const PROGRESS_MAX: f64 = 100.0;

// Parameter bounds
pub const TRAIN_COUNT_MIN: u32 = 5;
pub const TRAIN_COUNT_MAX: u32 = 20;
pub const PASSENGER_LOAD_MIN: u32 = 20;
pub const PASSENGER_LOAD_MAX: u32 = 100;
pub const SPEED_MIN: u32 = 1;
pub const SPEED_MAX: u32 = 5;

// Parameter defaults
pub const DEFAULT_TRAIN_COUNT: u32 = 10;
pub const DEFAULT_PASSENGER_LOAD: u32 = 75;
pub const DEFAULT_SPEED: u32 = 1;

// KPI curves: value = min(base + (progress / 100) * span, cap)
pub const ON_TIME_BASE: f64 = 85.0;
pub const ON_TIME_SPAN: f64 = 10.0;
pub const ON_TIME_CAP: f64 = 95.0;
pub const SATISFACTION_BASE: f64 = 80.0;
pub const SATISFACTION_SPAN: f64 = 15.0;
pub const SATISFACTION_CAP: f64 = 92.0;
pub const ENERGY_BASE: f64 = 70.0;
pub const ENERGY_SPAN: f64 = 20.0;
pub const ENERGY_CAP: f64 = 88.0;
pub const PASSENGERS_AT_COMPLETION: f64 = 45_000.0;

// Run history
pub const DEFAULT_HISTORY_LIMIT: usize = 50;
pub const MAX_ACTIVITY_LOG_ENTRIES: usize = 12;

// Schedules delayed by at most this many minutes count as on time
pub const ON_TIME_THRESHOLD_MINUTES: u32 = 5;
