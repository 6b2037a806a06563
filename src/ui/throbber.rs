//! Spinner shown while a run is in progress.

use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const DISPATCH_MESSAGES: [&str; 8] = [
    "Dispatching trains...",
    "Clearing signals...",
    "Boarding passengers...",
    "Balancing headways...",
    "Checking junctions...",
    "Rerouting around works...",
    "Updating departure boards...",
    "Monitoring platforms...",
];

fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Spinner frame for the current wall-clock time (100ms per frame).
pub fn spinner_char() -> char {
    SPINNER[((current_millis() / 100) % SPINNER.len() as u128) as usize]
}

/// Stable message for a given elapsed second, changing every few seconds.
pub fn dispatch_message(elapsed_seconds: u64) -> &'static str {
    DISPATCH_MESSAGES[((elapsed_seconds / 4) as usize) % DISPATCH_MESSAGES.len()]
}
