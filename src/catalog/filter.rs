//! Filter predicates for the catalog pages.
//!
//! Each filter combines an optional status with free-text search. Search
//! is case-insensitive and matches any of the record's display fields.

use super::types::*;

fn matches_text(query: &str, fields: &[&str]) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// Steps through `None -> Some(all[0]) -> ... -> Some(last) -> None`.
pub fn cycle_option<T: Copy + PartialEq>(all: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let idx = all.iter().position(|v| *v == value)?;
            all.get(idx + 1).copied()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainFilter {
    pub status: Option<TrainStatus>,
    pub train_type: Option<TrainType>,
    pub search: String,
}

impl TrainFilter {
    pub fn matches(&self, train: &Train) -> bool {
        self.status.map_or(true, |s| train.status == s)
            && self.train_type.map_or(true, |t| train.train_type == t)
            && matches_text(
                &self.search,
                &[train.train_number, train.name, train.current_location],
            )
    }

    pub fn apply<'a>(&self, trains: &'a [Train]) -> Vec<&'a Train> {
        trains.iter().filter(|t| self.matches(t)).collect()
    }

    pub fn cycle_status(&mut self) {
        self.status = cycle_option(&TrainStatus::all(), self.status);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackFilter {
    pub status: Option<TrackStatus>,
    pub search: String,
}

impl TrackFilter {
    pub fn matches(&self, track: &Track) -> bool {
        self.status.map_or(true, |s| track.status == s)
            && matches_text(&self.search, &[track.name, track.track_type.name()])
    }

    pub fn apply<'a>(&self, tracks: &'a [Track]) -> Vec<&'a Track> {
        tracks.iter().filter(|t| self.matches(t)).collect()
    }

    pub fn cycle_status(&mut self) {
        self.status = cycle_option(&TrackStatus::all(), self.status);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleFilter {
    pub status: Option<ScheduleStatus>,
    pub search: String,
}

impl ScheduleFilter {
    pub fn matches(&self, schedule: &Schedule) -> bool {
        self.status.map_or(true, |s| schedule.status == s)
            && matches_text(&self.search, &[schedule.origin, schedule.destination])
    }

    pub fn apply<'a>(&self, schedules: &'a [Schedule]) -> Vec<&'a Schedule> {
        schedules.iter().filter(|s| self.matches(s)).collect()
    }

    pub fn cycle_status(&mut self) {
        self.status = cycle_option(&ScheduleStatus::all(), self.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::{SCHEDULES, TRAINS, TRACKS};

    #[test]
    fn test_empty_filter_matches_everything() {
        assert_eq!(TrainFilter::default().apply(&TRAINS).len(), TRAINS.len());
        assert_eq!(TrackFilter::default().apply(&TRACKS).len(), TRACKS.len());
        assert_eq!(
            ScheduleFilter::default().apply(&SCHEDULES).len(),
            SCHEDULES.len()
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = TrainFilter {
            search: "  metro ".to_string(),
            ..Default::default()
        };
        let hits = filter.apply(&TRAINS);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|t| t.train_type == TrainType::Metro));
    }

    #[test]
    fn test_status_and_search_combine() {
        let filter = TrainFilter {
            status: Some(TrainStatus::Active),
            search: "central".to_string(),
            ..Default::default()
        };
        let numbers: Vec<&str> = filter.apply(&TRAINS).iter().map(|t| t.train_number).collect();
        assert_eq!(numbers, vec!["IC-101", "MT-401"]);
    }

    #[test]
    fn test_cycle_status_wraps_to_none() {
        let mut filter = TrackFilter::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            filter.cycle_status();
            seen.push(filter.status);
        }
        assert_eq!(seen[0], Some(TrackStatus::Operational));
        assert_eq!(seen[3], Some(TrackStatus::UnderConstruction));
        assert_eq!(seen[4], None);
    }

    #[test]
    fn test_schedule_search_matches_destination() {
        let filter = ScheduleFilter {
            search: "airport".to_string(),
            ..Default::default()
        };
        let ids: Vec<u32> = filter.apply(&SCHEDULES).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![6, 12]);
    }
}
