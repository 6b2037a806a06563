//! Report rendering for a single run.

use super::record::{KpiSample, RunRecord};
use crate::error::Result;
use serde::Serialize;
use std::fmt::Write;

/// A finished run together with its per-tick KPI timeline.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub record: RunRecord,
    pub timeline: Vec<KpiSample>,
}

impl RunReport {
    pub fn new(record: RunRecord, timeline: Vec<KpiSample>) -> Self {
        Self { record, timeline }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let r = &self.record;
        let p = &r.parameters;
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  SIMULATION RUN REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        let _ = writeln!(report, "Run:        {}", r.id);
        let _ = writeln!(
            report,
            "Outcome:    {} at {:.0}% after {}s simulated ({}s wall clock)",
            r.outcome.name(),
            r.progress,
            r.time_elapsed_seconds,
            r.wall_seconds()
        );
        let _ = writeln!(
            report,
            "Started:    {}",
            r.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        report.push('\n');

        report.push_str("── Parameters ─────────────────────────────────────────────────\n");
        let _ = writeln!(report, "Scenario:        {}", p.scenario.name());
        let _ = writeln!(report, "Trains:          {}", p.train_count);
        let _ = writeln!(report, "Passenger load:  {}%", p.passenger_load);
        let _ = writeln!(report, "Weather:         {}", p.weather_condition.name());
        let _ = writeln!(report, "Time of day:     {}", p.time_of_day.name());
        let _ = writeln!(report, "Speed:           {}x", p.speed);
        report.push('\n');

        report.push_str("── Results ────────────────────────────────────────────────────\n");
        let _ = writeln!(
            report,
            "On-time performance:     {:.1}%",
            r.results.on_time_performance
        );
        let _ = writeln!(
            report,
            "Passenger satisfaction:  {:.1}%",
            r.results.passenger_satisfaction
        );
        let _ = writeln!(
            report,
            "Energy efficiency:       {:.1}%",
            r.results.energy_efficiency
        );
        let _ = writeln!(
            report,
            "Total passengers:        {}",
            r.results.total_passengers
        );

        if !self.timeline.is_empty() {
            report.push('\n');
            report.push_str("── Timeline ───────────────────────────────────────────────────\n");
            report.push_str("   sec  progress  on-time  satisf.  energy  passengers\n");
            for sample in sampled(&self.timeline, 10) {
                let _ = writeln!(
                    report,
                    "{:>6}  {:>7.0}%  {:>6.1}%  {:>6.1}%  {:>5.1}%  {:>10}",
                    sample.second,
                    sample.progress,
                    sample.results.on_time_performance,
                    sample.results.passenger_satisfaction,
                    sample.results.energy_efficiency,
                    sample.results.total_passengers
                );
            }
        }

        report
    }

    /// Long-format CSV: one row per (second, metric).
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("second,metric,value\n");
        for s in &self.timeline {
            let _ = writeln!(csv, "{},progress,{}", s.second, s.progress);
            let _ = writeln!(
                csv,
                "{},on_time_performance,{}",
                s.second, s.results.on_time_performance
            );
            let _ = writeln!(
                csv,
                "{},passenger_satisfaction,{}",
                s.second, s.results.passenger_satisfaction
            );
            let _ = writeln!(
                csv,
                "{},energy_efficiency,{}",
                s.second, s.results.energy_efficiency
            );
            let _ = writeln!(
                csv,
                "{},total_passengers,{}",
                s.second, s.results.total_passengers
            );
        }
        csv
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// At most `max_rows` evenly spaced samples, always including the last.
fn sampled(timeline: &[KpiSample], max_rows: usize) -> Vec<&KpiSample> {
    if timeline.len() <= max_rows {
        return timeline.iter().collect();
    }
    let step = timeline.len().div_ceil(max_rows);
    let mut rows: Vec<&KpiSample> = timeline.iter().step_by(step).collect();
    if let Some(last) = timeline.last() {
        if rows.last().map(|r| r.second) != Some(last.second) {
            rows.push(last);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::SimulationState;
    use crate::core::params::ParameterUpdate;
    use crate::report::RunOutcome;
    use chrono::Utc;

    fn completed_report(speed: u32) -> RunReport {
        let mut state = SimulationState::new();
        state.set_parameter(ParameterUpdate::Speed(speed));
        state.start();
        let mut timeline = Vec::new();
        while state.is_running() {
            state.tick();
            timeline.push(KpiSample::from_state(&state));
        }
        let now = Utc::now();
        RunReport::new(
            RunRecord::capture(&state, now, now, RunOutcome::Completed),
            timeline,
        )
    }

    #[test]
    fn test_csv_has_five_rows_per_sample() {
        let report = completed_report(5);
        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "second,metric,value");
        assert_eq!(lines.len(), 1 + report.timeline.len() * 5);
        assert!(csv.contains("20,total_passengers,45000"));
    }

    #[test]
    fn test_text_report_mentions_outcome_and_results() {
        let text = completed_report(5).to_text();
        assert!(text.contains("Completed at 100%"));
        assert!(text.contains("Total passengers:        45000"));
        assert!(text.contains("Timeline"));
    }

    #[test]
    fn test_json_roundtrips_record() {
        let report = completed_report(4);
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["record"]["outcome"], "completed");
        assert_eq!(value["timeline"].as_array().unwrap().len(), 25);
    }

    #[test]
    fn test_sampled_keeps_last_row() {
        let report = completed_report(1);
        let rows = sampled(&report.timeline, 10);
        assert!(rows.len() <= 11);
        assert_eq!(rows.last().unwrap().second, 100);
    }
}
