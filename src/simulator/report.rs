//! Aggregate report over a parameter sweep.

use crate::report::{RunOutcome, RunReport};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub seed: Option<u64>,
    pub runs: Vec<RunReport>,
}

impl SweepReport {
    pub fn new(runs: Vec<RunReport>, seed: Option<u64>) -> Self {
        Self { seed, runs }
    }

    pub fn completed(&self) -> usize {
        self.runs
            .iter()
            .filter(|r| r.record.outcome == RunOutcome::Completed)
            .count()
    }

    fn average(&self, value: impl Fn(&RunReport) -> f64) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(value).sum::<f64>() / self.runs.len() as f64
    }

    pub fn avg_progress(&self) -> f64 {
        self.average(|r| r.record.progress)
    }

    pub fn avg_on_time(&self) -> f64 {
        self.average(|r| r.record.results.on_time_performance)
    }

    pub fn avg_passengers(&self) -> f64 {
        self.average(|r| r.record.results.total_passengers as f64)
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  PARAMETER SWEEP REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        let _ = writeln!(report, "Runs:       {}", self.runs.len());
        let _ = writeln!(report, "Completed:  {}", self.completed());
        match self.seed {
            Some(seed) => {
                let _ = writeln!(report, "Seed:       {}", seed);
            }
            None => report.push_str("Seed:       (entropy)\n"),
        }
        report.push('\n');

        report.push_str("── Runs ───────────────────────────────────────────────────────\n");
        report.push_str(" #  Scenario  Weather  Time       Trains Load Spd   Prog  Ticks\n");
        for (i, run) in self.runs.iter().enumerate() {
            let r = &run.record;
            let p = &r.parameters;
            let _ = writeln!(
                report,
                "{:>2}  {:<9} {:<8} {:<10} {:>6} {:>3}% {:>2}x {:>5.0}% {:>6}",
                i + 1,
                p.scenario.name(),
                p.weather_condition.name(),
                p.time_of_day.name(),
                p.train_count,
                p.passenger_load,
                p.speed,
                r.progress,
                r.time_elapsed_seconds
            );
        }
        report.push('\n');

        report.push_str("── Averages ───────────────────────────────────────────────────\n");
        let _ = writeln!(report, "Progress:             {:.1}%", self.avg_progress());
        let _ = writeln!(report, "On-time performance:  {:.1}%", self.avg_on_time());
        let _ = writeln!(report, "Passengers:           {:.0}", self.avg_passengers());

        report
    }

    /// One row per run.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(
            "run,scenario,weather_condition,time_of_day,train_count,passenger_load,speed,outcome,progress,time_elapsed_seconds,on_time_performance,passenger_satisfaction,energy_efficiency,total_passengers\n",
        );
        for (i, run) in self.runs.iter().enumerate() {
            let r = &run.record;
            let p = &r.parameters;
            let _ = writeln!(
                csv,
                "{},{},{},{},{},{},{},{},{:.1},{},{:.2},{:.2},{:.2},{}",
                i + 1,
                p.scenario.name().to_lowercase(),
                p.weather_condition.name().to_lowercase(),
                p.time_of_day.name().to_lowercase(),
                p.train_count,
                p.passenger_load,
                p.speed,
                r.outcome.name().to_lowercase(),
                r.progress,
                r.time_elapsed_seconds,
                r.results.on_time_performance,
                r.results.passenger_satisfaction,
                r.results.energy_efficiency,
                r.results.total_passengers
            );
        }
        csv
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::SimulationParameters;
    use crate::simulator::run_scenario;

    fn sweep() -> SweepReport {
        let fast = SimulationParameters {
            speed: 5,
            ..Default::default()
        };
        let runs = vec![
            run_scenario(fast, 100).unwrap(),
            run_scenario(SimulationParameters::default(), 50).unwrap(),
        ];
        SweepReport::new(runs, Some(1))
    }

    #[test]
    fn test_aggregates() {
        let report = sweep();
        assert_eq!(report.completed(), 1);
        assert_eq!(report.avg_progress(), 75.0);
        assert_eq!(report.avg_passengers(), (45000.0 + 22500.0) / 2.0);
    }

    #[test]
    fn test_csv_has_row_per_run() {
        let csv = sweep().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,schedule,clear,morning,10,75,5,completed,100.0,20,"));
        assert!(lines[2].contains(",stopped,50.0,50,"));
    }

    #[test]
    fn test_empty_sweep() {
        let report = SweepReport::new(Vec::new(), None);
        assert_eq!(report.avg_on_time(), 0.0);
        assert!(report.to_text().contains("(entropy)"));
    }
}
