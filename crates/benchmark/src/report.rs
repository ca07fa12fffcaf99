//! Replay reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use stowage_core::{ItemId, PackStrategy};

use crate::scenario::Scenario;

/// Metrics for one replayed step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    /// Step index within the scenario.
    pub step: usize,
    /// Items requested at this step.
    pub items: usize,
    /// Items actually placed in the grid.
    pub placed: usize,
    /// Ids dropped at this step.
    pub dropped: Vec<ItemId>,
    /// Packing path taken.
    pub strategy: PackStrategy,
    /// Cells that items surviving from the previous step had to give up.
    /// Zero means the layout stayed visually stable.
    pub displaced_cells: usize,
    /// Occupied fraction of the bay after this step.
    pub utilization: f64,
    /// Wall-clock time for the packing call, in microseconds.
    pub time_us: u64,
}

/// Aggregate metrics for one scenario replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario name.
    pub scenario: String,
    /// Bay capacity the scenario ran against.
    pub capacity: usize,
    /// Per-step metrics in replay order.
    pub steps: Vec<StepReport>,
    /// Steps that escalated to a full repack.
    pub full_repacks: usize,
    /// Total displaced cells across all steps.
    pub total_displaced: usize,
    /// Total drops across all steps.
    pub total_dropped: usize,
    /// Wall-clock time for the whole replay, in microseconds.
    pub time_us: u64,
}

impl ScenarioReport {
    /// Builds a report from per-step metrics, computing the aggregates.
    pub fn new(scenario: &Scenario, steps: Vec<StepReport>, time_us: u64) -> Self {
        let full_repacks = steps
            .iter()
            .filter(|s| s.strategy == PackStrategy::Full)
            .count();
        let total_displaced = steps.iter().map(|s| s.displaced_cells).sum();
        let total_dropped = steps.iter().map(|s| s.dropped.len()).sum();
        Self {
            scenario: scenario.name.clone(),
            capacity: scenario.capacity,
            steps,
            full_repacks,
            total_displaced,
            total_dropped,
            time_us,
        }
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scenario '{}' (capacity {}, {} steps)",
            self.scenario,
            self.capacity,
            self.steps.len()
        )?;
        writeln!(
            f,
            "  {:<5} {:>5} {:>6} {:<12} {:>9} {:>7} {:>8} {:>8}",
            "step", "items", "placed", "strategy", "displaced", "dropped", "util", "time"
        )?;
        for step in &self.steps {
            let strategy = match step.strategy {
                PackStrategy::Incremental => "incremental",
                PackStrategy::Full => "full",
            };
            writeln!(
                f,
                "  {:<5} {:>5} {:>6} {:<12} {:>9} {:>7} {:>7.1}% {:>6}us",
                step.step,
                step.items,
                step.placed,
                strategy,
                step.displaced_cells,
                step.dropped.len(),
                step.utilization * 100.0,
                step.time_us
            )?;
        }
        write!(
            f,
            "  totals: {} full repacks, {} displaced cells, {} dropped, {}us",
            self.full_repacks, self.total_displaced, self.total_dropped, self.time_us
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioStep;

    fn step(index: usize, strategy: PackStrategy, displaced: usize, dropped: usize) -> StepReport {
        StepReport {
            step: index,
            items: 3,
            placed: 3 - dropped,
            dropped: (0..dropped).map(|i| format!("d{i}")).collect(),
            strategy,
            displaced_cells: displaced,
            utilization: 0.5,
            time_us: 10,
        }
    }

    #[test]
    fn test_report_aggregates() {
        let scenario = Scenario {
            name: "demo".to_string(),
            capacity: 16,
            steps: vec![ScenarioStep { items: vec![] }],
        };
        let report = ScenarioReport::new(
            &scenario,
            vec![
                step(0, PackStrategy::Incremental, 0, 0),
                step(1, PackStrategy::Full, 4, 1),
                step(2, PackStrategy::Incremental, 0, 0),
            ],
            99,
        );
        assert_eq!(report.full_repacks, 1);
        assert_eq!(report.total_displaced, 4);
        assert_eq!(report.total_dropped, 1);
        assert_eq!(report.time_us, 99);
    }

    #[test]
    fn test_report_display_mentions_totals() {
        let scenario = Scenario {
            name: "demo".to_string(),
            capacity: 16,
            steps: vec![ScenarioStep { items: vec![] }],
        };
        let report =
            ScenarioReport::new(&scenario, vec![step(0, PackStrategy::Full, 2, 1)], 42);
        let text = format!("{report}");
        assert!(text.contains("Scenario 'demo'"));
        assert!(text.contains("1 full repacks"));
        assert!(text.contains("2 displaced cells"));
    }
}
