//! Scenario replay against the packing engine.

use std::collections::HashSet;
use std::time::Instant;

use stowage_core::{Item, PackedGrid};
use stowage_grid::GridStore;

use crate::report::{ScenarioReport, StepReport};
use crate::scenario::Scenario;

/// Configuration for a scenario replay.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Print the grid after every step.
    pub show_grid: bool,
}

/// Replays scenarios step by step, carrying the bay's previous grid
/// between calls the way an interactive caller would.
pub struct ScenarioRunner {
    config: RunConfig,
}

impl ScenarioRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Replays a scenario and reports per-step and aggregate metrics.
    pub fn run(&self, scenario: &Scenario) -> ScenarioReport {
        let mut store = GridStore::new();
        let mut steps = Vec::with_capacity(scenario.steps.len());
        let mut previous: Option<(PackedGrid, Vec<Item>)> = None;
        let started = Instant::now();

        for (index, step) in scenario.steps.iter().enumerate() {
            let step_started = Instant::now();
            let result = store.pack(&scenario.name, &step.items, scenario.capacity);
            let time_us = step_started.elapsed().as_micros() as u64;

            let displaced = previous
                .as_ref()
                .map(|(grid, items)| displaced_cells(grid, &result.grid, items, &step.items))
                .unwrap_or(0);

            if self.config.show_grid {
                println!("step {index}:\n{}\n", result.grid);
            }

            steps.push(StepReport {
                step: index,
                items: step.items.len(),
                placed: result.placed_count(),
                dropped: result.unplaced.clone(),
                strategy: result.strategy,
                displaced_cells: displaced,
                utilization: result.utilization(),
                time_us,
            });
            previous = Some((result.grid.clone(), step.items.clone()));
        }

        ScenarioReport::new(scenario, steps, started.elapsed().as_micros() as u64)
    }
}

/// Counts cells that items present in both steps had to give up between
/// two consecutive grids.
fn displaced_cells(
    prev: &PackedGrid,
    next: &PackedGrid,
    prev_items: &[Item],
    items: &[Item],
) -> usize {
    let mut displaced = 0;
    for item in items {
        if !prev_items.iter().any(|p| p.id == item.id) {
            continue;
        }
        let after: HashSet<usize> = next.region_of(&item.id).into_iter().collect();
        displaced += prev
            .region_of(&item.id)
            .iter()
            .filter(|idx| !after.contains(idx))
            .count();
    }
    displaced
}
