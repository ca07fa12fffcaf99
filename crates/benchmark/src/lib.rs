//! Scenario replay suite for the stowage engine
//!
//! This crate provides:
//! - Built-in add/remove scenarios and a JSON scenario loader
//! - A replay runner that carries the bay's previous grid between calls
//! - Stability and utilization reporting per step and per scenario

mod report;
mod runner;
mod scenario;

pub use report::{ScenarioReport, StepReport};
pub use runner::{RunConfig, ScenarioRunner};
pub use scenario::{Scenario, ScenarioError, ScenarioStep};
