//! Replayable packing scenarios.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stowage_core::{validate_request, Item};

/// Errors raised while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Failed to read the scenario file.
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the scenario JSON.
    #[error("Failed to parse scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The scenario is structurally valid JSON but violates the input
    /// contract.
    #[error("Invalid scenario: {0}")]
    Invalid(String),
}

/// One recomputation request: the complete item list at that moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioStep {
    /// Items present in the bay at this step.
    pub items: Vec<Item>,
}

/// A named sequence of item-list snapshots replayed against one bay.
///
/// Each step is the full list the caller would submit, so adds and removes
/// are expressed by items appearing in or vanishing from consecutive steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name, also used as the bay identity during replay.
    pub name: String,
    /// Bay capacity in cells, fixed for the whole scenario.
    pub capacity: usize,
    /// Recomputation requests in replay order.
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Names of the built-in scenarios.
    pub fn builtin_names() -> &'static [&'static str] {
        &["growth", "churn", "hinted", "overflow"]
    }

    /// Looks up a built-in scenario by name.
    pub fn builtin(name: &str) -> Option<Scenario> {
        match name {
            "growth" => Some(Self::growth()),
            "churn" => Some(Self::churn()),
            "hinted" => Some(Self::hinted()),
            "overflow" => Some(Self::overflow()),
            _ => None,
        }
    }

    /// Parses a scenario from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Scenario, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reads a scenario from a JSON file and validates it.
    pub fn from_file(path: &Path) -> Result<Scenario, ScenarioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks the input contract: a usable capacity and, per step,
    /// non-empty unique ids and positive amounts.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.name.is_empty() {
            return Err(ScenarioError::Invalid("name must be non-empty".to_string()));
        }
        if self.steps.is_empty() {
            return Err(ScenarioError::Invalid("scenario has no steps".to_string()));
        }
        for (index, step) in self.steps.iter().enumerate() {
            validate_request(&step.items, self.capacity)
                .map_err(|err| ScenarioError::Invalid(format!("step {index}: {err}")))?;
        }
        Ok(())
    }

    /// Items added one at a time into a large bay; nothing is ever removed
    /// so every step should pack incrementally with no displacement.
    fn growth() -> Scenario {
        let amounts = [4, 2, 6, 1, 3, 5, 2, 4, 3, 6, 1, 2];
        let items: Vec<Item> = amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| Item::new(format!("crate-{i}"), amount))
            .collect();
        let steps = (1..=items.len())
            .map(|n| ScenarioStep {
                items: items[..n].to_vec(),
            })
            .collect();
        Scenario {
            name: "growth".to_string(),
            capacity: 60,
            steps,
        }
    }

    /// Interleaved adds and removes in a mid-sized bay.
    fn churn() -> Scenario {
        let steps: Vec<Vec<Item>> = vec![
            vec![
                Item::new("ore", 4),
                Item::new("scrap", 2),
                Item::new("hull-plates", 6),
            ],
            vec![
                Item::new("ore", 4),
                Item::new("scrap", 2),
                Item::new("hull-plates", 6),
                Item::new("coolant", 3),
                Item::new("fuse", 1),
            ],
            vec![
                Item::new("ore", 4),
                Item::new("hull-plates", 6),
                Item::new("coolant", 3),
                Item::new("fuse", 1),
            ],
            vec![
                Item::new("ore", 4),
                Item::new("hull-plates", 6),
                Item::new("coolant", 3),
                Item::new("fuse", 1),
                Item::new("cabling", 5),
                Item::new("sealant", 2),
            ],
            vec![
                Item::new("ore", 4),
                Item::new("coolant", 3),
                Item::new("cabling", 5),
                Item::new("sealant", 2),
            ],
            vec![
                Item::new("ore", 4),
                Item::new("coolant", 3),
                Item::new("cabling", 5),
                Item::new("sealant", 2),
                Item::new("rations", 4),
            ],
            vec![
                Item::new("coolant", 3),
                Item::new("cabling", 5),
                Item::new("sealant", 2),
                Item::new("rations", 4),
                Item::new("spare-coils", 6),
            ],
            vec![
                Item::new("coolant", 3),
                Item::new("cabling", 5),
                Item::new("sealant", 2),
                Item::new("rations", 4),
                Item::new("spare-coils", 6),
                Item::new("flares", 2),
                Item::new("beacon", 1),
            ],
        ];
        Scenario {
            name: "churn".to_string(),
            capacity: 30,
            steps: steps
                .into_iter()
                .map(|items| ScenarioStep { items })
                .collect(),
        }
    }

    /// Placement hints pin items where a user dropped them, including a
    /// remove-and-re-add that moves one item to a new anchor.
    fn hinted() -> Scenario {
        let steps: Vec<Vec<Item>> = vec![
            vec![
                Item::new("pallet", 4).with_position(0, 0),
                Item::new("toolbox", 2),
            ],
            vec![
                Item::new("pallet", 4).with_position(0, 0),
                Item::new("toolbox", 2),
                Item::new("spares", 6).with_position(2, 0),
            ],
            vec![
                Item::new("pallet", 4).with_position(0, 0),
                Item::new("spares", 6).with_position(2, 0),
            ],
            vec![
                Item::new("pallet", 4).with_position(0, 0),
                Item::new("spares", 6).with_position(2, 0),
                Item::new("toolbox", 2).with_position(0, 3),
            ],
        ];
        Scenario {
            name: "hinted".to_string(),
            capacity: 16,
            steps: steps
                .into_iter()
                .map(|items| ScenarioStep { items })
                .collect(),
        }
    }

    /// Demand grows past a tiny bay's capacity; later steps drop items and
    /// recover once space frees up again.
    fn overflow() -> Scenario {
        let steps: Vec<Vec<Item>> = vec![
            vec![Item::new("ration", 4)],
            vec![Item::new("ration", 4), Item::new("water", 2)],
            vec![
                Item::new("ration", 4),
                Item::new("water", 2),
                Item::new("fuel", 3),
            ],
            vec![Item::new("water", 2), Item::new("fuel", 3)],
        ];
        Scenario {
            name: "overflow".to_string(),
            capacity: 6,
            steps: steps
                .into_iter()
                .map(|items| ScenarioStep { items })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_valid() {
        for name in Scenario::builtin_names() {
            let scenario = Scenario::builtin(name).unwrap();
            assert_eq!(&scenario.name, name);
            scenario.validate().unwrap();
        }
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(Scenario::builtin("no-such-scenario").is_none());
    }

    #[test]
    fn test_parse_json_scenario() {
        let json = r#"{
            "name": "two-steps",
            "capacity": 16,
            "steps": [
                { "items": [ { "id": "a", "amount": 4 } ] },
                { "items": [
                    { "id": "a", "amount": 4 },
                    { "id": "b", "amount": 3, "position": { "row": 0, "col": 2 } }
                ] }
            ]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.capacity, 16);
        assert_eq!(scenario.steps.len(), 2);
        assert_eq!(
            scenario.steps[1].items[1].position,
            Some(stowage_core::CellPos::new(0, 2))
        );
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        assert!(matches!(
            Scenario::from_json("{ not json"),
            Err(ScenarioError::Json(_))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let json = r#"{
            "name": "dupes",
            "capacity": 16,
            "steps": [
                { "items": [ { "id": "a", "amount": 2 }, { "id": "a", "amount": 3 } ] }
            ]
        }"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert!(matches!(err, ScenarioError::Invalid(msg) if msg.contains("step 0")));
    }

    #[test]
    fn test_validate_rejects_empty_steps() {
        let json = r#"{ "name": "empty", "capacity": 16, "steps": [] }"#;
        assert!(Scenario::from_json(json).is_err());
    }
}
