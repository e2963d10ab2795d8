// src/config/scenario.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;
use super::Inputs;

/// A named set of inputs as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub created: DateTime<Utc>,
    pub inputs: Inputs,
}

impl ScenarioFile {
    pub fn new(name: impl Into<String>, inputs: Inputs) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            version: env!("CARGO_PKG_VERSION").to_string(),
            created: Utc::now(),
            inputs,
        }
    }
}

impl Default for ScenarioFile {
    fn default() -> Self {
        Self::new("Escenario base", Inputs::default())
    }
}
