use anyhow::{Result, anyhow};
use std::path::Path;
use tracing::info;
use crate::analysis::ChartSeries;
use crate::config::ScenarioFile;

pub mod scenario;
pub mod export;

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}

#[derive(Debug)]
pub struct FileManager {
    scenario_handler: scenario::ScenarioFileHandler,
}

impl FileManager {
    pub fn new() -> Self {
        Self {
            scenario_handler: scenario::ScenarioFileHandler::new(),
        }
    }

    pub fn load_scenario(&self, path: &Path) -> Result<ScenarioFile> {
        if !path.exists() {
            return Err(anyhow!("Scenario file not found: {}", path.display()));
        }

        let scenario = self.scenario_handler.load(path)?;
        info!(name = %scenario.name, path = %path.display(), "loaded scenario");
        Ok(scenario)
    }

    pub fn save_scenario(&self, scenario: &ScenarioFile, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(anyhow!("Directory does not exist: {}", parent.display()));
            }
        }

        self.scenario_handler.save(scenario, path)?;
        info!(name = %scenario.name, path = %path.display(), "saved scenario");
        Ok(())
    }

    pub fn export_chart(&self, chart: &ChartSeries, path: &Path) -> Result<()> {
        export::export_chart_csv(path, chart)?;
        info!(path = %path.display(), rows = chart.len(), "exported chart");
        Ok(())
    }
}
