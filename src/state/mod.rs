use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};
use tracing::{debug, info};

use crate::config::{AppSettings, Inputs, ScenarioFile};
use crate::file::FileManager;

pub mod dashboard_state;

pub use dashboard_state::DashboardState;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Dashboard,
    About,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Live inputs, edited in place by the widgets
    pub inputs: Inputs,
    pub dashboard: DashboardState,

    // Scenario on disk
    pub scenario: ScenarioFile,
    pub scenario_path: Option<PathBuf>,

    // Minimal UI state
    pub current_screen: Screen,
    pub error_message: Option<String>,

    pub settings: AppSettings,
    pub file_manager: FileManager,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        Self::with_inputs(settings, Inputs::default())
    }

    pub fn with_inputs(settings: AppSettings, inputs: Inputs) -> Self {
        let dashboard = DashboardState::compute(&inputs);
        Self {
            scenario: ScenarioFile::new("Escenario base", inputs.clone()),
            inputs,
            dashboard,
            scenario_path: None,
            current_screen: Screen::Dashboard,
            error_message: None,
            settings,
            file_manager: FileManager::new(),
        }
    }

    /// Recomputes every derived figure if the inputs moved since the last pass.
    /// Returns whether anything was recomputed.
    pub fn refresh(&mut self) -> bool {
        if self.dashboard.inputs == self.inputs {
            return false;
        }

        self.dashboard = DashboardState::compute(&self.inputs);
        debug!(
            availability = %self.dashboard.availability.text,
            requirement = %self.dashboard.requirement.text,
            "recomputed dashboard"
        );
        true
    }

    /// Back to the built-in defaults with a fresh, unsaved scenario.
    pub fn reset(&mut self) {
        self.inputs = Inputs::default();
        self.scenario = ScenarioFile::new("Escenario base", self.inputs.clone());
        self.scenario_path = None;
        self.error_message = None;
        self.refresh();
        info!("reset inputs to defaults");
    }

    pub fn open_scenario(&mut self, path: &Path) -> Result<()> {
        let scenario = self.file_manager.load_scenario(path)?;
        self.inputs = scenario.inputs.clone();
        self.scenario = scenario;
        self.scenario_path = Some(path.to_path_buf());
        self.refresh();
        Ok(())
    }

    pub fn save_scenario(&mut self) -> Result<()> {
        let path = self.scenario_path
            .clone()
            .ok_or_else(|| anyhow!("No scenario file selected"))?;
        self.save_scenario_as(&path)
    }

    pub fn save_scenario_as(&mut self, path: &Path) -> Result<()> {
        self.scenario.inputs = self.inputs.clone();
        self.file_manager.save_scenario(&self.scenario, path)?;
        self.scenario_path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn export_chart(&self, path: &Path) -> Result<()> {
        match &self.dashboard.chart {
            Ok(chart) => self.file_manager.export_chart(chart, path),
            Err(e) => Err(anyhow!("Chart is not available: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_only_when_inputs_change() {
        let mut state = AppState::new(AppSettings::default());
        assert!(!state.refresh());

        state.inputs.bottles_per_year = 20000;
        assert!(state.refresh());
        assert_eq!(state.dashboard.availability.text, "1000.0");
        assert!(!state.refresh());
    }

    #[test]
    fn test_derived_figures_follow_every_input() {
        let mut state = AppState::new(AppSettings::default());
        state.inputs.units_per_year = 200;
        state.inputs.utilization_rate_percent = 100;
        state.refresh();
        assert_eq!(state.dashboard.requirement.text, "260.0");

        state.inputs.utilization_rate_percent = 0;
        state.refresh();
        assert_eq!(state.dashboard.requirement.text, "indefinido");
        assert!(state.dashboard.chart.is_err());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = AppState::new(AppSettings::default());
        state.inputs.cork_per_unit = 9.0;
        state.scenario_path = Some(PathBuf::from("somewhere.ron"));
        state.refresh();

        state.reset();
        assert_eq!(state.inputs, Inputs::default());
        assert_eq!(state.dashboard.requirement.text, "185.7");
        assert!(state.scenario_path.is_none());
    }

    #[test]
    fn test_save_requires_a_path() {
        let mut state = AppState::new(AppSettings::default());
        assert!(state.save_scenario().is_err());
    }

    #[test]
    fn test_save_and_open_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("escenario.ron");

        let mut state = AppState::new(AppSettings::default());
        state.inputs.bottles_per_year = 4000;
        state.save_scenario_as(&path).unwrap();

        let mut other = AppState::new(AppSettings::default());
        other.open_scenario(&path).unwrap();
        assert_eq!(other.inputs.bottles_per_year, 4000);
        assert_eq!(other.dashboard.availability.text, "200.0");
        assert_eq!(other.scenario_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_export_without_chart_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new(AppSettings::default());
        state.inputs.utilization_rate_percent = 0;
        state.refresh();
        assert!(state.export_chart(&dir.path().join("chart.csv")).is_err());
    }
}
