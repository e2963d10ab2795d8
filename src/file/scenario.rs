// src/file/scenario.rs
use super::FileHandler;
use crate::config::ScenarioFile;
use std::path::Path;
use std::fs;
use anyhow::{Result, Context, anyhow};

#[derive(Debug)]
pub struct ScenarioFileHandler;

impl ScenarioFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<ScenarioFile> for ScenarioFileHandler {
    fn load(&self, path: &Path) -> Result<ScenarioFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
        let scenario: ScenarioFile = ron::from_str(&content)
            .with_context(|| format!("Failed to parse scenario file: {}", path.display()))?;

        if let Some((field, problem)) = scenario.inputs.validate().into_iter().next() {
            return Err(anyhow!("Invalid value for '{}' in {}: {}", field, path.display(), problem));
        }

        Ok(scenario)
    }

    fn save(&self, data: &ScenarioFile, path: &Path) -> Result<()> {
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
                .separate_tuple_members(true)
        )?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write scenario file: {}", path.display()))?;
        Ok(())
    }
}
