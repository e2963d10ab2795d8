// src/file/export.rs
use std::path::Path;
use anyhow::{Result, Context};
use csv::Writer;
use crate::analysis::ChartSeries;

/// Writes the plotted series as one CSV row per axis point.
pub fn export_chart_csv<P: AsRef<Path>>(path: P, chart: &ChartSeries) -> Result<()> {
    let path = path.as_ref();
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record([
        chart.labels.x_label,
        crate::analysis::RECOVERED_SERIES,
        crate::analysis::REQUIRED_SERIES,
    ])?;

    for ((pct, recovered), required) in chart.recovery_percent.iter()
        .zip(&chart.recovered)
        .zip(&chart.required)
    {
        writer.write_record(&[
            pct.to_string(),
            recovered.to_string(),
            required.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
