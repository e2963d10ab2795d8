// src/analysis/projection.rs
use std::ops::RangeInclusive;
use super::AnalysisError;

/// Recovery percentages plotted on the x axis.
pub const RECOVERY_AXIS: RangeInclusive<u32> = 1..=99;

pub const RECOVERED_SERIES: &str = "Material recuperado";
pub const REQUIRED_SERIES: &str = "Material requerido";

/// Text metadata the chart is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: &'static str,
    pub x_label: &'static str,
    pub value_label: &'static str,
    pub x_suffix: &'static str,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "Relación entre la tasa de recuperación y el requerimiento de materia prima",
            x_label: "% recuperación",
            value_label: "Toneladas",
            x_suffix: "%",
        }
    }
}

/// Where the recovered-material line meets the required-material line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    /// Reached inside the plotted axis.
    Within { rate: f64, closest_point: u32 },
    /// Would need a recovery rate above the last axis point.
    Beyond { rate: f64 },
    /// Nothing is available, so no recovery rate covers the requirement.
    Never,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub availability: f64,
    pub requirement: f64,
    pub recovery_percent: Vec<u32>,
    pub recovered: Vec<f64>,
    pub required: Vec<f64>,
    pub labels: ChartLabels,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.recovery_percent.len()
    }

    pub fn recovered_points(&self) -> Vec<[f64; 2]> {
        self.recovery_percent.iter()
            .zip(&self.recovered)
            .map(|(x, y)| [*x as f64, *y])
            .collect()
    }

    pub fn required_points(&self) -> Vec<[f64; 2]> {
        self.recovery_percent.iter()
            .zip(&self.required)
            .map(|(x, y)| [*x as f64, *y])
            .collect()
    }

    /// Both series at the axis point nearest to `x`, for the unified hover label.
    pub fn values_near(&self, x: f64) -> Option<(u32, f64, f64)> {
        let first = *RECOVERY_AXIS.start() as f64;
        let last = *RECOVERY_AXIS.end() as f64;
        if !x.is_finite() || x < first - 0.5 || x > last + 0.5 {
            return None;
        }
        let index = (x.round().clamp(first, last) - first) as usize;
        Some((self.recovery_percent[index], self.recovered[index], self.required[index]))
    }

    /// The minimum recovery rate at which recovered material covers the requirement.
    pub fn crossing(&self) -> Crossing {
        if self.availability <= 0.0 {
            return Crossing::Never;
        }

        let rate = (self.requirement * 100.0 / self.availability).max(0.0);
        let last = *RECOVERY_AXIS.end();
        if rate > last as f64 {
            return Crossing::Beyond { rate };
        }

        let closest_point = (rate.round() as u32).clamp(*RECOVERY_AXIS.start(), last);
        Crossing::Within { rate, closest_point }
    }
}

pub struct ChartProjector;

impl ChartProjector {
    /// Builds the chart from the two formatted readouts.
    ///
    /// The texts are the ones shown on the dashboard, so a readout that could not
    /// be derived fails here instead of producing a NaN chart.
    pub fn project(availability_text: &str, requirement_text: &str) -> Result<ChartSeries, AnalysisError> {
        let availability = parse_figure("disponibilidad", availability_text)?;
        let requirement = parse_figure("requerimiento", requirement_text)?;

        let recovery_percent: Vec<u32> = RECOVERY_AXIS.collect();
        let recovered = recovery_percent.iter()
            .map(|pct| *pct as f64 * availability / 100.0)
            .collect();
        let required = vec![requirement; recovery_percent.len()];

        Ok(ChartSeries {
            availability,
            requirement,
            recovery_percent,
            recovered,
            required,
            labels: ChartLabels::default(),
        })
    }
}

fn parse_figure(quantity: &'static str, text: &str) -> Result<f64, AnalysisError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AnalysisError::Unparseable {
            quantity,
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_is_one_to_ninety_nine() {
        let chart = ChartProjector::project("500.0", "185.7").unwrap();
        assert_eq!(chart.len(), 99);
        assert_eq!(chart.recovered.len(), 99);
        assert_eq!(chart.required.len(), 99);
        assert_eq!(chart.recovery_percent.first(), Some(&1));
        assert_eq!(chart.recovery_percent.last(), Some(&99));
        assert!(chart.recovery_percent.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_recovered_series_scales_availability() {
        let chart = ChartProjector::project("500.0", "185.7").unwrap();
        // axis point 37 sits at index 36
        assert!((chart.recovered[36] - 185.0).abs() < 1e-9);
        assert!((chart.recovered[98] - 495.0).abs() < 1e-9);
        assert!(chart.recovered.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_required_series_is_constant() {
        let chart = ChartProjector::project("500.0", "185.7").unwrap();
        assert!(chart.required.iter().all(|v| *v == 185.7));
    }

    #[test]
    fn test_crossing_for_default_inputs() {
        let chart = ChartProjector::project("500.0", "185.7").unwrap();
        match chart.crossing() {
            Crossing::Within { rate, closest_point } => {
                assert!((rate - 37.14).abs() < 1e-9);
                assert_eq!(closest_point, 37);
            }
            other => panic!("unexpected crossing {:?}", other),
        }
    }

    #[test]
    fn test_crossing_beyond_axis_and_never() {
        let chart = ChartProjector::project("100.0", "150.0").unwrap();
        assert_eq!(chart.crossing(), Crossing::Beyond { rate: 150.0 });

        let chart = ChartProjector::project("0.0", "10.0").unwrap();
        assert_eq!(chart.crossing(), Crossing::Never);
    }

    #[test]
    fn test_crossing_below_first_point_snaps_to_axis_start() {
        let chart = ChartProjector::project("1000.0", "2.0").unwrap();
        assert_eq!(chart.crossing(), Crossing::Within { rate: 0.2, closest_point: 1 });
    }

    #[test]
    fn test_values_near_picks_nearest_axis_point() {
        let chart = ChartProjector::project("500.0", "185.7").unwrap();
        let (pct, recovered, required) = chart.values_near(36.6).unwrap();
        assert_eq!(pct, 37);
        assert!((recovered - 185.0).abs() < 1e-9);
        assert_eq!(required, 185.7);
        assert!(chart.values_near(120.0).is_none());
        assert!(chart.values_near(f64::NAN).is_none());
    }

    #[test]
    fn test_malformed_text_is_rejected() {
        let err = ChartProjector::project("indefinido", "185.7").unwrap_err();
        assert_eq!(err, AnalysisError::Unparseable {
            quantity: "disponibilidad",
            text: "indefinido".to_string(),
        });
        assert!(ChartProjector::project("500.0", "").is_err());
        assert!(ChartProjector::project("500.0", "inf").is_err());
    }

    #[test]
    fn test_labels() {
        let chart = ChartProjector::project(" 500.0 ", "185.7").unwrap();
        assert_eq!(chart.labels.value_label, "Toneladas");
        assert_eq!(chart.labels.x_suffix, "%");
        assert_eq!(chart.availability, 500.0);
    }
}
