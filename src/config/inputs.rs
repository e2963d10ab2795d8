// src/config/inputs.rs
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::analysis::AnalysisError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InputField {
    BottlesPerYear,
    CorkWeightPerBottle,
    UtilizationRatePercent,
    UnitsPerYear,
    CorkPerUnit,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::BottlesPerYear => "Botellas año",
            InputField::CorkWeightPerBottle => "Peso corcho (kg)",
            InputField::UtilizationRatePercent => "Tasa aprovechamiento (%)",
            InputField::UnitsPerYear => "Unidades anuales",
            InputField::CorkPerUnit => "Corcho por producto (kg)",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five user-editable figures the dashboard is driven by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Inputs {
    pub bottles_per_year: i64,
    pub cork_weight_per_bottle: f64,
    pub utilization_rate_percent: u32,
    pub units_per_year: i64,
    pub cork_per_unit: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            bottles_per_year: 10000,
            cork_weight_per_bottle: 0.05,
            utilization_rate_percent: 70,
            units_per_year: 100,
            cork_per_unit: 1.3,
        }
    }
}

impl Inputs {
    pub const MAX_RATE: u32 = 100;

    /// Checks values the slider and drag widgets cannot produce but a
    /// hand-edited scenario file can.
    pub fn validate(&self) -> Vec<(InputField, AnalysisError)> {
        let mut problems = Vec::new();

        if !self.cork_weight_per_bottle.is_finite() {
            problems.push((
                InputField::CorkWeightPerBottle,
                AnalysisError::NonFinite { field: InputField::CorkWeightPerBottle },
            ));
        }
        if !self.cork_per_unit.is_finite() {
            problems.push((
                InputField::CorkPerUnit,
                AnalysisError::NonFinite { field: InputField::CorkPerUnit },
            ));
        }
        if self.utilization_rate_percent > Self::MAX_RATE {
            problems.push((
                InputField::UtilizationRatePercent,
                AnalysisError::RateOutOfRange(self.utilization_rate_percent),
            ));
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let inputs = Inputs::default();
        assert_eq!(inputs.bottles_per_year, 10000);
        assert_eq!(inputs.cork_weight_per_bottle, 0.05);
        assert_eq!(inputs.utilization_rate_percent, 70);
        assert_eq!(inputs.units_per_year, 100);
        assert_eq!(inputs.cork_per_unit, 1.3);
        assert!(inputs.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_offending_fields() {
        let inputs = Inputs {
            cork_per_unit: f64::NAN,
            utilization_rate_percent: 140,
            ..Inputs::default()
        };
        let fields: Vec<InputField> = inputs.validate().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![InputField::CorkPerUnit, InputField::UtilizationRatePercent]);
    }

    #[test]
    fn test_zero_rate_is_a_valid_input() {
        let inputs = Inputs {
            utilization_rate_percent: 0,
            ..Inputs::default()
        };
        assert!(inputs.validate().is_empty());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let inputs: Inputs = ron::from_str("(units_per_year: 250)").unwrap();
        assert_eq!(inputs.units_per_year, 250);
        assert_eq!(inputs.bottles_per_year, 10000);
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(InputField::BottlesPerYear.to_string(), "Botellas año");
        assert_eq!(InputField::CorkPerUnit.label(), "Corcho por producto (kg)");
    }
}
