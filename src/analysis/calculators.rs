// src/analysis/calculators.rs
use super::AnalysisError;
use crate::config::{InputField, Inputs};

/// Shown in place of a figure that could not be derived.
pub const UNDEFINED_MARKER: &str = "indefinido";

/// One decimal, the precision every readout on the dashboard uses.
pub fn format_kg(value: f64) -> String {
    format!("{:.1}", value)
}

/// Total cork on hand in kg: bottles sold per year times cork weight per bottle.
///
/// Zero and negative inputs are passed straight through.
pub fn availability(bottles_per_year: i64, cork_weight_per_bottle: f64) -> Result<f64, AnalysisError> {
    let total = bottles_per_year as f64 * cork_weight_per_bottle;
    if !total.is_finite() {
        return Err(AnalysisError::NonFinite { field: InputField::CorkWeightPerBottle });
    }
    Ok(total)
}

/// Total cork needed in kg to produce `units_per_year` units when only
/// `utilization_rate_percent` of the collected cork is usable.
pub fn requirement(
    units_per_year: i64,
    cork_per_unit: f64,
    utilization_rate_percent: u32,
) -> Result<f64, AnalysisError> {
    if utilization_rate_percent == 0 {
        return Err(AnalysisError::ZeroUtilization);
    }

    let total = units_per_year as f64 * cork_per_unit / (utilization_rate_percent as f64 / 100.0);
    if !total.is_finite() {
        return Err(AnalysisError::NonFinite { field: InputField::CorkPerUnit });
    }
    Ok(total)
}

/// A derived figure together with the text the dashboard shows for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub value: Result<f64, AnalysisError>,
    pub text: String,
}

impl Readout {
    fn from_result(value: Result<f64, AnalysisError>) -> Self {
        let text = match &value {
            Ok(v) => format_kg(*v),
            Err(_) => UNDEFINED_MARKER.to_string(),
        };
        Self { value, text }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        self.value.as_ref().err()
    }
}

pub struct AvailabilityCalculator;

impl AvailabilityCalculator {
    pub fn compute(inputs: &Inputs) -> Readout {
        Readout::from_result(availability(inputs.bottles_per_year, inputs.cork_weight_per_bottle))
    }
}

pub struct RequirementCalculator;

impl RequirementCalculator {
    pub fn compute(inputs: &Inputs) -> Readout {
        Readout::from_result(requirement(
            inputs.units_per_year,
            inputs.cork_per_unit,
            inputs.utilization_rate_percent,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_defaults() {
        let readout = AvailabilityCalculator::compute(&Inputs::default());
        assert_eq!(readout.text, "500.0");
        assert!(readout.error().is_none());
    }

    #[test]
    fn test_availability_passes_negative_inputs_through() {
        assert_eq!(format_kg(availability(-200, 0.05).unwrap()), "-10.0");
        assert_eq!(format_kg(availability(0, 0.05).unwrap()), "0.0");
    }

    #[test]
    fn test_availability_non_finite() {
        let err = availability(10, f64::INFINITY).unwrap_err();
        assert_eq!(err, AnalysisError::NonFinite { field: InputField::CorkWeightPerBottle });
    }

    #[test]
    fn test_requirement_defaults() {
        let readout = RequirementCalculator::compute(&Inputs::default());
        assert_eq!(readout.text, "185.7");
        let value = readout.value.unwrap();
        assert!((value - 130.0 / 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_requirement_full_utilization() {
        assert_eq!(format_kg(requirement(100, 1.3, 100).unwrap()), "130.0");
        assert_eq!(format_kg(requirement(40, 2.0, 50).unwrap()), "160.0");
    }

    #[test]
    fn test_requirement_zero_rate_is_undefined() {
        let inputs = Inputs {
            utilization_rate_percent: 0,
            ..Inputs::default()
        };
        let readout = RequirementCalculator::compute(&inputs);
        assert_eq!(readout.value, Err(AnalysisError::ZeroUtilization));
        assert_eq!(readout.text, UNDEFINED_MARKER);
    }

    #[test]
    fn test_requirement_does_not_enforce_rate_range() {
        // 130 kg at 200% utilization
        assert_eq!(format_kg(requirement(100, 1.3, 200).unwrap()), "65.0");
    }
}
