// src/state/dashboard_state.rs
use crate::analysis::{
    AnalysisError,
    AvailabilityCalculator,
    ChartProjector,
    ChartSeries,
    Readout,
    RequirementCalculator,
};
use crate::config::{InputField, Inputs};

/// Everything derived from one set of inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub inputs: Inputs,
    pub availability: Readout,
    pub requirement: Readout,
    pub chart: Result<ChartSeries, AnalysisError>,
}

impl DashboardState {
    /// Runs the calculators and then the chart projection on their formatted output.
    pub fn compute(inputs: &Inputs) -> Self {
        let availability = AvailabilityCalculator::compute(inputs);
        let requirement = RequirementCalculator::compute(inputs);
        let chart = ChartProjector::project(&availability.text, &requirement.text);

        Self {
            inputs: inputs.clone(),
            availability,
            requirement,
            chart,
        }
    }

    /// Messages to draw under each input widget.
    pub fn field_errors(&self, field: InputField) -> Vec<&AnalysisError> {
        self.availability.error()
            .into_iter()
            .chain(self.requirement.error())
            .filter(|err| Self::blames(err, field))
            .collect()
    }

    fn blames(err: &AnalysisError, field: InputField) -> bool {
        match err {
            AnalysisError::ZeroUtilization | AnalysisError::RateOutOfRange(_) => {
                field == InputField::UtilizationRatePercent
            }
            AnalysisError::NonFinite { field: culprit } => *culprit == field,
            AnalysisError::Unparseable { .. } => false,
        }
    }
}
