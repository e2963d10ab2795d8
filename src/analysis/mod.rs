pub mod calculators;
pub mod error;
pub mod projection;

// Re-export commonly used types
pub use calculators::{
    AvailabilityCalculator,
    RequirementCalculator,
    Readout,
};
pub use error::AnalysisError;
pub use projection::{
    ChartProjector,
    ChartSeries,
    Crossing,
    RECOVERED_SERIES,
    REQUIRED_SERIES,
};
