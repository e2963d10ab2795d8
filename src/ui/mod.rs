pub mod about;
pub mod chart;
pub mod dashboard;
pub mod dialog;

pub use dialog::ScenarioDialog;
