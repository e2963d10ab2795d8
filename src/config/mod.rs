pub mod inputs;
pub mod scenario;
pub mod settings;

// Re-export commonly used types
pub use inputs::{Inputs, InputField};
pub use scenario::ScenarioFile;
pub use settings::AppSettings;
