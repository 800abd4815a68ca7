pub mod args;
pub mod dco;
pub mod pwm;
pub mod report;
pub mod timer;

// Re-export commonly used types
pub use args::Args;
pub use report::{DesignConfig, DesignReport, Timer0Mode};
pub use timer::PrescalerSelection;
