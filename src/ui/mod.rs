// Module declarations
mod app;
pub mod museum;
pub mod planner;
pub mod splash;
// Re-exports for external use
pub use app::{App, Screen, UIConfig, run};
