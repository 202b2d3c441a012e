//! Student planner screen

pub mod renderer;
pub mod state;

pub use renderer::render_planner;
pub use state::PlannerState;
