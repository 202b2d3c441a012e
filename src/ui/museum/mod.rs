//! Museum screen
//!
//! Split into state, updaters, input handling and rendering components

pub mod components;
pub mod input;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

pub use input::KeyOutcome;
pub use renderer::render_museum;
pub use state::MuseumState;
