pub mod headless_mode;
pub mod messages;
pub mod script;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::run_headless_mode;
pub use setup::{SessionData, TourOptions, setup_session};
pub use tui_mode::{run_screen, run_tui_mode};
