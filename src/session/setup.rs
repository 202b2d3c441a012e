//! Session setup and initialization

use crate::config::Config;
use crate::museum::{Catalog, Navigator};
use crate::ui::UIConfig;

/// Flags given on the command line for a tour. They only ever switch
/// features off or tighten behavior relative to the saved configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TourOptions {
    pub no_sound: bool,
    pub no_background: bool,
    pub exclusive_modals: bool,
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Navigator positioned at the entrance
    pub navigator: Navigator,
    /// UI settings for the TUI
    pub ui_config: UIConfig,
}

/// Builds the navigator and UI settings from the saved config and the flags.
pub fn setup_session(config: &Config, options: TourOptions) -> SessionData {
    let mut config = config.clone();
    if options.no_sound {
        config.sound_enabled = false;
    }
    if options.no_background {
        config.with_background_color = false;
    }
    if options.exclusive_modals {
        config.exclusive_modals = true;
    }

    let mut navigator = Navigator::new(Catalog::portfolio(), config.modal_policy());
    navigator.set_sound_enabled(config.sound_enabled);
    log::debug!(
        "Tour set up with {:?} modals, sound {}",
        navigator.policy(),
        if config.sound_enabled { "on" } else { "off" }
    );

    SessionData {
        navigator,
        ui_config: UIConfig::new(config.with_background_color),
    }
}
