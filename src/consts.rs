pub mod cli_consts {
    //! Application Constants
    //!
    //! Timing, storage and layout constants for the museum and the planner,
    //! organized by functional area.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // ROOMS AND MODALS
    // =============================================================================

    /// Room shown when a session starts.
    pub const ENTRANCE_ROOM: &str = "entrance";

    /// Modal holding the avatar / about-me card.
    pub const AVATAR_MODAL: &str = "avatarModal";

    /// Modal presenting the currently inspected exhibit.
    pub const EXHIBIT_MODAL: &str = "exhibitModal";

    /// Link value meaning "no real project link yet".
    pub const PLACEHOLDER_LINK: &str = "#";

    /// Category used for exhibits missing from the category table.
    pub const DEFAULT_CATEGORY: &str = "Project";

    /// Presentation timings, all in milliseconds.
    pub mod timing {
        use std::time::Duration;

        /// Delay before the entrance intro animation is replayed.
        pub const INTRO_REPLAY_MS: u64 = 10;
        /// Delay before the scroll position is forced to the top a second time.
        pub const SCROLL_RECHECK_MS: u64 = 50;
        /// Delay before frames in a newly shown room start animating.
        pub const FRAME_ANIMATION_MS: u64 = 100;
        /// Per-frame stagger of the entrance animation.
        pub const FRAME_STAGGER_MS: u64 = 100;
        /// Delay before a closed modal drops its hidden marker.
        pub const MODAL_RESET_MS: u64 = 300;
        /// Default time a toast stays on screen.
        pub const TOAST_DURATION_MS: u64 = 3000;
        /// Fade-out tail after a toast expires.
        pub const TOAST_FADE_MS: u64 = 300;
        /// Delay before the follow-up resume toast.
        pub const RESUME_FOLLOW_UP_MS: u64 = 1000;

        pub const fn ms(value: u64) -> Duration {
            Duration::from_millis(value)
        }
    }

    // =============================================================================
    // PLANNER STORAGE
    // =============================================================================

    /// Storage key holding the serialized dashboard record.
    pub const PLANNER_STORAGE_KEY: &str = "plannerData";

    /// Directory under the user's home holding config and storage files.
    pub const APP_DIR: &str = ".museum";

    /// File name of the application configuration.
    pub const CONFIG_FILE: &str = "config.json";

    /// File name of the key-value storage backing the planner.
    pub const STORAGE_FILE: &str = "storage.json";

    // =============================================================================
    // UI LOOP
    // =============================================================================

    /// Poll interval of the TUI event loop (milliseconds).
    pub const UI_POLL_MS: u64 = 100;

    /// How long the splash screen is displayed (seconds).
    pub const SPLASH_SECS: u64 = 2;
}
