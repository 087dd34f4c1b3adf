//! UI Constants
//!
//! Centralized layout and motion constants.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 540.0;

/// Maximum width of page content (max-w-6xl)
pub const CONTENT_MAX_WIDTH: f32 = 1152.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 56.0;

/// Offset between consecutive revealed elements
pub const REVEAL_STAGGER_MS: u64 = 120;

/// Fade-and-rise time of a single revealed element
pub const REVEAL_DURATION_MS: u64 = 500;

/// Starting downward offset of a hidden element
pub const REVEAL_RISE_PX: f32 = 12.0;

/// Visible fraction of a block that counts as entering the viewport
pub const REVEAL_THRESHOLD: f32 = 0.15;

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "landing.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "landing.log";
