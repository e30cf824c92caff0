//! Application-level configuration constants.

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Debug;

// Launch sequence
pub const STEP_DELAY_MS: u32 = 1_000;
pub const FILL_TRANSITION_MS: u32 = 300;
pub const BUTTON_TRANSITION_MS: u32 = 250;

// Pager
pub const MAX_PAGE: usize = 50;
pub const DEFAULT_PAGE_WIDTH_PX: f64 = 360.0;
/// Fraction of the page width a slow drag must cover to flip one page.
pub const SWIPE_THRESHOLD_RATIO: f64 = 0.25;
pub const FLING_VELOCITY_PX_PER_MS: f64 = 0.5;
pub const MIN_FLING_DISTANCE_PX: f64 = 16.0;
/// Drag damping applied when pulling past the first or last page.
pub const EDGE_RESISTANCE: f64 = 1.0 / 3.0;
