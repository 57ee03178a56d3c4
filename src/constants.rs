//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration defaults that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Default distance (meters) from the first polygon vertex within which a quick
/// click closes the ring
pub const DEFAULT_CLOSING_TOLERANCE_M: f64 = 20.0;

/// Default window (milliseconds) in which a second click counts as part of a double-click
pub const DEFAULT_DOUBLE_CLICK_WINDOW_MS: u64 = 300;

/// Accepted range (milliseconds) for the double-click window
pub const DOUBLE_CLICK_WINDOW_RANGE_MS: std::ops::RangeInclusive<u64> = 100..=1000;

/// Maximum cursor travel (pixels) between the two presses of a double-click
pub const DOUBLE_CLICK_MAX_TRAVEL_PX: f32 = 4.0;

/// Map center used when the config does not set one
pub const DEFAULT_MAP_CENTER: (f64, f64) = (51.505, -0.09);

/// Slippy-map zoom level used when the config does not set one
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// On-screen radius (pixels) of the anchor marker for box and circle creation
pub const ANCHOR_MARKER_RADIUS_PX: f32 = 5.0;

/// How long a cancellation notice stays in the toolbar (seconds)
pub const STATUS_MESSAGE_SECS: f32 = 4.0;
