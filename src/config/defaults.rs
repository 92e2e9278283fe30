// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Notification timing and drag thresholds
//! - **Map**: Tile source, initial viewport, zoom bounds

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default visible duration of a toast before auto-dismiss (milliseconds).
pub const DEFAULT_TOAST_TIMEOUT_MS: u64 = 3000;

/// Interval between auto-dismiss clock ticks (milliseconds).
pub const TOAST_TICK_MS: u64 = 100;

/// Default fraction of toast width a drag must cover to dismiss.
pub const DEFAULT_DRAGGABLE_PERCENT: f32 = 0.6;

/// Minimum drag-to-dismiss fraction.
pub const MIN_DRAGGABLE_PERCENT: f32 = 0.0;

/// Maximum drag-to-dismiss fraction.
pub const MAX_DRAGGABLE_PERCENT: f32 = 1.0;

// ==========================================================================
// Map Defaults
// ==========================================================================

/// Default tile style identifier (provider/style-name form).
pub const DEFAULT_MAP_STYLE: &str = "mapbox/streets-v12";

/// Default viewport center, longitude (degrees).
pub const DEFAULT_CENTER_LON: f64 = 13.405;

/// Default viewport center, latitude (degrees).
pub const DEFAULT_CENTER_LAT: f64 = 52.52;

/// Default viewport zoom level.
pub const DEFAULT_MAP_ZOOM: f64 = 12.0;

/// Minimum tile zoom level.
pub const MIN_MAP_ZOOM: f64 = 0.0;

/// Maximum tile zoom level supported by the tile scheme.
pub const MAX_MAP_ZOOM: f64 = 22.0;

/// Raster tile edge length in pixels.
pub const TILE_SIZE: u32 = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Toast validation
    assert!(DEFAULT_TOAST_TIMEOUT_MS > 0);
    assert!(TOAST_TICK_MS > 0);
    assert!(TOAST_TICK_MS < DEFAULT_TOAST_TIMEOUT_MS);
    assert!(MIN_DRAGGABLE_PERCENT >= 0.0);
    assert!(MAX_DRAGGABLE_PERCENT <= 1.0);
    assert!(DEFAULT_DRAGGABLE_PERCENT >= MIN_DRAGGABLE_PERCENT);
    assert!(DEFAULT_DRAGGABLE_PERCENT <= MAX_DRAGGABLE_PERCENT);

    // Map validation
    assert!(MIN_MAP_ZOOM >= 0.0);
    assert!(MAX_MAP_ZOOM > MIN_MAP_ZOOM);
    assert!(DEFAULT_MAP_ZOOM >= MIN_MAP_ZOOM);
    assert!(DEFAULT_MAP_ZOOM <= MAX_MAP_ZOOM);
    assert!(DEFAULT_CENTER_LON >= -180.0 && DEFAULT_CENTER_LON <= 180.0);
    assert!(DEFAULT_CENTER_LAT >= -90.0 && DEFAULT_CENTER_LAT <= 90.0);
    assert!(TILE_SIZE > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_are_valid() {
        assert_eq!(DEFAULT_TOAST_TIMEOUT_MS, 3000);
        assert_eq!(DEFAULT_DRAGGABLE_PERCENT, 0.6);
        assert!(DEFAULT_DRAGGABLE_PERCENT <= MAX_DRAGGABLE_PERCENT);
    }

    #[test]
    fn map_defaults_are_valid() {
        assert_eq!(DEFAULT_MAP_ZOOM, 12.0);
        assert!(DEFAULT_MAP_ZOOM >= MIN_MAP_ZOOM);
        assert!(DEFAULT_MAP_ZOOM <= MAX_MAP_ZOOM);
        assert!(!DEFAULT_MAP_STYLE.is_empty());
    }
}
