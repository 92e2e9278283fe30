// SPDX-License-Identifier: MPL-2.0
//! Shared handle to the map tile backend.
//!
//! The client is constructed once at startup from the persisted map
//! configuration and shared down the component tree as an `Arc`; views
//! borrow it, they never own it. It resolves tile URLs for the configured
//! style and carries the initial viewport, nothing more — tile fetching and
//! rendering live with whichever pane consumes the handle.

use crate::config::defaults::{MAX_MAP_ZOOM, MIN_MAP_ZOOM, TILE_SIZE};
use crate::config::MapConfig;
use std::sync::Arc;

/// Shared reference to the application's single map client.
pub type SharedMapClient = Arc<MapClient>;

/// Creates the shared map client from persisted settings.
#[must_use]
pub fn create_map_client(config: &MapConfig) -> SharedMapClient {
    Arc::new(MapClient::from_config(config))
}

/// A map viewport: center coordinates plus zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Longitude of the center, degrees.
    pub lon: f64,
    /// Latitude of the center, degrees.
    pub lat: f64,
    /// Zoom level, clamped to the tile scheme's supported range.
    pub zoom: f64,
}

impl Viewport {
    /// Creates a viewport, clamping each component to its valid range.
    #[must_use]
    pub fn new(lon: f64, lat: f64, zoom: f64) -> Self {
        Self {
            lon: lon.clamp(-180.0, 180.0),
            lat: lat.clamp(-90.0, 90.0),
            zoom: zoom.clamp(MIN_MAP_ZOOM, MAX_MAP_ZOOM),
        }
    }
}

/// Handle to the map tile backend.
#[derive(Debug, Clone, PartialEq)]
pub struct MapClient {
    access_token: Option<String>,
    style: String,
    viewport: Viewport,
}

impl MapClient {
    /// Creates a client for a style with an optional provider token.
    #[must_use]
    pub fn new(style: impl Into<String>, access_token: Option<String>, viewport: Viewport) -> Self {
        Self {
            access_token,
            style: style.into(),
            viewport,
        }
    }

    /// Builds a client from the persisted map configuration.
    #[must_use]
    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(
            config.style.clone(),
            config.access_token.clone(),
            Viewport::new(config.center_lon, config.center_lat, config.zoom),
        )
    }

    /// Style identifier in `provider/style-name` form.
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// The initial viewport from configuration.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the client carries a provider access token.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Attribution line the map pane must display.
    #[must_use]
    pub fn attribution(&self) -> &'static str {
        "© Mapbox © OpenStreetMap contributors"
    }

    /// Resolves the raster tile URL for slippy-map coordinates.
    ///
    /// The zoom level is clamped to the supported range and the x column
    /// wraps around the antimeridian; the y row is clamped to the grid.
    #[must_use]
    pub fn tile_url(&self, zoom: u32, x: u64, y: u64) -> String {
        let zoom = zoom.min(MAX_MAP_ZOOM as u32);
        let tiles_per_axis = 1u64 << zoom;
        let x = x % tiles_per_axis;
        let y = y.min(tiles_per_axis - 1);

        let mut url = format!(
            "https://api.mapbox.com/styles/v1/{}/tiles/{}/{}/{}/{}",
            self.style, TILE_SIZE, zoom, x, y
        );
        if let Some(token) = &self.access_token {
            url.push_str("?access_token=");
            url.push_str(token);
        }
        url
    }
}

/// Slippy-map tile coordinates containing the viewport center.
#[must_use]
pub fn center_tile(viewport: Viewport) -> (u32, u64, u64) {
    let zoom = viewport.zoom.clamp(MIN_MAP_ZOOM, MAX_MAP_ZOOM).floor() as u32;
    let tiles_per_axis = 1u64 << zoom;
    let n = tiles_per_axis as f64;

    let x = ((viewport.lon + 180.0) / 360.0 * n).floor() as u64;
    let lat_rad = viewport.lat.to_radians();
    let y = ((1.0 - lat_rad.tan().asinh() / std::f64::consts::PI) / 2.0 * n).floor() as u64;

    // Poles fall outside the Mercator tile grid; pin them to the edge rows.
    (
        zoom,
        x.min(tiles_per_axis - 1),
        y.min(tiles_per_axis - 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DEFAULT_MAP_STYLE;

    fn client_with_token() -> MapClient {
        MapClient::new(
            DEFAULT_MAP_STYLE,
            Some("pk.test".to_string()),
            Viewport::new(13.405, 52.52, 12.0),
        )
    }

    #[test]
    fn tile_url_includes_style_and_token() {
        let url = client_with_token().tile_url(12, 2200, 1343);
        assert_eq!(
            url,
            "https://api.mapbox.com/styles/v1/mapbox/streets-v12/tiles/256/12/2200/1343?access_token=pk.test"
        );
    }

    #[test]
    fn tile_url_omits_token_when_absent() {
        let client = MapClient::from_config(&MapConfig::default());
        let url = client.tile_url(3, 4, 2);
        assert!(!url.contains("access_token"));
        assert!(url.ends_with("/tiles/256/3/4/2"));
    }

    #[test]
    fn tile_url_clamps_zoom_to_supported_range() {
        let url = client_with_token().tile_url(40, 0, 0);
        assert!(url.contains("/tiles/256/22/"));
    }

    #[test]
    fn tile_x_wraps_around_the_antimeridian() {
        let client = client_with_token();
        // At zoom 2 there are 4 columns; column 5 wraps to column 1.
        assert_eq!(client.tile_url(2, 5, 0), client.tile_url(2, 1, 0));
    }

    #[test]
    fn tile_y_is_clamped_to_the_grid() {
        let client = client_with_token();
        assert_eq!(client.tile_url(1, 0, 9), client.tile_url(1, 0, 1));
    }

    #[test]
    fn viewport_clamps_out_of_range_values() {
        let viewport = Viewport::new(200.0, -100.0, 99.0);
        assert_eq!(viewport.lon, 180.0);
        assert_eq!(viewport.lat, -90.0);
        assert_eq!(viewport.zoom, MAX_MAP_ZOOM);
    }

    #[test]
    fn from_config_carries_the_configured_viewport() {
        let config = MapConfig {
            center_lon: 2.3522,
            center_lat: 48.8566,
            zoom: 9.0,
            ..MapConfig::default()
        };
        let client = MapClient::from_config(&config);
        assert_eq!(client.viewport(), Viewport::new(2.3522, 48.8566, 9.0));
    }

    #[test]
    fn center_tile_matches_known_coordinates() {
        // Berlin at zoom 12 sits in tile 2200/1343.
        let (zoom, x, y) = center_tile(Viewport::new(13.405, 52.52, 12.0));
        assert_eq!((zoom, x, y), (12, 2200, 1343));
    }

    #[test]
    fn center_tile_pins_poles_to_the_grid_edge() {
        let (_, _, y_north) = center_tile(Viewport::new(0.0, 90.0, 4.0));
        let (_, _, y_south) = center_tile(Viewport::new(0.0, -90.0, 4.0));
        assert_eq!(y_north, 0);
        assert_eq!(y_south, 15);
    }

    #[test]
    fn shared_client_is_one_instance() {
        let shared = create_map_client(&MapConfig::default());
        let clone = Arc::clone(&shared);
        assert!(Arc::ptr_eq(&shared, &clone));
    }
}
