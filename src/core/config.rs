//! Viewer configuration
//!
//! All values that the original deployment carried as ambient globals are
//! explicit here and passed in at construction, so two viewers with
//! different tile hosts can coexist in one process.

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::viewer::PlanetViewer`] instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Host prepended to the relative tile template when exporting; CalTopo
    /// needs an absolute URL it can fetch from
    pub tile_host: String,
    /// Viewport center seeded before the first navigation event settles
    pub start_center: LatLng,
    /// Zoom level seeded alongside `start_center`
    pub start_zoom: u8,
    /// Imagery date preloaded into the date input
    pub default_date: String,
    /// Overlay opacity percent, `[0, 100]`
    pub default_opacity: u8,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tile_host: "https://planet.jeffheidel.com".to_string(),
            start_center: LatLng::new(47.5, -119.0),
            start_zoom: 7,
            default_date: "2020-09-30".to_string(),
            default_opacity: 100,
        }
    }
}
