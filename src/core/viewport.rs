use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Tracks the current view of the map: zoom level and geographic bounds.
///
/// The map surface is the only writer, through
/// [`on_viewport_settled`](Self::on_viewport_settled), and it must call that
/// only when continuous navigation (pan/zoom) comes to rest so downstream
/// consumers never see partial gesture states. Incoming values are trusted as
/// produced by the map; nothing here can fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportTracker {
    zoom: u8,
    bounds: LatLngBounds,
}

impl ViewportTracker {
    /// Seeds the tracker with a start center and zoom.
    ///
    /// The bounds collapse onto `center` until the first navigation event
    /// settles, so an export link is well-formed even before the user pans.
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self {
            zoom,
            bounds: LatLngBounds::from_point(center),
        }
    }

    /// Overwrites the tracked state wholesale with the settled view
    pub fn on_viewport_settled(&mut self, zoom: u8, bounds: LatLngBounds) {
        self.zoom = zoom;
        self.bounds = bounds;
    }

    /// The zoom level as of the most recently settled navigation event
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// The bounds as of the most recently settled navigation event
    pub fn bounds(&self) -> &LatLngBounds {
        &self.bounds
    }

    /// Center of the current bounds
    pub fn center(&self) -> LatLng {
        self.bounds.center()
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0)
    }
}
