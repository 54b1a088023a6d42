//! Facade tying the viewport tracker and overlay controller together.
//!
//! Plays the role the web component plays in the reference deployment:
//! navigation-settled notifications from the map surface flow into the
//! tracker, user input flows into the controller, and the export link is
//! assembled on demand from both. Setters perform their side effects
//! directly; there is no implicit change observation.

use crate::{
    core::{
        config::ViewerConfig,
        geo::LatLngBounds,
        viewport::ViewportTracker,
    },
    export::caltopo::{self, ExportLinkState},
    layers::overlay::{OverlayLayer, TileOverlayController},
    Result,
};

pub struct PlanetViewer {
    viewport: ViewportTracker,
    overlay: TileOverlayController,
}

impl PlanetViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            viewport: ViewportTracker::new(config.start_center, config.start_zoom),
            overlay: TileOverlayController::new(&config),
        }
    }

    /// Hands the live overlay layer to the controller once the map surface
    /// has created it
    pub fn attach_overlay(&mut self, layer: Box<dyn OverlayLayer>) {
        self.overlay.attach_layer(layer);
    }

    /// Forwarded from the map's navigation-settled event (Leaflet `moveend`)
    pub fn on_viewport_settled(&mut self, zoom: u8, bounds: LatLngBounds) {
        self.viewport.on_viewport_settled(zoom, bounds);
    }

    /// Forwarded from the opacity slider, percent in `[0, 100]`
    pub fn set_opacity(&mut self, percent: u8) {
        self.overlay.set_opacity(percent);
    }

    /// Forwarded from the date input's load action
    pub fn load_tiles(&mut self, date: &str) {
        self.overlay.load_tiles(date);
    }

    /// The CalTopo deep link for the current view, or `None` while no tile
    /// layer has been loaded (the export action stays hidden until then).
    ///
    /// Recomputed from live state on every call; nothing is cached.
    pub fn export_link(&self) -> Result<Option<String>> {
        let Some(tile_template) = self.overlay.absolute_export_template() else {
            return Ok(None);
        };
        // A label is recorded by the same operation that records the template
        let label = self.overlay.label().unwrap_or_default().to_string();

        let link = caltopo::build_export_link(&ExportLinkState {
            label,
            tile_template,
            center: self.viewport.center(),
            zoom: self.viewport.zoom(),
        })?;
        Ok(Some(link))
    }

    /// Human-readable label for the currently loaded tiles, shown next to
    /// the export action
    pub fn tile_label(&self) -> Option<&str> {
        self.overlay.label()
    }

    pub fn viewport(&self) -> &ViewportTracker {
        &self.viewport
    }

    pub fn overlay(&self) -> &TileOverlayController {
        &self.overlay
    }
}

impl Default for PlanetViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
