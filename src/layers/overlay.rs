use crate::{core::config::ViewerConfig, tiles::source::PlanetTileSource};

/// Contract of the live tile-layer resource owned by the controller.
///
/// Implemented by whatever mapping surface hosts the overlay (a Leaflet-style
/// tile layer in the reference deployment). The controller only ever touches
/// these two mutations; tile fetching triggered by a URL change is entirely
/// the implementor's concern.
pub trait OverlayLayer {
    /// Retargets the layer at a new URL template (lowercase `{z}/{x}/{y}`
    /// placeholders)
    fn set_url(&mut self, template: &str);

    /// Applies an opacity fraction in `[0, 1]`
    fn set_opacity(&mut self, opacity: f64);
}

/// Owns the imagery date, overlay opacity, and derived tile templates.
///
/// User input flows in through [`set_opacity`](Self::set_opacity) and
/// [`load_tiles`](Self::load_tiles); the live overlay handle is exclusively
/// owned here and no other component may alter its URL or opacity.
pub struct TileOverlayController {
    source: PlanetTileSource,
    imagery_date: String,
    opacity_percent: u8,
    label: Option<String>,
    export_template: Option<String>,
    layer: Option<Box<dyn OverlayLayer>>,
}

impl TileOverlayController {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            source: PlanetTileSource::new(config.tile_host.clone()),
            imagery_date: config.default_date.clone(),
            opacity_percent: config.default_opacity,
            label: None,
            export_template: None,
            layer: None,
        }
    }

    /// Takes ownership of the live overlay once the map has created it.
    ///
    /// An opacity recorded before this point is not replayed; the layer keeps
    /// whatever opacity it was created with until the next
    /// [`set_opacity`](Self::set_opacity) call.
    pub fn attach_layer(&mut self, layer: Box<dyn OverlayLayer>) {
        self.layer = Some(layer);
    }

    /// Records the opacity percent and applies `percent / 100` to the live
    /// overlay.
    ///
    /// Silently skips the layer mutation when no overlay exists yet — the
    /// opacity control can emit before the map finishes initializing. The
    /// widget clamps to `[0, 100]`; the value is trusted as-is here.
    pub fn set_opacity(&mut self, percent: u8) {
        self.opacity_percent = percent;
        match self.layer.as_mut() {
            Some(layer) => layer.set_opacity(percent as f64 / 100.0),
            None => log::trace!("opacity {}% recorded before overlay exists", percent),
        }
    }

    /// Retargets the live overlay at the given imagery date and records the
    /// matching export template and label.
    ///
    /// The live URL and the export template are set together by this single
    /// operation so the exported template can never go stale relative to the
    /// layer. With no layer attached there is nothing to retarget, so the
    /// whole call is a no-op. The date is not validated; an empty or
    /// malformed string passes through verbatim into the URL and label.
    pub fn load_tiles(&mut self, date: &str) {
        let Some(layer) = self.layer.as_mut() else {
            log::trace!("load_tiles({:?}) before overlay exists, ignored", date);
            return;
        };

        let layer_template = self.source.layer_template(date);
        log::debug!("retargeting overlay at {}", layer_template);
        layer.set_url(&layer_template);

        self.imagery_date = date.to_string();
        self.label = Some(format!("Planet {}", date));
        self.export_template = Some(self.source.export_template(date));
    }

    /// Relative export template (uppercase placeholders), if tiles were ever
    /// loaded
    pub fn export_template(&self) -> Option<&str> {
        self.export_template.as_deref()
    }

    /// Absolute export template, host included, if tiles were ever loaded
    pub fn absolute_export_template(&self) -> Option<String> {
        self.export_template
            .as_deref()
            .map(|template| self.source.absolute(template))
    }

    /// Human-readable label for the currently loaded tiles
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether a tile layer has been loaded; export is gated on this
    pub fn has_tiles(&self) -> bool {
        self.export_template.is_some()
    }

    pub fn imagery_date(&self) -> &str {
        &self.imagery_date
    }

    pub fn opacity_percent(&self) -> u8 {
        self.opacity_percent
    }
}
