//! # planet-viewer
//!
//! State core for a single-page viewer that overlays date-selectable
//! satellite imagery tiles on an interactive map and hands the current view
//! off to CalTopo via a generated deep link.
//!
//! The crate owns three things: deriving tile-source URL templates from the
//! user-selected imagery date, keeping viewport state in sync with settled
//! map navigation, and serializing both into CalTopo's double-encoded
//! nested-JSON link format. Map rendering, tile fetching, and input widgets
//! live outside this crate and are consumed through the contracts in
//! [`layers::overlay::OverlayLayer`] and
//! [`core::viewport::ViewportTracker::on_viewport_settled`].

pub mod core;
pub mod export;
pub mod layers;
pub mod tiles;
pub mod viewer;

// Re-export public API
pub use crate::core::{
    config::ViewerConfig,
    geo::{LatLng, LatLngBounds},
    viewport::ViewportTracker,
};

pub use layers::overlay::{OverlayLayer, TileOverlayController};

pub use export::caltopo::ExportLinkState;

pub use viewer::PlanetViewer;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
