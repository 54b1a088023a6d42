pub mod overlay;

// Re-exports for convenience
pub use overlay::{OverlayLayer, TileOverlayController};
