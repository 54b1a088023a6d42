pub mod config;
pub mod geo;
pub mod viewport;

// Re-exports for convenience
pub use config::ViewerConfig;
pub use geo::{LatLng, LatLngBounds};
pub use viewport::ViewportTracker;
