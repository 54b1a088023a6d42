pub mod caltopo;

// Re-exports for convenience
pub use caltopo::{build_export_link, ExportLinkState};
