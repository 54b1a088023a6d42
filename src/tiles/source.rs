//! Tile-source URL templates for the Planet imagery proxy.
//!
//! Two template casings exist on purpose and must stay distinct: the live
//! map layer substitutes the lowercase `{z}/{x}/{y}` placeholders, while
//! CalTopo's custom-layer parser expects the uppercase `{Z}/{X}/{Y}` form.
//! Do not unify them.

/// Builds tile URL templates for a given imagery date.
///
/// The path shape is fixed; only the `date` query parameter varies. Dates are
/// passed through verbatim — an empty or malformed date produces a template
/// that fetches broken tiles, which is a visible but non-crashing failure the
/// viewer accepts rather than validating here.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetTileSource {
    host: String,
}

impl PlanetTileSource {
    /// `host` is prepended only to the exported form; the live layer stays
    /// relative to the serving origin.
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Template applied to the live overlay layer (lowercase placeholders)
    pub fn layer_template(&self, date: &str) -> String {
        format!("/api/tile/{{z}}/{{x}}/{{y}}.png?date={}", date)
    }

    /// Template recorded for export and user-facing copy (uppercase
    /// placeholders)
    pub fn export_template(&self, date: &str) -> String {
        format!("/api/tile/{{Z}}/{{X}}/{{Y}}.png?date={}", date)
    }

    /// Absolute form of a relative export template
    pub fn absolute(&self, template: &str) -> String {
        format!("{}{}", self.host, template)
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
