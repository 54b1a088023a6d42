//! CalTopo deep-link encoding.
//!
//! The link format is a byte-exact contract with caltopo.com and it is
//! brittle: two JSON descriptors ride in the URL fragment, one of them
//! percent-encoded twice because CalTopo decodes the `o=` segment once
//! before its own parser runs. Field order inside the descriptors is fixed
//! by struct declaration order below.

use crate::{core::geo::LatLng, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Fixed entry point of the external consumer
const CALTOPO_BASE: &str = "https://caltopo.com/map.html";

/// Matches JavaScript's `encodeURIComponent`: everything except
/// alphanumerics and `- _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Snapshot of everything the deep link carries, computed on demand from the
/// viewport tracker and overlay controller; never cached, since either input
/// may have changed since last computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportLinkState {
    /// Human-readable layer title shown inside CalTopo
    pub label: String,
    /// Absolute tile template with uppercase `{Z}/{X}/{Y}` placeholders
    pub tile_template: String,
    /// Viewport center in decimal degrees
    pub center: LatLng,
    /// Viewport zoom level
    pub zoom: u8,
}

/// Single-layer descriptor; rides double-encoded in the `o=cl_` segment
#[derive(Debug, Serialize)]
struct LayerDescriptor<'a> {
    template: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    maxzoom: &'a str,
}

/// Wrapping descriptor; rides once-encoded in the `cl=` segment
#[derive(Debug, Serialize)]
struct CustomLayers<'a> {
    custom: [CustomLayerEntry<'a>; 1],
}

#[derive(Debug, Serialize)]
struct CustomLayerEntry<'a> {
    properties: CustomLayerProperties<'a>,
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct CustomLayerProperties<'a> {
    title: &'a str,
    template: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    maxzoom: &'a str,
    #[serde(rename = "alphaOverlay")]
    alpha_overlay: bool,
    class: &'a str,
}

/// One `encodeURIComponent`-equivalent pass.
///
/// Kept as a standalone single pass so the single-encoded and double-encoded
/// segments stay independently verifiable; do not fold the two passes into
/// one combined routine.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Builds the CalTopo deep link for the given state.
///
/// Pure and synchronous. Callers are expected to have confirmed that a tile
/// template exists (export is gated on template presence); with a template
/// that was never set the output is not guaranteed to be well-formed.
pub fn build_export_link(state: &ExportLinkState) -> Result<String> {
    let single_layer = serde_json::to_string(&LayerDescriptor {
        template: &state.tile_template,
        kind: "TILE",
        maxzoom: "20",
    })?;

    let custom_layers = serde_json::to_string(&CustomLayers {
        custom: [CustomLayerEntry {
            properties: CustomLayerProperties {
                title: &state.label,
                template: &state.tile_template,
                kind: "TILE",
                maxzoom: "20",
                alpha_overlay: false,
                class: "CustomLayer",
            },
            id: "",
        }],
    })?;

    // CalTopo decodes the o= segment once before parsing, hence two passes
    let double_encoded = encode_component(&encode_component(&single_layer));
    let single_encoded = encode_component(&custom_layers);

    Ok(format!(
        "{}#ll={},{}&z={}&b=mbt&o=cl_{}&n=1&cl={}",
        CALTOPO_BASE,
        state.center.lat,
        state.center.lng,
        state.zoom,
        double_encoded,
        single_encoded,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn sample_state() -> ExportLinkState {
        ExportLinkState {
            label: "Planet 2020-09-30".to_string(),
            tile_template: "https://planet.jeffheidel.com/api/tile/{Z}/{X}/{Y}.png?date=2020-09-30"
                .to_string(),
            center: LatLng::new(47.5, -119.0),
            zoom: 7,
        }
    }

    fn decode(input: &str) -> String {
        percent_decode_str(input).decode_utf8().unwrap().to_string()
    }

    #[test]
    fn test_encode_component_matches_encode_uri_component() {
        // Characters encodeURIComponent leaves alone
        assert_eq!(encode_component("Az09-_.!~*'()"), "Az09-_.!~*'()");
        // Characters it escapes
        assert_eq!(encode_component("{\"a\":1}"), "%7B%22a%22%3A1%7D");
        assert_eq!(encode_component("a b/c?d=e&f"), "a%20b%2Fc%3Fd%3De%26f");
    }

    #[test]
    fn test_two_passes_differ_from_one() {
        let json = r#"{"template":"x"}"#;
        let once = encode_component(json);
        let twice = encode_component(&once);
        assert_ne!(once, twice);
        assert_eq!(decode(&twice), once);
        assert_eq!(decode(&decode(&twice)), json);
    }

    #[test]
    fn test_link_layout() {
        let url = build_export_link(&sample_state()).unwrap();
        assert!(url.starts_with("https://caltopo.com/map.html#ll=47.5,-119&z=7&b=mbt&o=cl_"));
        assert!(url.contains("&n=1&cl="));
    }

    #[test]
    fn test_single_layer_descriptor_round_trips_through_double_decode() {
        let url = build_export_link(&sample_state()).unwrap();
        let after_o = url.split("&o=cl_").nth(1).unwrap();
        let double_encoded = after_o.split("&n=1").next().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&decode(&decode(double_encoded))).unwrap();
        assert_eq!(
            json["template"],
            "https://planet.jeffheidel.com/api/tile/{Z}/{X}/{Y}.png?date=2020-09-30"
        );
        assert_eq!(json["type"], "TILE");
        assert_eq!(json["maxzoom"], "20");
    }

    #[test]
    fn test_custom_layers_descriptor_round_trips_through_single_decode() {
        let url = build_export_link(&sample_state()).unwrap();
        let single_encoded = url.split("&cl=").nth(1).unwrap();

        let json: serde_json::Value = serde_json::from_str(&decode(single_encoded)).unwrap();
        let properties = &json["custom"][0]["properties"];
        assert_eq!(properties["title"], "Planet 2020-09-30");
        assert_eq!(properties["alphaOverlay"], false);
        assert_eq!(properties["class"], "CustomLayer");
        assert_eq!(json["custom"][0]["id"], "");
    }

    #[test]
    fn test_descriptor_field_order_is_byte_exact() {
        let json = serde_json::to_string(&LayerDescriptor {
            template: "T",
            kind: "TILE",
            maxzoom: "20",
        })
        .unwrap();
        assert_eq!(json, r#"{"template":"T","type":"TILE","maxzoom":"20"}"#);
    }

    #[test]
    fn test_origin_at_zoom_zero_is_well_formed() {
        let state = ExportLinkState {
            center: LatLng::new(0.0, 0.0),
            zoom: 0,
            ..sample_state()
        };
        let url = build_export_link(&state).unwrap();
        assert!(url.contains("#ll=0,0&z=0&b=mbt"));
    }
}
