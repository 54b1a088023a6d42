use planet_viewer::{
    layers::overlay::OverlayLayer,
    LatLngBounds, PlanetViewer, ViewerConfig,
};

/// Stand-in for the map surface's tile layer; just logs what it is told
struct LoggingLayer;

impl OverlayLayer for LoggingLayer {
    fn set_url(&mut self, template: &str) {
        println!("   overlay url -> {}", template);
    }

    fn set_opacity(&mut self, opacity: f64) {
        println!("   overlay opacity -> {:.2}", opacity);
    }
}

/// Example of driving the viewer core without any UI
fn main() -> planet_viewer::Result<()> {
    env_logger::init();

    println!("🛰️ Planet Viewer Headless Example");
    println!("=================================");

    let config = ViewerConfig::default();
    let mut viewer = PlanetViewer::new(config.clone());
    println!("✅ Viewer created:");
    println!(
        "   Center: {}, {} at zoom {}",
        config.start_center.lat, config.start_center.lng, config.start_zoom
    );

    // The map surface creates the overlay layer and hands it over
    viewer.attach_overlay(Box::new(LoggingLayer));
    println!("✅ Overlay layer attached");

    println!("\n🎚️ Adjusting opacity:");
    for percent in [100, 75, 50] {
        viewer.set_opacity(percent);
    }

    println!("\n🧩 Loading tiles:");
    viewer.load_tiles(&config.default_date);
    println!("   label: {}", viewer.tile_label().unwrap_or("<none>"));

    println!("\n🗺️ Simulating settled navigation:");
    let moves = [
        ("Wenatchee area", 7, LatLngBounds::from_coords(45.0, -123.0, 50.0, -115.0)),
        ("Closer in", 10, LatLngBounds::from_coords(47.0, -120.0, 48.0, -119.0)),
    ];
    for (name, zoom, bounds) in moves {
        viewer.on_viewport_settled(zoom, bounds);
        println!(
            "   📍 {} - center {}, {} at zoom {}",
            name,
            viewer.viewport().center().lat,
            viewer.viewport().center().lng,
            viewer.viewport().zoom()
        );
    }

    println!("\n🔗 Export link:");
    match viewer.export_link()? {
        Some(url) => println!("   {}", url),
        None => println!("   (hidden: no tiles loaded)"),
    }

    Ok(())
}
