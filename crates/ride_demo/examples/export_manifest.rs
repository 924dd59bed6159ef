//! Exports the demo manifest to JSON and CSV files.
//!
//! ```sh
//! cargo run --example export_manifest -p ride_demo -- --output manifest
//! ```

use bevy_ecs::prelude::World;
use ride_demo::{build_demo, export_to_csv, export_to_json, extract_manifest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args()
        .skip_while(|a| a != "--output")
        .nth(1)
        .unwrap_or_else(|| "manifest".to_string());

    let mut world = World::new();
    build_demo(&mut world);
    let manifest = extract_manifest(&mut world);

    export_to_json(&manifest, format!("{output}.json"))?;
    export_to_csv(&manifest.rides, format!("{output}.csv"))?;

    println!(
        "Exported {} rides, {} drivers, {} riders to {output}.json and {output}.csv",
        manifest.rides.len(),
        manifest.drivers.len(),
        manifest.riders.len()
    );
    Ok(())
}
