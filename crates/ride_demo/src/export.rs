//! Manifest export to JSON and CSV files.
//!
//! The demo binary itself only prints to stdout; these functions exist for
//! tooling and tests that want the world state in a machine-readable form.

use std::fs::File;
use std::path::Path;

use ride_core::ecs::ServiceClass;

use crate::manifest::{Manifest, RideRecord};

/// Export a full manifest to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    manifest: &Manifest,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = create_output_file(path)?;
    serde_json::to_writer_pretty(file, manifest)?;
    Ok(())
}

/// Export ride records to CSV, one row per ride.
///
/// # Errors
///
/// Returns an error if `rides` is empty or if file creation or CSV writing
/// fails.
pub fn export_to_csv(
    rides: &[RideRecord],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_not_empty(rides)?;
    let file = create_output_file(path)?;
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "ride_id",
        "service",
        "pickup",
        "dropoff",
        "distance_km",
        "fare",
    ])?;

    for ride in rides {
        let service = match ride.service {
            ServiceClass::Standard => "Standard",
            ServiceClass::Premium => "Premium",
        };
        let id = ride.id.to_string();
        let distance_km = ride.distance_km.to_string();
        let fare = ride.fare.to_string();

        wtr.write_record([
            id.as_str(),
            service,
            ride.pickup.as_str(),
            ride.dropoff.as_str(),
            distance_km.as_str(),
            fare.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn ensure_not_empty<T>(items: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    if items.is_empty() {
        return Err("No rides to export".into());
    }

    Ok(())
}

fn create_output_file(path: impl AsRef<Path>) -> Result<File, Box<dyn std::error::Error>> {
    Ok(File::create(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::build_demo;
    use crate::manifest::extract_manifest;
    use bevy_ecs::prelude::World;
    use tempfile::NamedTempFile;

    fn demo_manifest() -> Manifest {
        let mut world = World::new();
        build_demo(&mut world);
        extract_manifest(&mut world)
    }

    #[test]
    fn json_export_round_trips_through_a_file() {
        let manifest = demo_manifest();
        let file = NamedTempFile::new().expect("temp file");
        export_to_json(&manifest, file.path()).expect("json export");

        let contents = std::fs::read_to_string(file.path()).expect("read back");
        assert!(contents.contains("Downtown"));
        assert!(contents.contains("Alice"));
        assert!(contents.contains("\"fare\": 17.5"));
    }

    #[test]
    fn csv_export_writes_a_header_and_one_row_per_ride() {
        let manifest = demo_manifest();
        let file = NamedTempFile::new().expect("temp file");
        export_to_csv(&manifest.rides, file.path()).expect("csv export");

        let contents = std::fs::read_to_string(file.path()).expect("read back");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3, "header plus two rides");
        assert_eq!(lines[0], "ride_id,service,pickup,dropoff,distance_km,fare");
        assert_eq!(lines[1], "101,Standard,Downtown,Airport,10,15");
        assert_eq!(lines[2], "102,Premium,Mall,Hotel,5,17.5");
    }

    #[test]
    fn csv_export_rejects_an_empty_manifest() {
        let file = NamedTempFile::new().expect("temp file");
        let result = export_to_csv(&[], file.path());
        assert!(result.is_err());
    }
}
