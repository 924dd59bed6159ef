//! Consumer side of the ride_core domain model: the demo composition root,
//! plus manifest extraction and file export for tooling.

pub mod demo;
pub mod export;
pub mod manifest;

pub use demo::{build_demo, DemoCast};
pub use export::{export_to_csv, export_to_json};
pub use manifest::{extract_manifest, Manifest};
