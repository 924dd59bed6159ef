//! Manifest extraction: flat, serializable records of world state.
//!
//! Records are snapshots; a ride's `fare` field holds the fare as of
//! extraction and goes stale if the ride's distance changes afterwards.
//! Recompute through [`ride_core::ecs::Ride::fare`] when freshness matters.

use bevy_ecs::prelude::World;
use ride_core::ecs::{Driver, Ride, Rider, ServiceClass};
use serde::Serialize;

/// One ride, flattened for export.
#[derive(Debug, Clone, Serialize)]
pub struct RideRecord {
    pub id: u32,
    pub service: ServiceClass,
    pub pickup: String,
    pub dropoff: String,
    pub distance_km: f64,
    pub fare: f64,
}

/// One driver, flattened for export. Holds a ride count, not handles.
#[derive(Debug, Clone, Serialize)]
pub struct DriverRecord {
    pub id: u32,
    pub name: String,
    pub rating: f64,
    pub assigned_rides: usize,
}

/// One rider, flattened for export.
#[derive(Debug, Clone, Serialize)]
pub struct RiderRecord {
    pub id: u32,
    pub name: String,
    pub requested_rides: usize,
}

/// Everything in the world, flattened and sorted by id.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub rides: Vec<RideRecord>,
    pub drivers: Vec<DriverRecord>,
    pub riders: Vec<RiderRecord>,
}

/// Collects every ride, driver, and rider in `world` into a [`Manifest`].
///
/// Query iteration order is not creation order, so each section is sorted
/// by id to keep the output deterministic.
pub fn extract_manifest(world: &mut World) -> Manifest {
    let mut rides: Vec<RideRecord> = world
        .query::<&Ride>()
        .iter(world)
        .map(|ride| RideRecord {
            id: ride.id(),
            service: ride.service(),
            pickup: ride.pickup().to_string(),
            dropoff: ride.dropoff().to_string(),
            distance_km: ride.distance_km(),
            fare: ride.fare(),
        })
        .collect();
    rides.sort_by_key(|record| record.id);

    let mut drivers: Vec<DriverRecord> = world
        .query::<&Driver>()
        .iter(world)
        .map(|driver| DriverRecord {
            id: driver.id,
            name: driver.name.clone(),
            rating: driver.rating,
            assigned_rides: driver.ride_count(),
        })
        .collect();
    drivers.sort_by_key(|record| record.id);

    let mut riders: Vec<RiderRecord> = world
        .query::<&Rider>()
        .iter(world)
        .map(|rider| RiderRecord {
            id: rider.id,
            name: rider.name.clone(),
            requested_rides: rider.requested_rides().len(),
        })
        .collect();
    riders.sort_by_key(|record| record.id);

    Manifest {
        rides,
        drivers,
        riders,
    }
}
