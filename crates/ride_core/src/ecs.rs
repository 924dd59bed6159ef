//! Entity components for the ride-share domain: rides, drivers, riders.
//!
//! A single [`World`] owns every entity; drivers and riders keep `Entity`
//! handles into it rather than copies of ride data, so a distance update on
//! a ride is observed by every holder on the next fare computation.

use bevy_ecs::prelude::{Component, Entity, World};
use serde::{Deserialize, Serialize};

use crate::pricing;

/// Service class of a ride; the single axis of fare variation.
///
/// Adding a new class means adding a variant here and a formula arm in
/// [`pricing::fare_for`]; no shared logic changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceClass {
    Standard,
    Premium,
}

/// One ride: identity, trip endpoints, and current distance.
///
/// Nothing is validated: ids are caller-supplied and not checked for
/// uniqueness, and the distance may be zero or negative.
#[derive(Debug, Clone, Component)]
pub struct Ride {
    id: u32,
    pickup: String,
    dropoff: String,
    distance_km: f64,
    service: ServiceClass,
}

impl Ride {
    pub fn new(
        id: u32,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_km: f64,
        service: ServiceClass,
    ) -> Self {
        Self {
            id,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_km,
            service,
        }
    }

    pub fn standard(
        id: u32,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_km: f64,
    ) -> Self {
        Self::new(id, pickup, dropoff, distance_km, ServiceClass::Standard)
    }

    pub fn premium(
        id: u32,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_km: f64,
    ) -> Self {
        Self::new(id, pickup, dropoff, distance_km, ServiceClass::Premium)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    pub fn service(&self) -> ServiceClass {
        self.service
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Updates the trip distance. No bounds checks; the next [`Self::fare`]
    /// call reflects the new value.
    pub fn set_distance_km(&mut self, distance_km: f64) {
        self.distance_km = distance_km;
    }

    /// Fare at the current distance, recomputed on every call.
    pub fn fare(&self) -> f64 {
        pricing::fare_for(self.service, self.distance_km)
    }

    /// One human-readable line with id, endpoints, distance, and the fare
    /// as of this call.
    pub fn describe(&self) -> String {
        format!(
            "Ride {}: from {} to {}, distance={} km, fare={}",
            self.id,
            self.pickup,
            self.dropoff,
            self.distance_km,
            self.fare()
        )
    }
}

/// A driver and the rides assigned to them, in assignment order.
#[derive(Debug, Clone, Component)]
pub struct Driver {
    pub id: u32,
    pub name: String,
    /// Unvalidated; nothing enforces a 0-5 range.
    pub rating: f64,
    assigned_rides: Vec<Entity>,
}

impl Driver {
    pub fn new(id: u32, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            assigned_rides: Vec::new(),
        }
    }

    /// Appends a ride handle. Duplicates are permitted and counted; there is
    /// no cap and no membership check.
    pub fn assign_ride(&mut self, ride: Entity) {
        self.assigned_rides.push(ride);
    }

    pub fn assigned_rides(&self) -> &[Entity] {
        &self.assigned_rides
    }

    /// Number of `assign_ride` calls made on this driver, duplicates included.
    pub fn ride_count(&self) -> usize {
        self.assigned_rides.len()
    }

    /// One summary line; reports a ride count only, not per-ride details.
    pub fn describe(&self) -> String {
        format!(
            "Driver {} (ID: {}) Rating: {} | Rides completed: {}",
            self.name,
            self.id,
            self.rating,
            self.ride_count()
        )
    }
}

/// A rider and the rides they have requested, in request order.
#[derive(Debug, Clone, Component)]
pub struct Rider {
    pub id: u32,
    pub name: String,
    requested_rides: Vec<Entity>,
}

impl Rider {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            requested_rides: Vec::new(),
        }
    }

    /// Appends a ride handle; same append-only semantics as
    /// [`Driver::assign_ride`].
    pub fn request_ride(&mut self, ride: Entity) {
        self.requested_rides.push(ride);
    }

    pub fn requested_rides(&self) -> &[Entity] {
        &self.requested_rides
    }

    /// One [`Ride::describe`] line per requested ride, in insertion order.
    ///
    /// Every ride goes through the same `describe`/`fare` path regardless of
    /// service class; dispatch happens inside [`Ride`], not here.
    pub fn view_rides(&self, world: &World) -> Vec<String> {
        self.requested_rides
            .iter()
            .map(|&ride| {
                world
                    .get::<Ride>(ride)
                    .expect("requested ride is spawned in this world")
                    .describe()
            })
            .collect()
    }
}
