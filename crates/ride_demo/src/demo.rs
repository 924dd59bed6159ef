//! The canonical two-ride demo wiring.

use bevy_ecs::prelude::{Entity, World};
use ride_core::ecs::{Driver, Ride, Rider};

/// Handles to the entities spawned by [`build_demo`].
#[derive(Debug, Clone)]
pub struct DemoCast {
    /// Ride handles in creation order.
    pub rides: Vec<Entity>,
    pub driver: Entity,
    pub rider: Entity,
}

/// Populates `world` with the demo cast: a standard and a premium ride,
/// a driver assigned both, and a rider who requested both.
///
/// The world is the sole owner of all entities; the returned handles are
/// non-owning and stay valid for the life of the world.
pub fn build_demo(world: &mut World) -> DemoCast {
    let rides = vec![
        world
            .spawn(Ride::standard(101, "Downtown", "Airport", 10.0))
            .id(),
        world.spawn(Ride::premium(102, "Mall", "Hotel", 5.0)).id(),
    ];

    let driver = world.spawn(Driver::new(1, "Alice", 4.9)).id();
    {
        let mut alice = world
            .get_mut::<Driver>(driver)
            .expect("driver is spawned in this world");
        for &ride in &rides {
            alice.assign_ride(ride);
        }
    }

    let rider = world.spawn(Rider::new(501, "Bob")).id();
    {
        let mut bob = world
            .get_mut::<Rider>(rider)
            .expect("rider is spawned in this world");
        for &ride in &rides {
            bob.request_ride(ride);
        }
    }

    DemoCast {
        rides,
        driver,
        rider,
    }
}
