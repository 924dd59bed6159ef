//! Rendering of the demo report printed to stdout.
//!
//! Components carry state; this module turns a populated [`World`] plus
//! entity handles into the human-readable report lines. The output exists
//! for inspection during a demo run and is not a stable machine format;
//! machine-readable exports live in the `ride_demo` crate.

use bevy_ecs::prelude::{Entity, World};

use crate::ecs::{Driver, Ride, Rider};

/// Section header preceding the ride detail lines.
pub const RIDE_DETAILS_HEADER: &str = "-- Ride Details --";

/// One [`Ride::describe`] line per handle, in the order given (callers pass
/// creation order).
pub fn ride_detail_lines(world: &World, rides: &[Entity]) -> Vec<String> {
    rides
        .iter()
        .map(|&ride| {
            world
                .get::<Ride>(ride)
                .expect("ride is spawned in this world")
                .describe()
        })
        .collect()
}

/// The driver's one-line summary.
pub fn driver_summary(world: &World, driver: Entity) -> String {
    world
        .get::<Driver>(driver)
        .expect("driver is spawned in this world")
        .describe()
}

/// The rider's history: a named header followed by one detail line per
/// requested ride, in request order.
pub fn rider_history(world: &World, rider: Entity) -> Vec<String> {
    let rider = world
        .get::<Rider>(rider)
        .expect("rider is spawned in this world");
    let mut lines = Vec::with_capacity(rider.requested_rides().len() + 1);
    lines.push(format!("-- {}'s Ride History --", rider.name));
    lines.extend(rider.view_rides(world));
    lines
}

/// The full report: ride details, driver summary, rider history, separated
/// by blank lines. Ends with a trailing newline so callers can `print!` it.
pub fn demo_report(world: &World, rides: &[Entity], driver: Entity, rider: Entity) -> String {
    let mut lines = vec![RIDE_DETAILS_HEADER.to_string()];
    lines.extend(ride_detail_lines(world, rides));
    lines.push(String::new());
    lines.push(driver_summary(world, driver));
    lines.push(String::new());
    lines.extend(rider_history(world, rider));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_world() -> (World, Vec<Entity>, Entity, Entity) {
        let mut world = World::new();
        let rides = vec![
            world
                .spawn(Ride::standard(101, "Downtown", "Airport", 10.0))
                .id(),
            world.spawn(Ride::premium(102, "Mall", "Hotel", 5.0)).id(),
        ];

        let mut driver = Driver::new(1, "Alice", 4.9);
        for &ride in &rides {
            driver.assign_ride(ride);
        }
        let driver = world.spawn(driver).id();

        let mut rider = Rider::new(501, "Bob");
        for &ride in &rides {
            rider.request_ride(ride);
        }
        let rider = world.spawn(rider).id();

        (world, rides, driver, rider)
    }

    #[test]
    fn detail_lines_follow_handle_order() {
        let (world, rides, _, _) = sample_world();
        let lines = ride_detail_lines(&world, &rides);
        assert_eq!(
            lines,
            vec![
                "Ride 101: from Downtown to Airport, distance=10 km, fare=15",
                "Ride 102: from Mall to Hotel, distance=5 km, fare=17.5",
            ]
        );
    }

    #[test]
    fn rider_history_is_named_after_the_rider() {
        let (world, _, _, rider) = sample_world();
        let lines = rider_history(&world, rider);
        assert_eq!(lines[0], "-- Bob's Ride History --");
        assert_eq!(lines.len(), 3, "header plus one line per requested ride");
    }

    #[test]
    fn demo_report_matches_the_reference_output() {
        let (world, rides, driver, rider) = sample_world();
        let report = demo_report(&world, &rides, driver, rider);
        let expected = "\
-- Ride Details --
Ride 101: from Downtown to Airport, distance=10 km, fare=15
Ride 102: from Mall to Hotel, distance=5 km, fare=17.5

Driver Alice (ID: 1) Rating: 4.9 | Rides completed: 2

-- Bob's Ride History --
Ride 101: from Downtown to Airport, distance=10 km, fare=15
Ride 102: from Mall to Hotel, distance=5 km, fare=17.5
";
        assert_eq!(report, expected);
    }

    #[test]
    fn report_reflects_distance_changes_between_renders() {
        let (mut world, rides, driver, rider) = sample_world();
        world
            .get_mut::<Ride>(rides[0])
            .expect("ride is spawned in this world")
            .set_distance_km(20.0);

        let report = demo_report(&world, &rides, driver, rider);
        assert!(report.contains("Ride 101: from Downtown to Airport, distance=20 km, fare=30"));
    }
}
