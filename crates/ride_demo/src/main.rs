//! Demo entry point: builds the world, wires the cast, prints the report.
//!
//! Takes no input and always exits 0; the stdout report is the program's
//! only external surface.

use bevy_ecs::prelude::World;
use ride_core::report::demo_report;
use ride_demo::build_demo;

fn main() {
    let mut world = World::new();
    let cast = build_demo(&mut world);
    print!("{}", demo_report(&world, &cast.rides, cast.driver, cast.rider));
}
