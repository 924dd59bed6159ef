//! Scenario setup: populate a world with rides, drivers, and riders.
//!
//! Demos and benchmarks that want a fleet larger than the canonical
//! two-ride example build one here. Locations come from a fixed pool and
//! distances are sampled uniformly; pass a seed for reproducible output.

use bevy_ecs::prelude::{Entity, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::ecs::{Driver, Ride, Rider, ServiceClass};

/// Location pool for generated trips.
const LOCATIONS: &[&str] = &[
    "Downtown", "Airport", "Mall", "Hotel", "University", "Harbor", "Stadium", "Old Town",
];

/// Ride ids start here so generated fleets line up with the demo numbering.
const FIRST_RIDE_ID: u32 = 101;

/// Rider ids start here, after the driver id range.
const FIRST_RIDER_ID: u32 = 501;

/// Parameters for building a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub num_standard_rides: usize,
    pub num_premium_rides: usize,
    pub num_drivers: usize,
    pub num_riders: usize,
    /// Random seed for reproducibility (optional; if None, uses entropy).
    pub seed: Option<u64>,
    /// Trip distances are sampled uniformly from this range (km).
    pub min_distance_km: f64,
    pub max_distance_km: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_standard_rides: 20,
            num_premium_rides: 10,
            num_drivers: 5,
            num_riders: 15,
            seed: None,
            min_distance_km: 1.0,
            max_distance_km: 25.0,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_ride_counts(mut self, standard: usize, premium: usize) -> Self {
        self.num_standard_rides = standard;
        self.num_premium_rides = premium;
        self
    }

    /// Distance sampling range in km. Not validated, like every other input.
    pub fn with_distance_range(mut self, min_km: f64, max_km: f64) -> Self {
        self.min_distance_km = min_km;
        self.max_distance_km = max_km;
        self
    }
}

/// Handles to everything spawned by [`build_scenario`], in spawn order.
#[derive(Debug, Clone, Default)]
pub struct ScenarioHandles {
    pub rides: Vec<Entity>,
    pub drivers: Vec<Entity>,
    pub riders: Vec<Entity>,
}

/// Populates `world` with drivers, riders, and rides, wiring each ride to
/// one random driver and one random rider through the normal assignment
/// operations. Standard rides are spawned before premium ones; ids are
/// sequential from [`FIRST_RIDE_ID`].
pub fn build_scenario(world: &mut World, params: ScenarioParams) -> ScenarioHandles {
    let mut rng: StdRng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut handles = ScenarioHandles::default();

    for i in 0..params.num_drivers {
        // One-decimal ratings, the way app stores render them.
        let rating = (rng.gen_range(3.0..=5.0_f64) * 10.0).round() / 10.0;
        let driver = Driver::new(i as u32 + 1, format!("Driver {}", i + 1), rating);
        handles.drivers.push(world.spawn(driver).id());
    }

    for i in 0..params.num_riders {
        let rider = Rider::new(FIRST_RIDER_ID + i as u32, format!("Rider {}", i + 1));
        handles.riders.push(world.spawn(rider).id());
    }

    let total_rides = params.num_standard_rides + params.num_premium_rides;
    for i in 0..total_rides {
        let service = if i < params.num_standard_rides {
            ServiceClass::Standard
        } else {
            ServiceClass::Premium
        };

        let pickup = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];
        let mut dropoff = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];
        while dropoff == pickup {
            dropoff = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];
        }
        let distance_km = rng.gen_range(params.min_distance_km..=params.max_distance_km);

        let ride = world
            .spawn(Ride::new(
                FIRST_RIDE_ID + i as u32,
                pickup,
                dropoff,
                distance_km,
                service,
            ))
            .id();
        handles.rides.push(ride);

        if !handles.drivers.is_empty() {
            let driver = handles.drivers[rng.gen_range(0..handles.drivers.len())];
            world
                .get_mut::<Driver>(driver)
                .expect("driver is spawned in this world")
                .assign_ride(ride);
        }

        if !handles.riders.is_empty() {
            let rider = handles.riders[rng.gen_range(0..handles.riders.len())];
            world
                .get_mut::<Rider>(rider)
                .expect("rider is spawned in this world")
                .request_ride(ride);
        }
    }

    handles
}
