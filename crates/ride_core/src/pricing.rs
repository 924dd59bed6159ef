//! Fare policies for the ride service classes.

use crate::ecs::ServiceClass;

/// Per-kilometer rate for standard rides, in currency units (e.g., dollars).
pub const STANDARD_PER_KM_RATE: f64 = 1.50;

/// Per-kilometer rate for premium rides.
pub const PREMIUM_PER_KM_RATE: f64 = 2.50;

/// Flat fee added on top of the per-kilometer charge for premium rides.
pub const PREMIUM_BASE_FARE: f64 = 5.00;

/// Calculate the fare for a ride of the given service class.
///
/// Formulas:
/// - standard: `distance_km * STANDARD_PER_KM_RATE`
/// - premium: `distance_km * PREMIUM_PER_KM_RATE + PREMIUM_BASE_FARE`
///
/// Recomputed from the current distance on every call; nothing is cached.
/// Distances flow through the formula as-is, including zero and negative
/// values (distances are never validated anywhere in this crate).
pub fn fare_for(service: ServiceClass, distance_km: f64) -> f64 {
    match service {
        ServiceClass::Standard => distance_km * STANDARD_PER_KM_RATE,
        ServiceClass::Premium => distance_km * PREMIUM_PER_KM_RATE + PREMIUM_BASE_FARE,
    }
}
