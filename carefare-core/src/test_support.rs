//! Deterministic helpers for unit and behaviour tests.

use crate::{DistanceEstimator, Vehicle, VehicleKind};

/// `DistanceEstimator` that reports the same distance for every trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDistanceEstimator(pub u32);

impl DistanceEstimator for FixedDistanceEstimator {
    fn estimate_km(&self, _pickup: &str, _destination: &str) -> u32 {
        self.0
    }
}

/// Build a vehicle of `kind` with the given fares and capacity.
///
/// Accessibility flags follow the kind: wheelchair kinds and minivans are
/// wheelchair accessible, stretcher vehicles carry a stretcher.
#[must_use]
pub fn vehicle_of_kind(
    id: &str,
    kind: VehicleKind,
    base_fare: u32,
    fare_per_km: u32,
    capacity: u32,
) -> Vehicle {
    let vehicle = Vehicle::new(id, id, kind, base_fare, fare_per_km, capacity);
    match kind {
        VehicleKind::CompactWheelchair | VehicleKind::WheelchairVan | VehicleKind::Minivan => {
            vehicle.with_wheelchair_access()
        }
        VehicleKind::Stretcher => vehicle.with_stretcher_support(),
        VehicleKind::Sedan | VehicleKind::CompactMinivan | VehicleKind::UniversalTaxi => vehicle,
    }
}
