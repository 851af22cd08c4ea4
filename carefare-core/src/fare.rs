//! Estimate the fare for a trip.
//!
//! The full fare is the vehicle's flat fare plus its per-kilometre fare times
//! the distance. Under the insurance-assisted tier the passenger pays one
//! tenth of both components. Results are rounded to the nearest yen with
//! ties rounding up.

use crate::{AnswerSet, ServiceTier, Vehicle, classify};

/// Share of the fare covered by the passenger under care insurance is
/// `1 / COPAY_DIVISOR`.
pub const COPAY_DIVISOR: f64 = 10.0;

/// Return the fare in yen for `vehicle` over `distance_km` under `tier`.
///
/// Negative or non-finite distances are treated as zero, so the fare is
/// never below the tier-adjusted flat fare.
///
/// # Examples
/// ```
/// use carefare_core::{ServiceTier, Vehicle, VehicleKind, fare_for_tier};
///
/// let sedan = Vehicle::new("sedan", "Sedan", VehicleKind::Sedan, 1200, 180, 4);
/// assert_eq!(fare_for_tier(&sedan, 5.0, ServiceTier::SelfPay), 2100);
/// assert_eq!(fare_for_tier(&sedan, 5.0, ServiceTier::InsuranceAssisted), 210);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "fares scale with fractional distances and are rounded to whole yen"
)]
pub fn fare_for_tier(vehicle: &Vehicle, distance_km: f64, tier: ServiceTier) -> u32 {
    let km = if distance_km.is_finite() && distance_km > 0.0 {
        distance_km
    } else {
        0.0
    };
    let full = f64::from(vehicle.base_fare) + f64::from(vehicle.fare_per_km) * km;
    let payable = if tier.is_insurance_assisted() {
        full / COPAY_DIVISOR
    } else {
        full
    };
    // `round` resolves ties away from zero, which is upwards for fares.
    payable.round().min(f64::from(u32::MAX)) as u32
}

/// Return the fare in yen for `vehicle` over `distance_km`, classifying
/// `answers` to pick the pricing rule.
///
/// Callers that already hold a classification should use
/// [`fare_for_tier`] so one evaluation never classifies twice.
#[must_use]
pub fn estimate_cost(vehicle: &Vehicle, distance_km: f64, answers: &AnswerSet) -> u32 {
    fare_for_tier(vehicle, distance_km, classify(answers).tier)
}
